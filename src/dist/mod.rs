// Distribution build pipeline
//
// metadata -> source -> compose -> minify policy (per variant) -> output,
// with progress sent to a `Reporter`.

pub mod banner;
pub mod compose;
pub mod config;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod minify;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod source;

pub use banner::Banner;
pub use compose::{ArtifactFormat, ComposedVariants, DistArtifact, VariantComposer};
pub use config::{BuildConfig, MinifyOptions};
pub use error::{DistError, MetadataError, MinifyError, SourceReadError, WriteError};
pub use logging::init_tracing;
pub use minify::{policy_for, IdentityPolicy, MinifyPolicy, OxcMinifier};
pub use pipeline::{run_build, BuildSummary, Pipeline};
pub use report::{ConsoleReporter, MemoryReporter, ReportEvent, Reporter};
pub use source::SourceModule;
