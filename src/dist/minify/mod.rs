// Minify policies - the transform applied to each composed artifact

pub mod identity;
pub mod oxc;

pub use identity::IdentityPolicy;
pub use oxc::OxcMinifier;

use crate::dist::compose::DistArtifact;
use crate::dist::config::BuildConfig;
use crate::dist::error::DistError;
use async_trait::async_trait;

/// Transform applied to every artifact before it is written
///
/// Implementations replace `artifact.content` and must keep
/// `artifact.banner` as the leading text of the result.
#[async_trait]
pub trait MinifyPolicy: Send + Sync {
    /// Policy name used in progress output
    fn name(&self) -> &'static str;

    /// Whether the policy changes content
    fn minifies(&self) -> bool;

    async fn transform(&self, artifact: DistArtifact) -> Result<DistArtifact, DistError>;
}

/// Select the policy requested by `config.minify`
pub fn policy_for(config: &BuildConfig) -> Box<dyn MinifyPolicy> {
    if config.minify {
        Box::new(OxcMinifier::new(config.minify_options.clone()))
    } else {
        Box::new(IdentityPolicy)
    }
}
