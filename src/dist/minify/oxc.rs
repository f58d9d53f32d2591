// OXC-based minification policy

use super::MinifyPolicy;
use crate::dist::banner::with_banner;
use crate::dist::compose::{ArtifactFormat, DistArtifact};
use crate::dist::config::MinifyOptions;
use crate::dist::error::{DistError, MinifyError};
use async_trait::async_trait;
use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_minifier::{CompressOptions, MangleOptions, Minifier, MinifierOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

/// Minifies artifacts with OXC and re-injects the banner as a preamble
///
/// All comments are removed by codegen; the artifact's banner is prepended
/// verbatim afterwards. Output is deterministic for a given input and
/// option set.
#[derive(Debug, Clone, Default)]
pub struct OxcMinifier {
    options: MinifyOptions,
}

impl OxcMinifier {
    pub fn new(options: MinifyOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl MinifyPolicy for OxcMinifier {
    fn name(&self) -> &'static str {
        "oxc"
    }

    fn minifies(&self) -> bool {
        true
    }

    async fn transform(&self, mut artifact: DistArtifact) -> Result<DistArtifact, DistError> {
        let format = artifact.format();
        let content = std::mem::take(&mut artifact.content);
        let options = self.options.clone();

        let code = tokio::task::spawn_blocking(move || {
            minify_source(&content, source_type_for(format), &options)
        })
        .await
        .map_err(|e| MinifyError::Engine(e.to_string()))?
        .map_err(|diagnostics| MinifyError::Syntax {
            artifact: format.label().to_string(),
            diagnostics,
        })?;

        tracing::debug!(
            format = %format,
            bytes = code.len(),
            passes = self.options.effective_passes(),
            "minified artifact"
        );

        artifact.content = with_banner(&artifact.banner, &code);
        Ok(artifact)
    }
}

/// The universal variant is a plain script whose top-level names are globals;
/// the ES variant is a module
fn source_type_for(format: ArtifactFormat) -> SourceType {
    match format {
        ArtifactFormat::UniversalModule => SourceType::script(),
        ArtifactFormat::EsModule => SourceType::mjs(),
    }
}

/// Minify `source`, returning the joined parser diagnostics on failure
///
/// Each pass re-parses the previous pass's output and compresses it again.
/// Mangling only happens on the final pass.
pub(crate) fn minify_source(
    source: &str,
    source_type: SourceType,
    options: &MinifyOptions,
) -> Result<String, String> {
    let passes = options.effective_passes();
    let mut current = source.to_string();

    for pass in 1..=passes {
        let output = {
            let allocator = Allocator::default();
            let parsed = Parser::new(&allocator, &current, source_type).parse();
            if parsed.panicked || !parsed.errors.is_empty() {
                let errors: Vec<String> = parsed.errors.iter().map(|e| e.to_string()).collect();
                return Err(errors.join("\n"));
            }
            let mut program = parsed.program;

            let mangle = (pass == passes && options.mangle).then(MangleOptions::default);
            let compress = CompressOptions {
                drop_console: options.drop_console,
                ..CompressOptions::smallest()
            };
            let minified = Minifier::new(MinifierOptions {
                mangle,
                compress: Some(compress),
                ..MinifierOptions::default()
            })
            .minify(&allocator, &mut program);

            Codegen::new()
                .with_options(CodegenOptions::minify())
                .with_scoping(minified.scoping)
                .build(&program)
                .code
        };
        current = output;
    }

    Ok(current)
}
