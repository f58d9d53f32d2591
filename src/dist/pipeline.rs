// Build pipeline - drives every stage for one run

use crate::dist::{
    compose::{self, ArtifactFormat, DistArtifact},
    config::BuildConfig,
    error::DistError,
    metadata, output,
    minify::{policy_for, MinifyPolicy},
    report::Reporter,
    source,
};
use std::process::ExitCode;

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub version: String,
    pub minified: bool,
    /// Written artifacts, universal first
    pub artifacts: Vec<DistArtifact>,
}

impl BuildSummary {
    pub fn artifact(&self, format: ArtifactFormat) -> Option<&DistArtifact> {
        self.artifacts.iter().find(|a| a.format() == format)
    }

    pub fn size_of(&self, format: ArtifactFormat) -> Option<u64> {
        self.artifact(format).and_then(|a| a.byte_size)
    }
}

/// Sequential build: metadata, source, compose, then minify and write each
/// variant in turn
///
/// Any stage error aborts the run. Files written before the failure stay on
/// disk.
pub struct Pipeline<'a> {
    config: &'a BuildConfig,
    policy: &'a dyn MinifyPolicy,
    reporter: &'a dyn Reporter,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a BuildConfig,
        policy: &'a dyn MinifyPolicy,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            config,
            policy,
            reporter,
        }
    }

    /// Run every stage, returning the written artifacts
    ///
    /// Does not report the error on failure; see [`run_build`].
    pub async fn run(&self) -> Result<BuildSummary, DistError> {
        let version = metadata::read_version(&self.config.metadata_path)?;
        self.reporter.build_started(&version);

        let module = source::load_source(&self.config.source_path)?;
        if module.is_empty() {
            tracing::warn!(
                path = %self.config.source_path.display(),
                "source module is empty, building wrappers only"
            );
        }

        let variants = compose::compose(&module, self.config, &version);
        let minify = self.policy.minifies();
        let mut artifacts = Vec::with_capacity(2);

        for artifact in variants.into_ordered() {
            let format = artifact.format();
            self.reporter.variant_started(format, minify);

            let mut artifact = self.policy.transform(artifact).await?;
            let (path, byte_size) = output::write(
                &self.config.output_dir,
                &format.file_name(&self.config.file_stem),
                &artifact.content,
            )?;
            artifact.path = Some(path);
            artifact.byte_size = Some(byte_size);

            self.reporter.variant_finished(&artifact, minify);
            artifacts.push(artifact);
        }

        tracing::info!(%version, policy = self.policy.name(), "build finished");
        Ok(BuildSummary {
            version,
            minified: minify,
            artifacts,
        })
    }
}

/// Run a full build for `config` and map the outcome to a process exit code
///
/// The error, if any, is reported before returning `ExitCode::FAILURE`.
pub async fn run_build(config: &BuildConfig, reporter: &dyn Reporter) -> ExitCode {
    let policy = policy_for(config);
    match Pipeline::new(config, policy.as_ref(), reporter).run().await {
        Ok(summary) => {
            reporter.build_succeeded(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(kind = e.kind(), error = %e, "build failed");
            reporter.build_failed(&e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dist::minify::IdentityPolicy;
    use crate::dist::report::{MemoryReporter, ReportEvent};
    use std::path::Path;

    fn project(root: &Path, source: Option<&str>) -> BuildConfig {
        std::fs::write(root.join("package.json"), r#"{ "version": "0.3.1" }"#).unwrap();
        if let Some(source) = source {
            std::fs::create_dir_all(root.join("src")).unwrap();
            std::fs::write(root.join("src/index.js"), source).unwrap();
        }
        BuildConfig::for_project(root).without_minify()
    }

    #[tokio::test]
    async fn identity_run_writes_both_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let config = project(tmp.path(), Some("class VREquirectangularViewer {}"));
        let reporter = MemoryReporter::new();

        let summary = Pipeline::new(&config, &IdentityPolicy, &reporter)
            .run()
            .await
            .unwrap();

        assert_eq!(summary.version, "0.3.1");
        assert!(!summary.minified);
        assert_eq!(summary.artifacts.len(), 2);
        for artifact in &summary.artifacts {
            let path = artifact.path.as_ref().unwrap();
            assert_eq!(
                std::fs::metadata(path).unwrap().len(),
                artifact.byte_size.unwrap()
            );
        }

        let started: Vec<_> = reporter
            .events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::VariantStarted { format, .. } => Some(format),
                _ => None,
            })
            .collect();
        assert_eq!(
            started,
            vec![ArtifactFormat::UniversalModule, ArtifactFormat::EsModule]
        );
    }

    #[tokio::test]
    async fn missing_metadata_aborts_before_source() {
        let tmp = tempfile::tempdir().unwrap();
        let config = BuildConfig::for_project(tmp.path()).without_minify();
        let reporter = MemoryReporter::new();

        let err = Pipeline::new(&config, &IdentityPolicy, &reporter)
            .run()
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "metadata");
        assert!(reporter.events().is_empty());
        assert!(!config.output_dir.exists());
    }

    #[tokio::test]
    async fn run_build_maps_failure_to_exit_code() {
        let tmp = tempfile::tempdir().unwrap();
        let config = project(tmp.path(), None);
        let reporter = MemoryReporter::new();

        let code = run_build(&config, &reporter).await;
        assert_eq!(code, ExitCode::FAILURE);
        assert!(reporter.failed());
        assert!(!config.output_dir.exists());
    }

    #[tokio::test]
    async fn run_build_reports_success() {
        let tmp = tempfile::tempdir().unwrap();
        let config = project(tmp.path(), Some("function VREquirectangularViewer() {}"));
        let reporter = MemoryReporter::new();

        assert_eq!(run_build(&config, &reporter).await, ExitCode::SUCCESS);
        assert!(matches!(
            reporter.events().last(),
            Some(ReportEvent::Succeeded { sizes }) if sizes.len() == 2
        ));
    }
}
