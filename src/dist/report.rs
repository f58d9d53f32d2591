// Build progress reporting
//
// The pipeline never writes to the terminal directly; it talks to an injected
// `Reporter`. `ConsoleReporter` is used by the binaries, `MemoryReporter` by
// tests.

use crate::dist::compose::{ArtifactFormat, DistArtifact};
use crate::dist::error::DistError;
use crate::dist::output::format_kb;
use crate::dist::pipeline::BuildSummary;
use console::{style, Term};
use parking_lot::Mutex;

/// Observer for build progress and outcome
pub trait Reporter: Send + Sync {
    fn build_started(&self, _version: &str) {}

    /// Called before a variant is handed to the minify policy
    fn variant_started(&self, format: ArtifactFormat, minify: bool);

    /// Called once the variant has been written
    fn variant_finished(&self, artifact: &DistArtifact, minify: bool);

    fn build_succeeded(&self, summary: &BuildSummary);

    fn build_failed(&self, error: &DistError);
}

/// Styled terminal output: progress to stdout, failures to stderr
pub struct ConsoleReporter {
    out: Term,
    err: Term,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }

    fn line(&self, text: &str) {
        let _ = self.out.write_line(text);
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn build_started(&self, version: &str) {
        tracing::info!(%version, "starting build");
    }

    fn variant_started(&self, format: ArtifactFormat, minify: bool) {
        let verb = if minify { "Minifying" } else { "Copying" };
        self.line(&format!(
            "{} {} {} build...",
            style("::").cyan().bold(),
            verb,
            format
        ));
    }

    fn variant_finished(&self, artifact: &DistArtifact, minify: bool) {
        let done = if minify { "minified" } else { "copied" };
        self.line(&format!(
            "{} {} build {}",
            style("✓").green(),
            artifact.format(),
            done
        ));
    }

    fn build_succeeded(&self, summary: &BuildSummary) {
        self.line("");
        self.line(&format!("{} Build complete!", style("✓").green().bold()));
        self.line("Generated files:");
        for artifact in &summary.artifacts {
            let path = artifact
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            let mode = if summary.minified { ", minified" } else { "" };
            self.line(&format!(
                "  - {} ({}{})",
                path,
                artifact.format().description(),
                mode
            ));
        }

        self.line("");
        self.line("File sizes:");
        for artifact in &summary.artifacts {
            self.line(&format!(
                "  - {}: {}",
                artifact.format(),
                format_kb(artifact.byte_size.unwrap_or(0))
            ));
        }
    }

    fn build_failed(&self, error: &DistError) {
        let _ = self.err.write_line(&format!(
            "{} Build failed: {}",
            style("error:").red().bold(),
            error
        ));
    }
}

/// A recorded reporter callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    BuildStarted { version: String },
    VariantStarted { format: ArtifactFormat, minify: bool },
    VariantFinished { format: ArtifactFormat, byte_size: u64 },
    Succeeded { sizes: Vec<(ArtifactFormat, u64)> },
    Failed { kind: &'static str, message: String },
}

/// Records every callback in order
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().clone()
    }

    pub fn failed(&self) -> bool {
        self.events
            .lock()
            .iter()
            .any(|e| matches!(e, ReportEvent::Failed { .. }))
    }

    fn push(&self, event: ReportEvent) {
        self.events.lock().push(event);
    }
}

impl Reporter for MemoryReporter {
    fn build_started(&self, version: &str) {
        self.push(ReportEvent::BuildStarted {
            version: version.to_string(),
        });
    }

    fn variant_started(&self, format: ArtifactFormat, minify: bool) {
        self.push(ReportEvent::VariantStarted { format, minify });
    }

    fn variant_finished(&self, artifact: &DistArtifact, _minify: bool) {
        self.push(ReportEvent::VariantFinished {
            format: artifact.format(),
            byte_size: artifact.byte_size.unwrap_or(0),
        });
    }

    fn build_succeeded(&self, summary: &BuildSummary) {
        let sizes = summary
            .artifacts
            .iter()
            .map(|a| (a.format(), a.byte_size.unwrap_or(0)))
            .collect();
        self.push(ReportEvent::Succeeded { sizes });
    }

    fn build_failed(&self, error: &DistError) {
        self.push(ReportEvent::Failed {
            kind: error.kind(),
            message: error.to_string(),
        });
    }
}
