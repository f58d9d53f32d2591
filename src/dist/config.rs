// Configuration types for a build run

use std::path::{Path, PathBuf};

/// Fixed configuration for one build run
///
/// Constructed once at the entry point and passed by reference to every
/// stage. Paths are relative to the current directory unless rebased with
/// [`BuildConfig::for_project`].
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project metadata file holding the version (`package.json`)
    pub metadata_path: PathBuf,

    /// Canonical source module
    pub source_path: PathBuf,

    /// Directory receiving the built artifacts
    pub output_dir: PathBuf,

    /// Human-readable library name rendered in the banner
    pub library_name: String,

    /// Top-level JS symbol the wrappers export
    pub export_name: String,

    /// Base of the artifact filenames (`<stem>.min.js`, `<stem>.esm.js`)
    pub file_stem: String,

    /// License identifier rendered in the banner
    pub license: String,

    /// Whether artifacts are minified or copied through unchanged
    pub minify: bool,

    /// Minifier settings, ignored when `minify` is false
    pub minify_options: MinifyOptions,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            metadata_path: PathBuf::from("package.json"),
            source_path: PathBuf::from("src").join("index.js"),
            output_dir: PathBuf::from("dist"),
            library_name: "VR Equirectangular Viewer".to_string(),
            export_name: "VREquirectangularViewer".to_string(),
            file_stem: "vr-equirectangular-viewer".to_string(),
            license: "MIT".to_string(),
            minify: true,
            minify_options: MinifyOptions::default(),
        }
    }
}

impl BuildConfig {
    /// Default configuration with every path resolved under `root`
    pub fn for_project(root: &Path) -> Self {
        Self::default().rebase(root)
    }

    /// Resolve the metadata, source and output paths under `root`
    pub fn rebase(mut self, root: &Path) -> Self {
        self.metadata_path = root.join(&self.metadata_path);
        self.source_path = root.join(&self.source_path);
        self.output_dir = root.join(&self.output_dir);
        self
    }

    /// Same configuration with the plain-copy policy selected
    pub fn without_minify(mut self) -> Self {
        self.minify = false;
        self
    }
}

/// Settings for the minifying policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinifyOptions {
    /// Number of compress passes; values below 1 are treated as 1
    pub passes: u8,

    /// Shorten local identifiers on the final pass
    pub mangle: bool,

    /// Remove `console.*` calls
    pub drop_console: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            passes: 2,
            mangle: true,
            drop_console: false,
        }
    }
}

impl MinifyOptions {
    pub(crate) fn effective_passes(&self) -> u8 {
        self.passes.max(1)
    }
}
