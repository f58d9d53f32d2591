// License/version banner rendered at the top of every artifact

use crate::dist::config::BuildConfig;

/// Preamble comment block that must survive minification verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub library_name: String,
    pub version: String,
    pub license: String,
}

impl Banner {
    pub fn new(config: &BuildConfig, version: &str) -> Self {
        Self {
            library_name: config.library_name.clone(),
            version: version.to_string(),
            license: config.license.clone(),
        }
    }

    /// Rendered comment block, without a trailing newline
    pub fn render(&self) -> String {
        format!(
            "/**\n * {}\n * @version {}\n * @license {}\n */",
            self.library_name, self.version, self.license
        )
    }
}

/// Prefix `body` with the banner on its own lines
pub(crate) fn with_banner(banner: &str, body: &str) -> String {
    let mut out = String::with_capacity(banner.len() + 1 + body.len());
    out.push_str(banner);
    out.push('\n');
    out.push_str(body);
    out
}

/// Remove a leading banner added by [`with_banner`], if present
pub fn strip_banner<'a>(banner: &str, content: &'a str) -> Option<&'a str> {
    content.strip_prefix(banner)?.strip_prefix('\n')
}
