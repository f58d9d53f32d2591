// Variant composition - wraps the source module for each distribution format

use crate::dist::banner::{with_banner, Banner};
use crate::dist::config::BuildConfig;
use crate::dist::source::SourceModule;
use std::fmt;
use std::path::PathBuf;

/// Distribution format of an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactFormat {
    /// CommonJS/global wrapper
    UniversalModule,
    /// Default-export wrapper
    EsModule,
}

impl ArtifactFormat {
    /// Output filename for this format; independent of the minify policy
    pub fn file_name(self, stem: &str) -> String {
        match self {
            ArtifactFormat::UniversalModule => format!("{stem}.min.js"),
            ArtifactFormat::EsModule => format!("{stem}.esm.js"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArtifactFormat::UniversalModule => "UMD",
            ArtifactFormat::EsModule => "ESM",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ArtifactFormat::UniversalModule => "UMD format",
            ArtifactFormat::EsModule => "ES Module format",
        }
    }
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One distribution artifact as it moves through the pipeline
///
/// `content` is replaced by the minify policy; `path` and `byte_size` are set
/// once the artifact has been written.
#[derive(Debug, Clone)]
pub struct DistArtifact {
    format: ArtifactFormat,
    /// Rendered banner the content starts with
    pub banner: String,
    pub content: String,
    pub path: Option<PathBuf>,
    pub byte_size: Option<u64>,
}

impl DistArtifact {
    pub fn new(format: ArtifactFormat, banner: String, content: String) -> Self {
        Self {
            format,
            banner,
            content,
            path: None,
            byte_size: None,
        }
    }

    pub fn format(&self) -> ArtifactFormat {
        self.format
    }
}

/// Both composed variants, in processing order
#[derive(Debug, Clone)]
pub struct ComposedVariants {
    pub universal: DistArtifact,
    pub es_module: DistArtifact,
}

impl ComposedVariants {
    /// Universal first, then ES module
    pub fn into_ordered(self) -> [DistArtifact; 2] {
        [self.universal, self.es_module]
    }
}

/// Builds the format-specific wrappers around the source body
pub struct VariantComposer<'a> {
    export_name: &'a str,
}

impl<'a> VariantComposer<'a> {
    pub fn new(config: &'a BuildConfig) -> Self {
        Self {
            export_name: &config.export_name,
        }
    }

    /// Wrapper text for `format` around `source`, without the banner
    pub fn wrap(&self, format: ArtifactFormat, source: &str) -> String {
        let name = self.export_name;
        match format {
            // Both guards are evaluated: a bundler-visible `module` and a
            // browser `window` can coexist.
            ArtifactFormat::UniversalModule => format!(
                "{source}\n\n\
                 // UMD export\n\
                 if (typeof module !== 'undefined' && module.exports) {{\n  \
                 module.exports = {name};\n\
                 }}\n\
                 if (typeof window !== 'undefined') {{\n  \
                 window.{name} = {name};\n\
                 }}\n"
            ),
            ArtifactFormat::EsModule => format!("{source}\n\nexport default {name};\n"),
        }
    }

    /// Compose both variants from the same unmodified source body
    pub fn compose(&self, source: &SourceModule, banner: &Banner) -> ComposedVariants {
        let rendered = banner.render();
        let build = |format| {
            let content = with_banner(&rendered, &self.wrap(format, source.text()));
            DistArtifact::new(format, rendered.clone(), content)
        };

        ComposedVariants {
            universal: build(ArtifactFormat::UniversalModule),
            es_module: build(ArtifactFormat::EsModule),
        }
    }
}

/// Compose both variants for `source` using `config` and `version`
pub fn compose(source: &SourceModule, config: &BuildConfig, version: &str) -> ComposedVariants {
    VariantComposer::new(config).compose(source, &Banner::new(config, version))
}
