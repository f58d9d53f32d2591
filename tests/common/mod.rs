// Shared fixtures for pipeline integration tests

#![allow(dead_code)]

use jsdist::dist::BuildConfig;
use std::path::Path;
use tempfile::TempDir;

pub const VERSION: &str = "1.4.2";

pub const UMD: &str = "vr-equirectangular-viewer.min.js";
pub const ESM: &str = "vr-equirectangular-viewer.esm.js";

pub const LIBRARY_SOURCE: &str = r#"/**
 * Equirectangular panorama viewer (fixture).
 */
class VREquirectangularViewer {
  constructor(options) {
    // defaults first, caller options win
    this.options = Object.assign({ fov: 75 }, options || {});
    this.frames = 0;
  }

  describe(label) {
    const fieldOfView = this.options.fov;
    return label + ':' + fieldOfView;
  }

  render(count) {
    for (let frameIndex = 0; frameIndex < count; frameIndex++) {
      this.frames += 1;
    }
    console.log('rendered ' + this.frames + ' frames');
    return this.frames;
  }
}
"#;

/// A temporary JS project with package.json and, optionally, src/index.js
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new(source: Option<&str>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            format!(r#"{{ "name": "vr-equirectangular-viewer", "version": "{VERSION}" }}"#),
        )
        .unwrap();
        if let Some(source) = source {
            std::fs::create_dir_all(dir.path().join("src")).unwrap();
            std::fs::write(dir.path().join("src").join("index.js"), source).unwrap();
        }
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn minified(&self) -> BuildConfig {
        BuildConfig::for_project(self.root())
    }

    pub fn plain(&self) -> BuildConfig {
        BuildConfig::for_project(self.root()).without_minify()
    }

    pub fn config(&self, minify: bool) -> BuildConfig {
        if minify {
            self.minified()
        } else {
            self.plain()
        }
    }

    pub fn read_dist(&self, name: &str) -> String {
        std::fs::read_to_string(self.root().join("dist").join(name)).unwrap()
    }
}

/// Banner block plus the newline separating it from the code
pub fn expected_banner() -> String {
    format!("/**\n * VR Equirectangular Viewer\n * @version {VERSION}\n * @license MIT\n */\n")
}
