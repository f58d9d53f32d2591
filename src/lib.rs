//! Distribution builder for single-file JavaScript libraries.
//!
//! Reads the library version from `package.json`, wraps the canonical source
//! module into a UMD variant and an ES-module variant, optionally minifies both
//! while keeping the license banner, and writes them to the output directory.

pub mod dist;
