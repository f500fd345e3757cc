//! Naming convention for the generated macros.
//!
//! The defaults produce libsoup's `soup-version.h`. A TOML file can override
//! any subset of keys, e.g.:
//!
//! ```toml
//! prefix = "FOO"
//! library = "libfoo"
//! extern_macro = "_FOO_EXTERN"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::version::{LEGACY_MAJOR, LEGACY_PAIR, VersionPair};

/// Macro names used when rendering version macros and attributes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderStyle {
    /// Prefix for every generated macro (`SOUP` → `SOUP_VERSION_3_0`).
    pub prefix: String,
    /// Library name used in doc comments.
    pub library: String,
    /// Two-argument macro packing (major, minor) into one comparable integer.
    pub encode_macro: String,
    pub deprecated_macro: String,
    pub deprecated_for_macro: String,
    /// Two-argument "not available before" annotation.
    pub unavailable_macro: String,
    /// Linkage marker appended to every `AVAILABLE_IN` macro.
    pub extern_macro: String,
    /// Major version treated as the transition line.
    pub legacy_major: u32,
    /// The release a transition-line header advertises.
    pub legacy_pair: (u32, u32),
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            prefix: "SOUP".to_owned(),
            library: "libsoup".to_owned(),
            encode_macro: "G_ENCODE_VERSION".to_owned(),
            deprecated_macro: "G_DEPRECATED".to_owned(),
            deprecated_for_macro: "G_DEPRECATED_FOR".to_owned(),
            unavailable_macro: "G_UNAVAILABLE".to_owned(),
            extern_macro: "_SOUP_EXTERN".to_owned(),
            legacy_major: LEGACY_MAJOR,
            legacy_pair: (LEGACY_PAIR.major, LEGACY_PAIR.minor),
        }
    }
}

impl HeaderStyle {
    pub fn legacy_pair(&self) -> VersionPair {
        VersionPair::from(self.legacy_pair)
    }

    /// `PREFIX_VERSION_M_m`
    pub fn version_macro(&self, pair: VersionPair) -> String {
        format!("{}_VERSION_{}_{}", self.prefix, pair.major, pair.minor)
    }

    /// `PREFIX_VERSION_MIN_REQUIRED`
    pub fn min_required_macro(&self) -> String {
        format!("{}_VERSION_MIN_REQUIRED", self.prefix)
    }

    /// `PREFIX_VERSION_MAX_ALLOWED`
    pub fn max_allowed_macro(&self) -> String {
        format!("{}_VERSION_MAX_ALLOWED", self.prefix)
    }

    /// `PREFIX_DEPRECATED_IN_M_m`
    pub fn deprecated_in_macro(&self, pair: VersionPair) -> String {
        format!("{}_DEPRECATED_IN_{}_{}", self.prefix, pair.major, pair.minor)
    }

    /// `PREFIX_AVAILABLE_IN_M_m`
    pub fn available_in_macro(&self, pair: VersionPair) -> String {
        format!("{}_AVAILABLE_IN_{}_{}", self.prefix, pair.major, pair.minor)
    }
}

/// Load a header style from a TOML file. Missing keys keep their defaults.
pub fn load_style(path: &Path) -> Result<HeaderStyle> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Style {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let style: HeaderStyle = toml::from_str(&content).map_err(|e| Error::Style {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), prefix = %style.prefix, "loaded header style");
    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_libsoup() {
        let style = HeaderStyle::default();
        let pair = VersionPair::new(3, 4);
        assert_eq!(style.version_macro(pair), "SOUP_VERSION_3_4");
        assert_eq!(style.deprecated_in_macro(pair), "SOUP_DEPRECATED_IN_3_4");
        assert_eq!(style.available_in_macro(pair), "SOUP_AVAILABLE_IN_3_4");
        assert_eq!(style.min_required_macro(), "SOUP_VERSION_MIN_REQUIRED");
        assert_eq!(style.max_allowed_macro(), "SOUP_VERSION_MAX_ALLOWED");
        assert_eq!(style.legacy_pair(), VersionPair::new(3, 0));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let style: HeaderStyle = toml::from_str(
            r#"
prefix = "FOO"
extern_macro = "_FOO_EXTERN"
legacy_pair = [2, 0]
"#,
        )
        .unwrap();
        assert_eq!(style.prefix, "FOO");
        assert_eq!(style.extern_macro, "_FOO_EXTERN");
        assert_eq!(style.legacy_pair(), VersionPair::new(2, 0));
        assert_eq!(style.encode_macro, "G_ENCODE_VERSION");
        assert_eq!(style.legacy_major, 2);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(toml::from_str::<HeaderStyle>("prefx = \"FOO\"").is_err());
    }
}
