//! soup-version-header — version-gating C header generator.
//!
//! Reads a header template containing `{version_macros}`,
//! `{version_attributes}`, `{major_version}`, `{minor_version}` and
//! `{micro_version}` placeholders and fills them in for a
//! `MAJOR.MINOR.MICRO` version. For every released minor version the header
//! gets a `SOUP_VERSION_M_m` constant plus `SOUP_DEPRECATED_IN_M_m` /
//! `SOUP_AVAILABLE_IN_M_m` attribute macros.
//!
//! # Quick start
//!
//! Generate the header from a build script:
//!
//! ```no_run
//! use std::path::Path;
//!
//! soup_version_header::run(
//!     Path::new("soup-version.h.in"),
//!     Path::new("soup-version.h"),
//!     "3.6.1",
//! )
//! .unwrap();
//! ```
//!
//! Or render in memory:
//!
//! ```
//! use soup_version_header::{HeaderStyle, generate_from_template};
//!
//! let text = generate_from_template(
//!     "#define SOUP_MAJOR_VERSION ({major_version})\n{version_macros}",
//!     "3.0.2",
//!     &HeaderStyle::default(),
//! )
//! .unwrap();
//! assert!(text.contains("#define SOUP_VERSION_3_0 (G_ENCODE_VERSION (3, 0))"));
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub mod error;
pub mod output;
pub mod render;
pub mod style;
pub mod template;
pub mod version;

pub use error::{Error, Result, TemplateError, VersionError};
pub use style::HeaderStyle;
pub use version::{ReleaseSeries, Version, VersionPair, is_stable};

/// Run the full pipeline with the libsoup naming convention: parse the
/// version, read the template, render, and atomically write `output`.
///
/// Returns the path the header was written to.
pub fn run(template: &Path, output: &Path, version: &str) -> Result<PathBuf> {
    run_with_style(template, output, version, &HeaderStyle::default())
}

/// [`run`] with a custom [`HeaderStyle`].
///
/// The version is validated before the template is read and nothing is
/// written unless rendering succeeds.
pub fn run_with_style(
    template: &Path,
    output: &Path,
    version: &str,
    style: &HeaderStyle,
) -> Result<PathBuf> {
    let header = generate(template, version, style)?;

    output::write_atomic(output, &header)?;

    info!(
        path = %output.display(),
        size = header.len(),
        "wrote version header"
    );

    Ok(output.to_path_buf())
}

/// Read `template` and return the rendered header without writing to disk.
pub fn generate(template: &Path, version: &str, style: &HeaderStyle) -> Result<String> {
    let version: Version = version.parse()?;

    let text = std::fs::read_to_string(template).map_err(|source| Error::ReadTemplate {
        path: template.to_path_buf(),
        source,
    })?;
    debug!(path = %template.display(), size = text.len(), "read template");

    render_header(&text, version, style)
}

/// Render a header from template text already in memory.
pub fn generate_from_template(
    template: &str,
    version: &str,
    style: &HeaderStyle,
) -> Result<String> {
    let version: Version = version.parse()?;
    render_header(template, version, style)
}

fn render_header(text: &str, version: Version, style: &HeaderStyle) -> Result<String> {
    let series = ReleaseSeries::for_version(&version, style.legacy_major, style.legacy_pair());
    let pairs = series.pairs();
    info!(
        %version,
        series = ?series,
        pairs = pairs.len(),
        "computed eligible releases"
    );

    let blocks = render::render_blocks(&pairs, style);
    let values = template::FieldValues {
        version_macros: blocks.macros,
        version_attributes: blocks.attributes,
        major_version: version.major.to_string(),
        minor_version: version.minor.to_string(),
        micro_version: version.micro.to_string(),
    };

    Ok(template::render(text, &values)?)
}
