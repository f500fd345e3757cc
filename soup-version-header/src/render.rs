//! Rendering of the per-release macro and attribute blocks.

use crate::style::HeaderStyle;
use crate::version::VersionPair;

/// The two generated blocks that get substituted into the template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBlocks {
    /// `PREFIX_VERSION_M_m` definitions with gtk-doc comments.
    pub macros: String,
    /// `PREFIX_DEPRECATED_IN_*` / `PREFIX_AVAILABLE_IN_*` definitions.
    pub attributes: String,
}

/// Render both blocks for `pairs`, in the order given.
pub fn render_blocks(pairs: &[VersionPair], style: &HeaderStyle) -> RenderedBlocks {
    let mut blocks = RenderedBlocks::default();
    for &pair in pairs {
        blocks.macros.push_str(&version_macro(pair, style));
        blocks.attributes.push_str(&version_attributes(pair, style));
    }
    blocks
}

/// The documented `PREFIX_VERSION_M_m` constant for one release.
pub fn version_macro(pair: VersionPair, style: &HeaderStyle) -> String {
    let VersionPair { major, minor } = pair;
    let name = style.version_macro(pair);
    let mut out = String::new();
    out.push_str("/**\n");
    out.push_str(&format!(" * {name}:\n"));
    out.push_str(" *\n");
    out.push_str(&format!(
        " * A macro that evaluates to the {major}.{minor} version of {}, in a format\n",
        style.library
    ));
    out.push_str(" * that can be used by the C pre-processor.\n");
    out.push_str(" *\n");
    out.push_str(&format!(" * Since: {major}.{minor}\n"));
    out.push_str(" */\n");
    out.push_str(&format!(
        "#define {name} ({} ({major}, {minor}))\n\n",
        style.encode_macro
    ));
    out
}

/// The deprecation and availability attributes for one release.
pub fn version_attributes(pair: VersionPair, style: &HeaderStyle) -> String {
    let VersionPair { major, minor } = pair;
    let version = style.version_macro(pair);
    let deprecated = style.deprecated_in_macro(pair);
    let available = style.available_in_macro(pair);
    let extern_macro = &style.extern_macro;

    let mut out = String::new();
    out.push_str(&format!(
        "#if {} >= {version}\n",
        style.min_required_macro()
    ));
    out.push_str(&format!(
        "# define {deprecated}                {}\n",
        style.deprecated_macro
    ));
    out.push_str(&format!(
        "# define {deprecated}_FOR(f)         {}(f)\n",
        style.deprecated_for_macro
    ));
    out.push_str("#else\n");
    out.push_str(&format!("# define {deprecated}\n"));
    out.push_str(&format!("# define {deprecated}_FOR(f)\n"));
    out.push_str("#endif\n\n");

    out.push_str(&format!("#if {} < {version}\n", style.max_allowed_macro()));
    out.push_str(&format!(
        "# define {available}                 {}({major}, {minor}) {extern_macro}\n",
        style.unavailable_macro
    ));
    out.push_str("#else\n");
    out.push_str(&format!(
        "# define {available}                 {extern_macro}\n"
    ));
    out.push_str("#endif\n");
    out
}
