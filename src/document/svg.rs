//! Thin SVG document collaborator: pull path data out of markup text and wrap
//! rendered frames back into standalone documents.
//!
//! The engine itself never reads markup; this module and the CLI own that
//! boundary. Extraction is plain string scanning over `<path>` tags, not an
//! XML parse: presentation attributes are ignored and only the `d` attribute
//! is taken.

use crate::foundation::error::{MorphError, MorphResult};

/// Document dimensions for [`wrap_document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ViewBox {
    /// Rendered width in pixels.
    pub width: u32,
    /// Rendered height in pixels.
    pub height: u32,
    /// viewBox width in user units.
    pub view_w: u32,
    /// viewBox height in user units.
    pub view_h: u32,
}

impl Default for ViewBox {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            view_w: 1024,
            view_h: 1024,
        }
    }
}

/// Every `d` attribute of a `<path>` element, in document order.
pub fn extract_path_data(svg: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = svg;
    while let Some(start) = rest.find("<path") {
        let after = &rest[start..];
        let Some(tag_end) = after.find('>') else {
            break;
        };
        let tag = &after[..tag_end];
        if let Some(d_pos) = tag.find(" d=\"") {
            let value = &tag[d_pos + 4..];
            if let Some(end_quote) = value.find('"') {
                out.push(value[..end_quote].to_string());
            }
        }
        rest = &after[tag_end + 1..];
    }
    out
}

/// The first path's `d` attribute, or a validation error when the document
/// has none.
pub fn first_path_data(svg: &str) -> MorphResult<String> {
    extract_path_data(svg)
        .into_iter()
        .next()
        .ok_or_else(|| MorphError::validation("no <path> element with a d attribute found"))
}

/// Wrap one path description into a standalone SVG document.
pub fn wrap_document(d: &str, view_box: ViewBox) -> String {
    format!(
        "<svg width='{}' height='{}' viewBox='0 0 {} {}' xmlns='http://www.w3.org/2000/svg'>\n\
         <path d=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"2\" />\n\
         </svg>\n",
        view_box.width, view_box.height, view_box.view_w, view_box.view_h, d
    )
}

#[cfg(test)]
#[path = "../../tests/unit/document/svg.rs"]
mod tests;
