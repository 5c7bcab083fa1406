//! Structural fingerprint of one rendered SVG document.

use crate::counter::Multiset;
use crate::key::{AttrKey, AttrName, AttrValueKey};
use crate::normalize::{normalize_attr_value, parse_number};
use serde::Serialize;
use std::fmt;

/// Root `viewBox`: origin and size of the user coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Parses `minX minY width height` separated by commas and/or whitespace.
    ///
    /// Anything other than exactly four finite numbers yields `None`; there is no partial view-box.
    pub fn parse(raw: &str) -> Option<Self> {
        let parts: Vec<&str> = raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        let [min_x, min_y, width, height] = parts.as_slice() else {
            return None;
        };
        Some(Self {
            min_x: parse_number(min_x)?,
            min_y: parse_number(min_y)?,
            width: parse_number(width)?,
            height: parse_number(height)?,
        })
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3},{:.3},{:.3},{:.3}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

/// Formats an optional view-box for reports; `-` when absent.
pub fn fmt_view_box(vb: Option<&ViewBox>) -> String {
    match vb {
        Some(vb) => vb.to_string(),
        None => "-".to_string(),
    }
}

/// Multiset + root-scalar summary of one document. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fingerprint {
    /// Local tag name -> element count.
    pub element_counts: Multiset<String>,
    pub attr_presence: Multiset<AttrKey>,
    /// Keyed by normalized attribute value.
    pub attr_values: Multiset<AttrValueKey>,
    /// Trimmed, non-empty direct text -> count.
    pub text_values: Multiset<String>,
    pub root_width: Option<f64>,
    pub root_height: Option<f64>,
    pub root_view_box: Option<ViewBox>,
}

impl Fingerprint {
    /// Walks `root` and all descendant elements in document order.
    pub fn collect(root: roxmltree::Node<'_, '_>) -> Self {
        let mut fp = Self::default();

        for n in root.descendants().filter(|n| n.is_element()) {
            let tag = n.tag_name().name();
            fp.element_counts.add(tag.to_string());

            let mut attrs: Vec<(AttrName, &str)> = n
                .attributes()
                .map(|a| (AttrName::from_attribute(&a), a.value()))
                .collect();
            attrs.sort_by(|a, b| a.0.cmp(&b.0));
            for (name, value) in attrs {
                fp.attr_values.add(AttrValueKey::new(
                    tag,
                    name.clone(),
                    normalize_attr_value(value),
                ));
                fp.attr_presence.add(AttrKey::new(tag, name));
            }

            let text = direct_text(n);
            let text = text.trim();
            if !text.is_empty() {
                fp.text_values.add(text.to_string());
            }
        }

        fp.root_width = root.attribute("width").and_then(parse_number);
        fp.root_height = root.attribute("height").and_then(parse_number);
        fp.root_view_box = root.attribute("viewBox").and_then(ViewBox::parse);
        fp
    }

    /// Fingerprints the root element of an already parsed document.
    pub fn from_document(doc: &roxmltree::Document<'_>) -> Self {
        Self::collect(doc.root_element())
    }

    /// Parses `svg` and fingerprints it. A malformed document is an error, never a partial result.
    pub fn from_svg_str(svg: &str) -> Result<Self, roxmltree::Error> {
        let doc = parse_svg(svg)?;
        Ok(Self::from_document(&doc))
    }
}

/// Parses an SVG/XML document. DTDs are allowed since some renderers emit a `<!DOCTYPE svg ...>`.
pub fn parse_svg(svg: &str) -> Result<roxmltree::Document<'_>, roxmltree::Error> {
    roxmltree::Document::parse_with_options(
        svg,
        roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        },
    )
}

/// Text that precedes the first child element. Tail text after the element's closing tag belongs
/// to the parent and is not included; comments and processing instructions are skipped.
fn direct_text(n: roxmltree::Node<'_, '_>) -> String {
    let mut out = String::new();
    for c in n.children() {
        if c.is_element() {
            break;
        }
        if c.is_text() {
            if let Some(t) = c.text() {
                out.push_str(t);
            }
        }
    }
    out
}
