//! Deterministic HTML-like serialization of a render tree, for inspection and snapshots.
//!
//! Motion props are emitted as `data-*` attributes; variants are embedded as JSON.

use crate::{
    foundation::error::{RevealError, RevealResult},
    render::tree::{Element, MotionProps, Node},
};

/// Serialize `node` to markup.
pub fn to_markup(node: &Node) -> RevealResult<String> {
    let mut out = String::new();
    write_node(node, &mut out)?;
    Ok(out)
}

fn write_node(node: &Node, out: &mut String) -> RevealResult<()> {
    match node {
        Node::Text(s) => {
            escape_into(s, out);
            Ok(())
        }
        Node::Element(e) => write_element(e, out),
    }
}

fn write_element(e: &Element, out: &mut String) -> RevealResult<()> {
    out.push('<');
    out.push_str(e.tag.as_str());
    if let Some(class_name) = &e.class_name {
        write_attr(out, "class", class_name);
    }
    for (k, v) in &e.attrs {
        write_attr(out, k, v);
    }
    if let Some(m) = &e.motion {
        write_motion(m, out)?;
    }
    out.push('>');
    for c in &e.children {
        write_node(c, out)?;
    }
    out.push_str("</");
    out.push_str(e.tag.as_str());
    out.push('>');
    Ok(())
}

fn write_motion(m: &MotionProps, out: &mut String) -> RevealResult<()> {
    if let Some(variants) = &m.variants {
        let json = serde_json::to_string(variants)
            .map_err(|e| RevealError::serde(format!("encode variants: {e}")))?;
        write_attr(out, "data-variants", &json);
    }
    if let Some(s) = &m.initial {
        write_attr(out, "data-initial", s);
    }
    if let Some(s) = &m.animate {
        write_attr(out, "data-animate", s);
    }
    if let Some(s) = &m.while_in_view {
        write_attr(out, "data-while-in-view", s);
    }
    if let Some(v) = &m.viewport {
        write_attr(out, "data-viewport-once", if v.once { "true" } else { "false" });
        write_attr(out, "data-viewport-amount", &fmt_secs(v.amount));
    }
    if let Some(d) = m.delay {
        write_attr(out, "data-delay", &fmt_secs(d));
    }
    if let Some(d) = m.duration {
        write_attr(out, "data-duration", &fmt_secs(d));
    }
    Ok(())
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(value, out);
    out.push('"');
}

/// Fixed four-decimal rendering with trailing zeros trimmed, so float noise from stagger
/// arithmetic does not leak into markup.
pub(crate) fn fmt_secs(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn escape_into(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/markup.rs"]
mod tests;
