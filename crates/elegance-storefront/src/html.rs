//! HTML helpers shared by the section renderers.

/// Escape text for use in element content or a quoted attribute.
pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// `" selected"` when `cond` holds, for `<option>` tags.
pub(crate) fn selected_attr(cond: bool) -> &'static str {
    if cond {
        " selected"
    } else {
        ""
    }
}
