//! Upload form rendering.
//!
//! The form is a single static page with one substitution slot for the error
//! banner, so validation failures come back as the same page with the message
//! inlined.

const FORM_TEMPLATE: &str = include_str!("ui/index.html");

/// Renders the upload form, with an error banner when `error` is set.
pub fn render_form(error: Option<&str>) -> String {
    let banner = match error {
        Some(message) => format!(r#"<p class="error">{}</p>"#, escape_html(message)),
        None => String::new(),
    };
    FORM_TEMPLATE.replace("{{error_banner}}", &banner)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
