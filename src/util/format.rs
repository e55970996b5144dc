//! Display formatting helpers: timestamps, avatar placeholders, and
//! markdown rendering.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use pulldown_cmark::{Event, Parser, html};

/// Format an ISO 8601 timestamp as a short date for display.
///
/// In the browser this defers to the JS `Date` locale formatting; outside
/// it (SSR, tests) it falls back to the `YYYY-MM-DD` prefix. Inputs that do
/// not look like a timestamp are passed through unchanged rather than
/// guessed at.
pub fn display_date(iso: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if date.get_time().is_nan() {
            return iso.to_owned();
        }
        String::from(date.to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        date_prefix(iso)
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
fn date_prefix(iso: &str) -> String {
    // "2024-01-15T10:30:00Z" -> "2024-01-15"; anything shorter or
    // non-datelike comes back whole.
    match iso.get(..10) {
        Some(prefix) if prefix.as_bytes().get(4) == Some(&b'-') => prefix.to_owned(),
        _ => iso.to_owned(),
    }
}

/// Fallback avatar glyph: the first character of the name, uppercased.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_owned())
}

/// Render untrusted markdown to HTML. Raw HTML embedded in the source is
/// demoted to text, so community guidelines cannot inject markup.
pub fn markdown_to_html(source: &str) -> String {
    let parser = Parser::new(source).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
