use super::*;

#[test]
fn date_prefix_takes_date_part_of_timestamp() {
    assert_eq!(date_prefix("2024-01-15T10:30:00.000Z"), "2024-01-15");
}

#[test]
fn date_prefix_keeps_bare_date() {
    assert_eq!(date_prefix("2024-01-15"), "2024-01-15");
}

#[test]
fn date_prefix_passes_short_input_through() {
    assert_eq!(date_prefix("2024"), "2024");
    assert_eq!(date_prefix(""), "");
}

#[test]
fn date_prefix_passes_non_datelike_input_through() {
    assert_eq!(date_prefix("not a timestamp"), "not a timestamp");
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn display_date_uses_prefix_outside_browser() {
    assert_eq!(display_date("2024-06-02T08:00:00Z"), "2024-06-02");
}

#[test]
fn avatar_initial_takes_the_first_character_uppercased() {
    assert_eq!(avatar_initial("rust meetup"), "R");
    assert_eq!(avatar_initial("  über gruppe"), "Ü");
}

#[test]
fn avatar_initial_falls_back_for_blank_names() {
    assert_eq!(avatar_initial(""), "?");
    assert_eq!(avatar_initial("   "), "?");
}

#[test]
fn markdown_renders_basic_structure() {
    let html = markdown_to_html("# Rules\n\nBe **kind**.");
    assert!(html.contains("<h1>Rules</h1>"));
    assert!(html.contains("<strong>kind</strong>"));
}

#[test]
fn markdown_demotes_raw_html_to_text() {
    let html = markdown_to_html("hello <script>alert(1)</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}
