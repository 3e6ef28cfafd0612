use super::to_html;

#[test]
fn renders_emphasis_and_paragraphs() {
    let html = to_html("Offers are **up** this year.");
    assert!(html.contains("<strong>up</strong>"));
    assert!(html.starts_with("<p>"));
}

#[test]
fn renders_lists() {
    let html = to_html("- Acme\n- Globex");
    assert!(html.contains("<ul>"));
    assert!(html.contains("<li>Acme</li>"));
}

#[test]
fn plain_text_passes_through_inside_paragraph() {
    let html = to_html("Placements start in August.");
    assert_eq!(html.trim(), "<p>Placements start in August.</p>");
}
