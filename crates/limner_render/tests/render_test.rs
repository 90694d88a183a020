//! Tests for the markdown renderer.

use limner_render::render_markdown;
use ratatui::style::Modifier;
use ratatui::text::Text;

fn plain_lines(text: &Text<'_>) -> Vec<String> {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect()
}

#[test]
fn empty_input_renders_nothing() {
    assert!(render_markdown("").lines.is_empty());
}

#[test]
fn plain_paragraph_renders_as_one_line() {
    let text = render_markdown("Just a sentence.");
    assert_eq!(plain_lines(&text), vec!["Just a sentence."]);
}

#[test]
fn paragraphs_are_separated_by_a_blank_line() {
    let text = render_markdown("First.\n\nSecond.");
    assert_eq!(plain_lines(&text), vec!["First.", "", "Second."]);
}

#[test]
fn soft_break_joins_with_a_space() {
    let text = render_markdown("one\ntwo");
    assert_eq!(plain_lines(&text), vec!["one two"]);
}

#[test]
fn heading_keeps_its_level_marker() {
    let text = render_markdown("## Section");
    assert_eq!(plain_lines(&text), vec!["## Section"]);
}

#[test]
fn strong_text_is_bold() {
    let text = render_markdown("a **bold** word");
    let line = &text.lines[0];
    let bold_span = line
        .spans
        .iter()
        .find(|span| span.content == "bold")
        .expect("bold span present");
    assert!(bold_span.style.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn unordered_list_gets_bullet_markers() {
    let text = render_markdown("- one\n- two");
    assert_eq!(plain_lines(&text), vec!["• one", "• two"]);
}

#[test]
fn ordered_list_counts_from_its_start() {
    let text = render_markdown("3. three\n4. four");
    assert_eq!(plain_lines(&text), vec!["3. three", "4. four"]);
}

#[test]
fn nested_list_is_indented() {
    let text = render_markdown("- outer\n  - inner");
    assert_eq!(plain_lines(&text), vec!["• outer", "  • inner"]);
}

#[test]
fn fenced_code_block_content_is_preserved() {
    let text = render_markdown("```rust\nlet x = 1;\n```");
    assert_eq!(plain_lines(&text), vec!["let x = 1;"]);
}

#[test]
fn unknown_fence_language_still_renders() {
    let text = render_markdown("```klingon\nqapla'\n```");
    assert_eq!(plain_lines(&text), vec!["qapla'"]);
}

#[test]
fn block_quote_lines_are_prefixed() {
    let text = render_markdown("> quoted");
    assert_eq!(plain_lines(&text), vec!["▌ quoted"]);
}

#[test]
fn link_shows_destination_after_text() {
    let text = render_markdown("[docs](https://example.test)");
    assert_eq!(plain_lines(&text), vec!["docs (https://example.test)"]);
}

#[test]
fn raw_html_passes_through_as_text() {
    // Model output is not sanitized; markup that is not markdown stays put.
    let text = render_markdown("before <script>alert(1)</script> after");
    assert_eq!(
        plain_lines(&text).join(""),
        "before <script>alert(1)</script> after"
    );
}

#[test]
fn rendering_is_deterministic() {
    let input = "# Title\n\nSome *styled* text.\n\n```rust\nfn f() {}\n```\n\n- a\n- b\n";
    assert_eq!(render_markdown(input), render_markdown(input));
}
