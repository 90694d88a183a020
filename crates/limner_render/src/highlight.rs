//! Syntax highlighting for fenced code blocks.

use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

fn theme() -> &'static Theme {
    THEME_SET
        .themes
        .get("base16-ocean.dark")
        .or_else(|| THEME_SET.themes.values().next())
        .expect("syntect default themes are never empty")
}

/// Highlights a code block into styled lines.
///
/// The `language` tag comes straight from the markdown fence. Unknown or
/// empty tags fall back to plain text, so the block still renders with its
/// content intact.
pub fn highlight_code(code: &str, language: &str) -> Vec<Line<'static>> {
    let syntax = SYNTAX_SET
        .find_syntax_by_token(language)
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let mut highlighter = HighlightLines::new(syntax, theme());
    let mut lines = Vec::new();

    for raw_line in LinesWithEndings::from(code) {
        let ranges = highlighter
            .highlight_line(raw_line, &SYNTAX_SET)
            .unwrap_or_default();

        let spans: Vec<Span<'static>> = ranges
            .iter()
            .map(|(style, fragment)| {
                Span::styled(
                    fragment.trim_end_matches(['\n', '\r']).to_string(),
                    convert_style(style),
                )
            })
            .collect();

        lines.push(Line::from(spans));
    }

    lines
}

fn convert_style(style: &syntect::highlighting::Style) -> Style {
    let fg = style.foreground;
    let mut converted = Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b));

    if style.font_style.contains(FontStyle::BOLD) {
        converted = converted.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        converted = converted.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        converted = converted.add_modifier(Modifier::UNDERLINED);
    }

    converted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
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
    fn content_survives_highlighting() {
        let lines = highlight_code("let x = 1;\nlet y = 2;\n", "rust");
        assert_eq!(text_of(&lines), vec!["let x = 1;", "let y = 2;"]);
    }

    #[test]
    fn unknown_language_falls_back_to_plain_text() {
        let lines = highlight_code("anything goes\n", "no-such-language");
        assert_eq!(text_of(&lines), vec!["anything goes"]);
    }

    #[test]
    fn highlighting_is_deterministic() {
        let first = highlight_code("fn main() {}\n", "rust");
        let second = highlight_code("fn main() {}\n", "rust");
        assert_eq!(first, second);
    }
}
