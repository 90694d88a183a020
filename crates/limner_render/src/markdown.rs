//! Markdown event stream folded into terminal text.

use crate::highlight::highlight_code;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Renders markdown into styled terminal text.
///
/// Deterministic for a fixed input: the output pane shows exactly what this
/// function produced, inserted verbatim by the lifecycle controller.
pub fn render_markdown(input: &str) -> Text<'static> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(input, options);
    let mut renderer = Renderer::default();

    for event in parser {
        renderer.handle(event);
    }

    renderer.finish()
}

/// Marker state for one list nesting level.
struct ListLevel {
    /// Next ordinal for an ordered list, None for bullets
    next_index: Option<u64>,
}

#[derive(Default)]
struct Renderer {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    style_stack: Vec<Style>,
    link_stack: Vec<String>,
    list_stack: Vec<ListLevel>,
    quote_depth: usize,
    code_block: Option<CodeBlock>,
}

struct CodeBlock {
    language: String,
    buffer: String,
}

impl Renderer {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => {
                if let Some(block) = self.code_block.as_mut() {
                    block.buffer.push_str(&text);
                } else {
                    self.push_text(text.to_string());
                }
            }
            Event::Code(code) => {
                let style = self.current_style().patch(Style::new().fg(Color::Yellow));
                self.spans.push(Span::styled(code.to_string(), style));
            }
            Event::SoftBreak => self.push_text(" ".to_string()),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.start_block();
                self.spans.push(Span::styled(
                    "─".repeat(40),
                    Style::new().fg(Color::DarkGray),
                ));
                self.flush_line();
            }
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                self.spans
                    .push(Span::styled(marker, Style::new().fg(Color::Green)));
            }
            // Raw markup passes through as literal text, unsanitized.
            Event::Html(html) | Event::InlineHtml(html) => self.push_text(html.to_string()),
            Event::FootnoteReference(name) => {
                let style = self.current_style().patch(Style::new().fg(Color::Blue));
                self.spans.push(Span::styled(format!("[^{name}]"), style));
            }
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if self.list_stack.is_empty() {
                    self.start_block();
                }
            }
            Tag::Heading { level, .. } => {
                self.start_block();
                let style = heading_style(level);
                self.spans.push(Span::styled(
                    format!("{} ", "#".repeat(level as usize)),
                    style,
                ));
                self.style_stack.push(style);
            }
            Tag::BlockQuote(_) => {
                self.start_block();
                self.quote_depth += 1;
            }
            Tag::CodeBlock(kind) => {
                self.start_block();
                let language = match kind {
                    CodeBlockKind::Fenced(tag) => tag.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.code_block = Some(CodeBlock {
                    language,
                    buffer: String::new(),
                });
            }
            Tag::List(start) => {
                if self.list_stack.is_empty() {
                    self.start_block();
                } else {
                    // Nested list starts on its own line under the parent item.
                    self.flush_line();
                }
                self.list_stack.push(ListLevel { next_index: start });
            }
            Tag::Item => {
                let indent = "  ".repeat(self.list_stack.len().saturating_sub(1));
                let marker = match self.list_stack.last_mut() {
                    Some(ListLevel {
                        next_index: Some(index),
                    }) => {
                        let current = *index;
                        *index += 1;
                        format!("{indent}{current}. ")
                    }
                    _ => format!("{indent}• "),
                };
                self.spans
                    .push(Span::styled(marker, Style::new().fg(Color::Cyan)));
            }
            Tag::Emphasis => self.push_style(Style::new().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::new().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => self.push_style(Style::new().add_modifier(Modifier::CROSSED_OUT)),
            Tag::Link { dest_url, .. } => {
                self.link_stack.push(dest_url.to_string());
                self.push_style(
                    Style::new()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            Tag::Image { dest_url, .. } => {
                self.link_stack.push(dest_url.to_string());
                self.push_style(Style::new().fg(Color::Magenta));
            }
            Tag::Table(_) => self.start_block(),
            Tag::TableHead => {
                self.push_style(Style::new().add_modifier(Modifier::BOLD));
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.flush_line(),
            TagEnd::Heading(_) => {
                self.style_stack.pop();
                self.flush_line();
            }
            TagEnd::BlockQuote(_) => {
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            TagEnd::CodeBlock => {
                if let Some(block) = self.code_block.take() {
                    self.lines
                        .extend(highlight_code(&block.buffer, &block.language));
                }
            }
            TagEnd::List(_) => {
                self.list_stack.pop();
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => {
                self.style_stack.pop();
            }
            TagEnd::Link => {
                self.style_stack.pop();
                if let Some(url) = self.link_stack.pop() {
                    self.spans.push(Span::styled(
                        format!(" ({url})"),
                        Style::new().fg(Color::DarkGray),
                    ));
                }
            }
            TagEnd::Image => {
                self.style_stack.pop();
                if let Some(url) = self.link_stack.pop() {
                    self.spans.push(Span::styled(
                        format!(" [image: {url}]"),
                        Style::new().fg(Color::DarkGray),
                    ));
                }
            }
            TagEnd::TableHead => {
                self.style_stack.pop();
                self.flush_line();
            }
            TagEnd::TableRow => self.flush_line(),
            TagEnd::TableCell => {
                let style = self.current_style().patch(Style::new().fg(Color::DarkGray));
                self.spans.push(Span::styled(" │ ", style));
            }
            _ => {}
        }
    }

    /// Separates block-level constructs with one blank line.
    fn start_block(&mut self) {
        self.flush_line();
        if let Some(last) = self.lines.last() {
            if !last.spans.is_empty() {
                self.lines.push(Line::default());
            }
        }
    }

    fn flush_line(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let mut spans = std::mem::take(&mut self.spans);
        if self.quote_depth > 0 {
            let prefix = "▌ ".repeat(self.quote_depth);
            spans.insert(0, Span::styled(prefix, Style::new().fg(Color::Green)));
        }
        self.lines.push(Line::from(spans));
    }

    fn push_text(&mut self, text: String) {
        let style = self.current_style();
        self.spans.push(Span::styled(text, style));
    }

    fn current_style(&self) -> Style {
        self.style_stack
            .iter()
            .fold(Style::default(), |acc, style| acc.patch(*style))
    }

    fn push_style(&mut self, delta: Style) {
        let merged = self.current_style().patch(delta);
        self.style_stack.push(merged);
    }

    fn finish(mut self) -> Text<'static> {
        self.flush_line();
        Text::from(self.lines)
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    let base = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    match level {
        HeadingLevel::H1 => base.add_modifier(Modifier::UNDERLINED),
        _ => base,
    }
}
