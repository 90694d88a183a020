//! UI rendering for the generation screen.

use crate::app::{App, Focus, OutputState, THROBBER_FRAMES};
use crate::lifecycle::EMPTY_RESPONSE_NOTICE;
use crate::slider::Slider;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(15), // Form
            Constraint::Min(5),     // Output
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0]);
    draw_form(f, app, chunks[1]);
    draw_output(f, app, chunks[2]);
    draw_status_bar(f, app, chunks[3]);
}

/// Draw the header.
#[tracing::instrument(skip_all)]
fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("Limner - Markdown Generation Client")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Draw the input form: prompt and system instruction on the left, model
/// selector, sliders, and trigger on the right.
#[tracing::instrument(skip_all)]
fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(4)])
        .split(columns[0]);

    let prompt = Paragraph::new(app.prompt.as_str())
        .block(field_block("Prompt", app.focus == Focus::Prompt))
        .wrap(Wrap { trim: false });
    f.render_widget(prompt, left[0]);

    let system = Paragraph::new(app.system_instruction.as_str())
        .block(field_block(
            "System Instruction (optional)",
            app.focus == Focus::System,
        ))
        .wrap(Wrap { trim: false });
    f.render_widget(system, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Model selector
            Constraint::Length(3), // Temperature
            Constraint::Length(3), // Top-p
            Constraint::Length(3), // Top-k
            Constraint::Length(3), // Trigger
        ])
        .split(columns[1]);

    let model = Paragraph::new(format!("◀ {} ▶", app.selected_model()))
        .block(field_block("Model", app.focus == Focus::Model))
        .alignment(Alignment::Center);
    f.render_widget(model, right[0]);

    draw_slider(f, &app.temperature, app.focus == Focus::Temperature, right[1]);
    draw_slider(f, &app.top_p, app.focus == Focus::TopP, right[2]);
    draw_slider(f, &app.top_k, app.focus == Focus::TopK, right[3]);

    draw_trigger(f, app, right[4]);
}

/// Draw one sampling slider with its mirrored value label.
#[tracing::instrument(skip_all)]
fn draw_slider(f: &mut Frame, slider: &Slider, focused: bool, area: Rect) {
    let title = if slider.touched() {
        slider.name().to_string()
    } else {
        format!("{} (default)", slider.name())
    };

    let gauge = Gauge::default()
        .block(field_block(&title, focused))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(slider.ratio())
        .label(slider.display_value());
    f.render_widget(gauge, area);
}

/// Draw the trigger control, doubling as the loading indicator while busy.
#[tracing::instrument(skip_all)]
fn draw_trigger(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.busy {
        (
            format!("{} Generating...", THROBBER_FRAMES[app.throbber_frame]),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            "[ Generate ]".to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    };

    let trigger = Paragraph::new(text)
        .block(field_block("", app.focus == Focus::Generate))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(trigger, area);
}

/// Draw the output pane: rendered markdown, a notice, or an error.
#[tracing::instrument(skip_all)]
fn draw_output(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.busy {
        format!("Output {} ", THROBBER_FRAMES[app.throbber_frame])
    } else {
        "Output".to_string()
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    let paragraph = match &app.output {
        OutputState::Blank => Paragraph::new(if app.busy { "" } else { "Press Ctrl+G to generate." })
            .style(Style::default().fg(Color::DarkGray)),
        OutputState::NoPrompt => {
            Paragraph::new("Please enter a prompt.").style(Style::default().fg(Color::Yellow))
        }
        OutputState::Rendered(text) => Paragraph::new(text.clone()),
        OutputState::EmptyResponse => {
            Paragraph::new(EMPTY_RESPONSE_NOTICE).style(Style::default().fg(Color::Gray))
        }
        OutputState::Failed(message) => Paragraph::new(format!("An error occurred: {message}"))
            .style(Style::default().fg(Color::Red)),
    };

    f.render_widget(
        paragraph
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((app.output_scroll, 0)),
        area,
    );
}

/// Draw the status bar with help text for the focused control.
#[tracing::instrument(skip_all)]
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Focus::Prompt | Focus::System => {
            "Type to edit | Enter: newline | Tab: next | Ctrl+G: generate | Esc: quit"
        }
        Focus::Model => "←→: select model | Tab: next | Ctrl+G: generate | Esc: quit",
        Focus::Temperature | Focus::TopP | Focus::TopK => {
            "←→: adjust | Backspace: service default | Tab: next | Ctrl+G: generate | Esc: quit"
        }
        Focus::Generate => "Enter: generate | PgUp/PgDn: scroll output | Tab: next | Esc: quit",
    };

    let state = if app.busy { "Busy" } else { "Idle" };
    let status = Paragraph::new(format!("{} | {}", state, help_text))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(style)
}
