//! Application state for the single-screen client.

use crate::slider::Slider;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use limner_core::ModelId;
use ratatui::text::Text;

/// Default steering instruction, replaceable or removable in the form.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";

/// Spinner frames for the loading indicator.
pub const THROBBER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Which control receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Prompt,
    System,
    Model,
    Temperature,
    TopP,
    TopK,
    Generate,
}

impl Focus {
    fn next(self) -> Focus {
        match self {
            Focus::Prompt => Focus::System,
            Focus::System => Focus::Model,
            Focus::Model => Focus::Temperature,
            Focus::Temperature => Focus::TopP,
            Focus::TopP => Focus::TopK,
            Focus::TopK => Focus::Generate,
            Focus::Generate => Focus::Prompt,
        }
    }

    fn previous(self) -> Focus {
        match self {
            Focus::Prompt => Focus::Generate,
            Focus::System => Focus::Prompt,
            Focus::Model => Focus::System,
            Focus::Temperature => Focus::Model,
            Focus::TopP => Focus::Temperature,
            Focus::TopK => Focus::TopP,
            Focus::Generate => Focus::TopK,
        }
    }
}

/// Content of the output pane.
///
/// Exactly one variant is visible at a time; each generation cycle replaces
/// the whole pane.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputState {
    /// Nothing generated yet
    Blank,
    /// Collector rejected an empty prompt
    NoPrompt,
    /// Rendered markdown from a successful cycle
    Rendered(Text<'static>),
    /// The call succeeded but returned no text
    EmptyResponse,
    /// The call failed; holds the derived message
    Failed(String),
}

/// The whole UI state: form controls, busy flag, output pane.
pub struct App {
    pub prompt: String,
    pub system_instruction: String,
    pub model_index: usize,
    pub temperature: Slider,
    pub top_p: Slider,
    pub top_k: Slider,
    /// True exactly while one request is in flight
    pub busy: bool,
    pub output: OutputState,
    pub focus: Focus,
    pub output_scroll: u16,
    pub throbber_frame: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            prompt: String::new(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            model_index: 0,
            temperature: Slider::new("Temperature", 1.0, 0.0, 2.0, 0.1, 2),
            top_p: Slider::new("Top-p", 0.95, 0.0, 1.0, 0.05, 2),
            top_k: Slider::new("Top-k", 40.0, 1.0, 100.0, 1.0, 0),
            busy: false,
            output: OutputState::Blank,
            focus: Focus::Prompt,
            output_scroll: 0,
            throbber_frame: 0,
            should_quit: false,
        }
    }

    /// The model currently selected in the fixed list.
    pub fn selected_model(&self) -> ModelId {
        let models = ModelId::all();
        models[self.model_index % models.len()]
    }

    /// Advances the loading spinner; called once per tick while busy.
    pub fn tick(&mut self) {
        if self.busy {
            self.throbber_frame = (self.throbber_frame + 1) % THROBBER_FRAMES.len();
        }
    }

    /// Handles every key except the generation trigger, which the event
    /// loop intercepts first.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') | KeyCode::Char('q') = key.code {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::PageUp => self.output_scroll = self.output_scroll.saturating_sub(5),
            KeyCode::PageDown => self.output_scroll = self.output_scroll.saturating_add(5),
            _ => self.handle_focused_key(key),
        }
    }

    fn handle_focused_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Prompt => edit_text(&mut self.prompt, key),
            Focus::System => edit_text(&mut self.system_instruction, key),
            Focus::Model => {
                let count = ModelId::all().len();
                match key.code {
                    KeyCode::Left | KeyCode::Up => {
                        self.model_index = (self.model_index + count - 1) % count;
                    }
                    KeyCode::Right | KeyCode::Down => {
                        self.model_index = (self.model_index + 1) % count;
                    }
                    _ => {}
                }
            }
            Focus::Temperature => adjust_slider(&mut self.temperature, 1.0, key),
            Focus::TopP => adjust_slider(&mut self.top_p, 0.95, key),
            Focus::TopK => adjust_slider(&mut self.top_k, 40.0, key),
            Focus::Generate => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn edit_text(buffer: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => buffer.push(c),
        KeyCode::Backspace => {
            buffer.pop();
        }
        KeyCode::Enter => buffer.push('\n'),
        _ => {}
    }
}

fn adjust_slider(slider: &mut Slider, initial: f32, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Down => slider.adjust(-1),
        KeyCode::Right | KeyCode::Up => slider.adjust(1),
        KeyCode::Backspace | KeyCode::Delete => slider.reset(initial),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tab_cycles_through_every_control_and_back() {
        let mut app = App::new();
        for _ in 0..7 {
            app.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(app.focus, Focus::Prompt);
    }

    #[test]
    fn typing_lands_in_the_focused_field() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('h')));
        app.handle_key(key(KeyCode::Char('i')));
        assert_eq!(app.prompt, "hi");

        app.focus = Focus::System;
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.system_instruction, "You are a helpful assistant");
    }

    #[test]
    fn model_selection_wraps_around_the_fixed_list() {
        let mut app = App::new();
        app.focus = Focus::Model;
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.model_index, ModelId::all().len() - 1);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.model_index, 0);
    }

    #[test]
    fn throbber_only_advances_while_busy() {
        let mut app = App::new();
        app.tick();
        assert_eq!(app.throbber_frame, 0);
        app.busy = true;
        app.tick();
        assert_eq!(app.throbber_frame, 1);
    }
}
