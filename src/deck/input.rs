//! Input events and the commands they map to.
//!
//! Listeners only translate raw events into [`Command`]s; applying a command
//! to the deck happens in [`crate::deck::session::DeckSession`].

use super::DeckOptions;

/// Horizontal travel, in pixels, a touch has to cover to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Element that had focus when a key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Document,
    TextInput,
    TextArea,
}

impl Focus {
    /// Map a DOM `tagName` onto a focus kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "INPUT" => Focus::TextInput,
            "TEXTAREA" => Focus::TextArea,
            _ => Focus::Document,
        }
    }

    pub fn is_text_entry(self) -> bool {
        matches!(self, Focus::TextInput | Focus::TextArea)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPress {
    /// DOM `KeyboardEvent.key` value, e.g. `ArrowRight`, `" "`, `n`.
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
    pub focus: Focus,
}

impl KeyPress {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string(), ..Default::default() }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn in_focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(KeyPress),
    TouchStart { x: f64 },
    TouchEnd { x: f64 },
    /// Click anywhere inside the active slide.
    SlideClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    ToggleNotes,
    ToggleControls,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Next => "next",
            Command::Previous => "previous",
            Command::ToggleNotes => "toggle_notes",
            Command::ToggleControls => "toggle_controls",
        }
    }
}

/// Stateful event translator. The only state is the pending touch start.
#[derive(Debug, Clone)]
pub struct InputMapper {
    options: DeckOptions,
    touch_start_x: Option<f64>,
}

impl InputMapper {
    pub fn new(options: DeckOptions) -> Self {
        Self { options, touch_start_x: None }
    }

    pub fn map(&mut self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::Key(key) => self.map_key(key),
            InputEvent::TouchStart { x } => {
                if self.options.touch {
                    self.touch_start_x = Some(*x);
                }
                None
            }
            InputEvent::TouchEnd { x } => {
                let start = self.touch_start_x.take()?;
                if !self.options.touch {
                    return None;
                }
                swipe_command(start, *x)
            }
            InputEvent::SlideClick => self.options.click_to_advance.then_some(Command::Next),
        }
    }

    fn map_key(&self, key: &KeyPress) -> Option<Command> {
        if !self.options.keyboard {
            return None;
        }
        if self.options.suppress_in_text_input && key.focus.is_text_entry() {
            return None;
        }

        if self.options.presenter_shortcuts && key.key.eq_ignore_ascii_case("n") {
            if !key.ctrl && !key.meta && !key.alt {
                return Some(Command::ToggleNotes);
            }
            if (key.ctrl || key.meta) && key.shift {
                return Some(Command::ToggleControls);
            }
        }

        match key.key.as_str() {
            "ArrowRight" | " " => Some(Command::Next),
            "ArrowLeft" => Some(Command::Previous),
            _ => None,
        }
    }
}

/// Swipe left (finger moves toward smaller x) advances; swipe right goes back.
pub fn swipe_command(start_x: f64, end_x: f64) -> Option<Command> {
    let dx = end_x - start_x;
    if dx < -SWIPE_THRESHOLD_PX {
        Some(Command::Next)
    } else if dx > SWIPE_THRESHOLD_PX {
        Some(Command::Previous)
    } else {
        None
    }
}
