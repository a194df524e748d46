use serde::{Deserialize, Serialize};

use crate::deck::input::{Focus, InputEvent, KeyPress};

/// GET /api/state
#[derive(Debug, Clone, Serialize)]
pub struct DeckStateResponse {
    pub index: usize,
    pub count: usize,
    pub percent: f64,
    pub position: String,
    pub layout: String,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub policy: &'static str,
}

/// POST /api/input — one raw browser event, as sent by `static/deck.js`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputRequest {
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        meta: bool,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        shift: bool,
        /// `tagName` of the focused element.
        #[serde(default)]
        target: String,
    },
    TouchStart { x: f64 },
    TouchEnd { x: f64 },
    SlideClick,
}

impl InputRequest {
    pub fn into_event(self) -> InputEvent {
        match self {
            InputRequest::Key { key, ctrl, meta, alt, shift, target } => InputEvent::Key(KeyPress {
                key,
                ctrl,
                meta,
                alt,
                shift,
                focus: Focus::from_tag(&target),
            }),
            InputRequest::TouchStart { x } => InputEvent::TouchStart { x },
            InputRequest::TouchEnd { x } => InputEvent::TouchEnd { x },
            InputRequest::SlideClick => InputEvent::SlideClick,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InputResponse {
    /// Command the event produced; `None` means the page can stay as it is.
    pub command: Option<&'static str>,
    pub index: usize,
}
