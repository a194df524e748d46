//! Slide deck controller: an immutable slide list plus a cursor.
//!
//! Navigation only moves the cursor. Markup comes from [`SlideDeck::render`],
//! which is a pure function of the current slide, so the state machine can be
//! exercised without a page.

pub mod input;
pub mod presenter;
pub mod session;

use std::fmt;

use crate::models::slide::Slide;
use crate::render::{self, RenderedSlide};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    EmptyDeck,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::EmptyDeck => write!(f, "deck has no slides"),
        }
    }
}

impl std::error::Error for DeckError {}

/// What happens when navigation runs past either end of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationPolicy {
    /// Requests are capped at the first/last slide.
    #[default]
    Clamped,
    /// Requests cycle around to the opposite end.
    Wrapping,
}

impl NavigationPolicy {
    /// Map a requested (possibly out of range) index onto `0..count`.
    /// `count` must be non-zero.
    pub fn resolve(self, index: i64, count: usize) -> usize {
        let count = count as i64;
        let resolved = match self {
            NavigationPolicy::Clamped => index.clamp(0, count - 1),
            NavigationPolicy::Wrapping => index.rem_euclid(count),
        };
        resolved as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NavigationPolicy::Clamped => "clamped",
            NavigationPolicy::Wrapping => "wrapping",
        }
    }
}

impl std::str::FromStr for NavigationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clamped" | "clamp" => Ok(NavigationPolicy::Clamped),
            "wrapping" | "wrap" => Ok(NavigationPolicy::Wrapping),
            other => Err(format!("unknown navigation policy '{other}' (expected clamped or wrapping)")),
        }
    }
}

/// Navigation policy plus the optional input capabilities that differ
/// between deck flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckOptions {
    pub policy: NavigationPolicy,
    pub keyboard: bool,
    pub touch: bool,
    pub click_to_advance: bool,
    /// Ignore key presses while a text input or textarea has focus.
    pub suppress_in_text_input: bool,
    /// Presenter shortcuts: `n` toggles notes, Ctrl+Shift+N toggles controls.
    pub presenter_shortcuts: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self::learning()
    }
}

impl DeckOptions {
    /// Rendered lesson deck: clamped, keyboard and touch.
    pub fn learning() -> Self {
        Self {
            policy: NavigationPolicy::Clamped,
            keyboard: true,
            touch: true,
            click_to_advance: false,
            suppress_in_text_input: false,
            presenter_shortcuts: false,
        }
    }

    /// Shared presenter controls: clamped, click-to-advance, focus-aware keys.
    pub fn presenter() -> Self {
        Self {
            policy: NavigationPolicy::Clamped,
            keyboard: true,
            touch: false,
            click_to_advance: true,
            suppress_in_text_input: true,
            presenter_shortcuts: true,
        }
    }

    /// Vlog deck: wraps around, arrow keys only.
    pub fn vlog() -> Self {
        Self {
            policy: NavigationPolicy::Wrapping,
            keyboard: true,
            touch: false,
            click_to_advance: false,
            suppress_in_text_input: false,
            presenter_shortcuts: false,
        }
    }

    pub fn with_policy(mut self, policy: NavigationPolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[derive(Debug, Clone)]
pub struct SlideDeck {
    slides: Vec<Slide>,
    current: usize,
    options: DeckOptions,
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>, options: DeckOptions) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        log::debug!("deck created: {} slides, {} navigation", slides.len(), options.policy.as_str());
        Ok(Self { slides, current: 0, options })
    }

    /// Mount a deck if there is anything to show; an empty list mounts nothing.
    pub fn try_mount(slides: Vec<Slide>, options: DeckOptions) -> Option<Self> {
        Self::new(slides, options).ok()
    }

    /// Start on the slide flagged active in markup. A missing or out of
    /// range flag starts on the first slide.
    pub fn with_active(mut self, active: Option<usize>) -> Self {
        self.current = active.filter(|&i| i < self.slides.len()).unwrap_or(0);
        self
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a constructed deck.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn options(&self) -> &DeckOptions {
        &self.options
    }

    pub fn policy(&self) -> NavigationPolicy {
        self.options.policy
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn go_to(&mut self, index: i64) -> usize {
        self.current = self.options.policy.resolve(index, self.slides.len());
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current as i64 + 1)
    }

    pub fn previous(&mut self) -> usize {
        self.go_to(self.current as i64 - 1)
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.slides.len()
    }

    /// Index `next()` would land on, or `None` if it would stay put.
    pub fn peek_next(&self) -> Option<usize> {
        let target = self.options.policy.resolve(self.current as i64 + 1, self.slides.len());
        (target != self.current).then_some(target)
    }

    /// Index `previous()` would land on, or `None` if it would stay put.
    pub fn peek_previous(&self) -> Option<usize> {
        let target = self.options.policy.resolve(self.current as i64 - 1, self.slides.len());
        (target != self.current).then_some(target)
    }

    /// Width of the progress bar, in percent.
    pub fn progress_percent(&self) -> f64 {
        render::progress_percent(self.current, self.slides.len())
    }

    /// `k/n` label shown in the presenter panel.
    pub fn position_label(&self) -> String {
        format!("{}/{}", self.current + 1, self.slides.len())
    }

    pub fn render(&self) -> RenderedSlide {
        render::render_slide(self.current_slide())
    }
}
