use super::SlideDeck;

pub const NO_NOTES_PLACEHOLDER: &str = "(no notes)";

/// Presenter overlay toggles. The notes panel starts hidden and the controls
/// start dimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresenterPanel {
    pub notes_visible: bool,
    pub controls_visible: bool,
}

impl PresenterPanel {
    pub fn toggle_notes(&mut self) {
        self.notes_visible = !self.notes_visible;
    }

    pub fn hide_notes(&mut self) {
        self.notes_visible = false;
    }

    pub fn toggle_controls(&mut self) {
        self.controls_visible = !self.controls_visible;
    }

    /// Opacity applied to the controls strip.
    pub fn controls_opacity(&self) -> f32 {
        if self.controls_visible { 1.0 } else { 0.9 }
    }

    pub fn view(&self, deck: &SlideDeck) -> PresenterView {
        PresenterView {
            notes: deck
                .current_slide()
                .notes()
                .unwrap_or(NO_NOTES_PLACEHOLDER)
                .to_string(),
            position: deck.position_label(),
            notes_visible: self.notes_visible,
            controls_visible: self.controls_visible,
        }
    }
}

/// What the presenter panel shows for the current slide.
#[derive(Debug, Clone, PartialEq)]
pub struct PresenterView {
    pub notes: String,
    pub position: String,
    pub notes_visible: bool,
    pub controls_visible: bool,
}
