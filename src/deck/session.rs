use super::input::{Command, InputEvent, InputMapper};
use super::presenter::{PresenterPanel, PresenterView};
use super::{DeckError, DeckOptions, SlideDeck};
use crate::models::slide::Slide;
use crate::render::RenderedSlide;

/// A mounted deck: cursor, input translation and presenter overlay owned by
/// one instance. Dropping the session tears everything down.
#[derive(Debug, Clone)]
pub struct DeckSession {
    deck: SlideDeck,
    input: InputMapper,
    panel: PresenterPanel,
}

impl DeckSession {
    pub fn new(slides: Vec<Slide>, options: DeckOptions) -> Result<Self, DeckError> {
        let deck = SlideDeck::new(slides, options)?;
        Ok(Self::from_deck(deck))
    }

    pub fn from_deck(deck: SlideDeck) -> Self {
        let input = InputMapper::new(*deck.options());
        Self { deck, input, panel: PresenterPanel::default() }
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut SlideDeck {
        &mut self.deck
    }

    pub fn panel(&self) -> &PresenterPanel {
        &self.panel
    }

    /// Feed one raw event through. Returns the command it produced, if any.
    pub fn handle(&mut self, event: &InputEvent) -> Option<Command> {
        let command = self.input.map(event)?;
        self.apply(command);
        Some(command)
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Next => {
                self.deck.next();
            }
            Command::Previous => {
                self.deck.previous();
            }
            Command::ToggleNotes => self.panel.toggle_notes(),
            Command::ToggleControls => self.panel.toggle_controls(),
        }
        log::trace!("{command:?} -> slide {}", self.deck.position_label());
    }

    pub fn render(&self) -> RenderedSlide {
        self.deck.render()
    }

    pub fn presenter_view(&self) -> PresenterView {
        self.panel.view(&self.deck)
    }

    pub fn progress_percent(&self) -> f64 {
        self.deck.progress_percent()
    }
}
