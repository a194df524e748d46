use serde::Deserialize;
use std::path::Path;

use super::deck_config::{DeckConfig, extract_config_block};
use super::slide::{Slide, validate_deck};
use crate::errors::AppError;

/// Slides plus the display config they were shipped with.
#[derive(Debug, Clone, Default)]
pub struct DeckSource {
    pub config: DeckConfig,
    pub slides: Vec<Slide>,
}

/// Accepted file shapes: a bare slide array, or an object with `slides` and
/// an optional `config`.
#[derive(Deserialize)]
#[serde(untagged)]
enum DeckFile {
    Slides(Vec<Slide>),
    Full {
        #[serde(default)]
        config: Option<serde_json::Value>,
        slides: Vec<Slide>,
    },
}

impl DeckSource {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let file: DeckFile = serde_json::from_str(json)?;
        let source = match file {
            DeckFile::Slides(slides) => DeckSource {
                config: DeckConfig::default(),
                slides,
            },
            DeckFile::Full { config, slides } => DeckSource {
                // A bad config block degrades to defaults instead of rejecting the deck.
                config: config.as_ref().map(DeckConfig::from_value).unwrap_or_default(),
                slides,
            },
        };
        validate_deck(&source.slides);
        Ok(source)
    }

    /// Index of the first slide flagged active, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.slides.iter().position(|s| s.active)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        let source = Self::from_json(&json)?;
        log::info!("Loaded {} slides from {}", source.slides.len(), path.display());
        Ok(source)
    }

    /// Take the config from the `lesson-config` block of a lesson page.
    /// A page without the block leaves the current config alone.
    pub fn apply_page(&mut self, page: &Path) -> Result<(), AppError> {
        let html = std::fs::read_to_string(page)?;
        match extract_config_block(&html) {
            Some(json) => {
                self.config = DeckConfig::parse_lenient(json);
                log::info!("Using deck config from {}", page.display());
            }
            None => log::warn!("{} has no lesson-config block", page.display()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slide::Layout;

    #[test]
    fn bare_array_is_accepted() {
        let source = DeckSource::from_json(r#"[{"layout": "title", "title": "Hi"}]"#).unwrap();
        assert_eq!(source.slides.len(), 1);
        assert_eq!(source.slides[0].layout, Layout::Title);
        assert_eq!(source.config, DeckConfig::default());
    }

    #[test]
    fn object_with_config_is_accepted() {
        let json = r#"{
            "config": {"title": "Deck", "footerText": "me"},
            "slides": [{"layout": "concept", "title": "A", "bullets": ["**x**"]}]
        }"#;
        let source = DeckSource::from_json(json).unwrap();
        assert_eq!(source.config.title, "Deck");
        assert_eq!(source.config.footer(), "me");
        assert_eq!(source.slides[0].bullets, vec!["**x**".to_string()]);
    }

    #[test]
    fn mistyped_config_key_is_skipped_alone() {
        let json = r#"{"config": {"title": 42, "subtitle": "Week 2"}, "slides": []}"#;
        let source = DeckSource::from_json(json).unwrap();
        assert_eq!(source.config.title, "");
        assert_eq!(source.config.subtitle, "Week 2");
    }

    #[test]
    fn non_object_config_degrades_to_defaults() {
        let json = r#"{"config": "dark", "slides": []}"#;
        let source = DeckSource::from_json(json).unwrap();
        assert_eq!(source.config, DeckConfig::default());
    }

    #[test]
    fn unknown_layout_is_kept() {
        let source = DeckSource::from_json(r#"[{"layout": "quiz"}]"#).unwrap();
        assert_eq!(source.slides[0].layout, Layout::Unknown("quiz".into()));
    }

    #[test]
    fn active_flag_is_found() {
        let json = r#"[{"layout": "title"}, {"layout": "code", "active": true}]"#;
        assert_eq!(DeckSource::from_json(json).unwrap().active_index(), Some(1));
        let json = r#"[{"layout": "title"}]"#;
        assert_eq!(DeckSource::from_json(json).unwrap().active_index(), None);
    }

    #[test]
    fn slide_without_layout_is_rejected() {
        assert!(DeckSource::from_json(r#"[{"title": "x"}]"#).is_err());
    }
}
