//! Integration tests for deck navigation under both policies.

mod common;

use slidedeck::deck::{DeckError, DeckOptions, NavigationPolicy, SlideDeck};
use common::{numbered_slides, sample_slides};

fn clamped(n: usize) -> SlideDeck {
    SlideDeck::new(numbered_slides(n), DeckOptions::learning()).unwrap()
}

fn wrapping(n: usize) -> SlideDeck {
    SlideDeck::new(numbered_slides(n), DeckOptions::vlog()).unwrap()
}

#[test]
fn test_empty_deck_is_rejected() {
    let err = SlideDeck::new(vec![], DeckOptions::learning()).unwrap_err();
    assert_eq!(err, DeckError::EmptyDeck);
    assert!(SlideDeck::try_mount(vec![], DeckOptions::vlog()).is_none());
}

#[test]
fn test_starts_at_first_slide() {
    let deck = clamped(3);
    assert_eq!(deck.current_index(), 0);
    assert!(deck.is_first());
}

#[test]
fn test_active_flag_selects_start() {
    let deck = clamped(4).with_active(Some(2));
    assert_eq!(deck.current_index(), 2);

    let deck = clamped(4).with_active(Some(9));
    assert_eq!(deck.current_index(), 0);

    let deck = clamped(4).with_active(None);
    assert_eq!(deck.current_index(), 0);
}

#[test]
fn test_go_to_then_render_contains_title() {
    let slides = sample_slides();
    let mut deck = SlideDeck::new(slides.clone(), DeckOptions::learning()).unwrap();
    for (i, slide) in slides.iter().enumerate() {
        deck.go_to(i as i64);
        let html = deck.render().html;
        if let Some(title) = &slide.title {
            // The fallback layout names the layout, not the title.
            if slide.layout.as_str() != "timeline" {
                assert!(html.contains(title.as_str()), "slide {i} missing title: {html}");
            }
        }
    }
}

#[test]
fn test_clamped_next_stops_at_last() {
    let n = 5;
    let mut deck = clamped(n);
    for _ in 0..n {
        deck.next();
    }
    assert_eq!(deck.current_index(), n - 1);
    assert!(deck.is_last());
}

#[test]
fn test_wrapping_next_cycles_back_to_first() {
    let n = 5;
    let mut deck = wrapping(n);
    for _ in 0..n {
        deck.next();
    }
    assert_eq!(deck.current_index(), 0);
}

#[test]
fn test_previous_at_first_slide() {
    let mut deck = clamped(4);
    deck.previous();
    assert_eq!(deck.current_index(), 0);

    let mut deck = wrapping(4);
    deck.previous();
    assert_eq!(deck.current_index(), 3);
}

#[test]
fn test_go_to_out_of_range() {
    let mut deck = clamped(4);
    assert_eq!(deck.go_to(10), 3);
    assert_eq!(deck.go_to(-3), 0);

    let mut deck = wrapping(4);
    assert_eq!(deck.go_to(10), 2);
    assert_eq!(deck.go_to(-1), 3);
    assert_eq!(deck.go_to(-9), 3);
}

#[test]
fn test_policy_override() {
    let options = DeckOptions::vlog().with_policy(NavigationPolicy::Clamped);
    let mut deck = SlideDeck::new(numbered_slides(2), options).unwrap();
    deck.next();
    deck.next();
    assert_eq!(deck.current_index(), 1);
}

#[test]
fn test_progress_reaches_hundred_on_last_slide() {
    for n in [1, 3, 7, 10] {
        let mut deck = clamped(n);
        deck.go_to(n as i64 - 1);
        assert_eq!(deck.progress_percent(), 100.0);
    }
}

#[test]
fn test_progress_tracks_navigation() {
    let mut deck = clamped(4);
    assert_eq!(deck.progress_percent(), 25.0);
    deck.next();
    assert_eq!(deck.progress_percent(), 50.0);
    deck.previous();
    assert_eq!(deck.progress_percent(), 25.0);
}

#[test]
fn test_peek_matches_policy() {
    let deck = clamped(3);
    assert_eq!(deck.peek_previous(), None);
    assert_eq!(deck.peek_next(), Some(1));

    let deck = wrapping(3);
    assert_eq!(deck.peek_previous(), Some(2));

    let single = SlideDeck::new(numbered_slides(1), DeckOptions::vlog()).unwrap();
    assert_eq!(single.peek_next(), None);
}

#[test]
fn test_position_label() {
    let mut deck = clamped(10);
    deck.go_to(4);
    assert_eq!(deck.position_label(), "5/10");
}

#[test]
fn test_policy_parses_from_str() {
    assert_eq!("wrapping".parse::<NavigationPolicy>(), Ok(NavigationPolicy::Wrapping));
    assert_eq!("Clamped".parse::<NavigationPolicy>(), Ok(NavigationPolicy::Clamped));
    assert!("loop".parse::<NavigationPolicy>().is_err());
}

#[test]
fn test_deck_opens_on_slide_flagged_active() {
    use slidedeck::models::deck_source::DeckSource;
    use slidedeck::models::slide::Slide;

    let mut slides = numbered_slides(3);
    slides[2] = Slide::new("concept").with_title("Resume here").with_active();
    let source = DeckSource { slides, ..Default::default() };

    let active = source.active_index();
    let deck = SlideDeck::new(source.slides, DeckOptions::presenter()).unwrap().with_active(active);
    assert_eq!(deck.current_index(), 2);
    assert!(deck.render().html.contains("Resume here"));
}

#[test]
fn test_lesson_page_supplies_config() {
    use slidedeck::models::deck_source::DeckSource;
    use std::fs;

    let dir = tempfile::TempDir::new().unwrap();
    let page = dir.path().join("lesson_ppt.html");
    fs::write(
        &page,
        r#"<html><head><script id="lesson-config" type="application/json">
{"title": "Options", "subtitle": "Lesson 3", "headingFont": "Georgia"}
</script></head><body></body></html>"#,
    )
    .unwrap();

    let mut source = DeckSource::from_json(r#"{"config": {"title": "Old"}, "slides": [{"layout": "title"}]}"#).unwrap();
    source.apply_page(&page).unwrap();
    assert_eq!(source.config.document_title(), "Options:Lesson 3");
    assert_eq!(source.config.heading_font(), Some("Georgia"));

    // A page without the block keeps the deck file's config.
    let bare = dir.path().join("bare.html");
    fs::write(&bare, "<html></html>").unwrap();
    let mut source = DeckSource::from_json(r#"{"config": {"title": "Old"}, "slides": []}"#).unwrap();
    source.apply_page(&bare).unwrap();
    assert_eq!(source.config.title, "Old");

    assert!(source.apply_page(&dir.path().join("missing.html")).is_err());
}
