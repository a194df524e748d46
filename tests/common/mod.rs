//! Shared test infrastructure.
//!
//! # Fixtures
//! - `sample_slides()` - one slide of every layout plus an unknown one
//! - `lesson_tree()` - temp directory with nested lesson pages

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use slidedeck::models::slide::Slide;

// ============================================================================
// SLIDES
// ============================================================================

/// Five slides: title, concept, interactive, code and an unrecognized layout.
pub fn sample_slides() -> Vec<Slide> {
    vec![
        Slide::new("title")
            .with_id("intro")
            .with_title("Your Story Starts Here")
            .with_subtitle("A modern writing workflow")
            .with_notes("Welcome everyone"),
        Slide::new("concept")
            .with_title("The 4 Pillars of Git")
            .with_bullets([
                "**Branch**: your private sandbox.",
                "**Commit**: a snapshot of your progress.",
            ])
            .with_background("#fff"),
        Slide::new("interactive")
            .with_title("Try It")
            .with_instructions("Open the repository.")
            .with_task("Create a branch.")
            .with_hint("Use the sidebar."),
        Slide::new("code")
            .with_title("Magic Phrase")
            .with_code("git pull --rebase")
            .with_description("Fetch the latest chapters."),
        Slide::new("timeline").with_title("Roadmap"),
    ]
}

/// `n` minimal concept slides titled `Slide 1` .. `Slide n`.
pub fn numbered_slides(n: usize) -> Vec<Slide> {
    (1..=n)
        .map(|i| Slide::new("concept").with_title(&format!("Slide {i}")).with_bullets(["x"]))
        .collect()
}

// ============================================================================
// LESSON FILES
// ============================================================================

pub const BARE_LESSON: &str = "<!DOCTYPE html>\n<html>\n<head>\n<title>Lesson</title>\n</head>\n<body>\n<div class=\"slide active\"></div>\n</body>\n</html>\n";

/// Temp tree:
/// - `a/lesson_ppt.html` (no includes)
/// - `a/b/lesson_ppt.html` (no includes)
/// - `c/lesson_ppt.html` (already patched)
/// - `c/other.html` (ignored)
///
/// Returns the TempDir (keep it alive) and the three lesson paths, sorted.
pub fn lesson_tree() -> (TempDir, Vec<PathBuf>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let root = dir.path();
    fs::create_dir_all(root.join("a/b")).expect("Failed to create dirs");
    fs::create_dir_all(root.join("c")).expect("Failed to create dirs");

    let patched = slidedeck::includes::IncludeSet::default().ensure(BARE_LESSON).0;

    fs::write(root.join("a/lesson_ppt.html"), BARE_LESSON).expect("write");
    fs::write(root.join("a/b/lesson_ppt.html"), BARE_LESSON).expect("write");
    fs::write(root.join("c/lesson_ppt.html"), patched).expect("write");
    fs::write(root.join("c/other.html"), BARE_LESSON).expect("write");

    let mut paths = vec![
        root.join("a/lesson_ppt.html"),
        root.join("a/b/lesson_ppt.html"),
        root.join("c/lesson_ppt.html"),
    ];
    paths.sort();
    (dir, paths)
}
