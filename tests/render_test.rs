//! Integration tests for layout rendering.

mod common;

use slidedeck::models::slide::Slide;
use slidedeck::render::{self, DEFAULT_BACKGROUND, format_bold, render_slide};
use common::sample_slides;

#[test]
fn test_title_layout() {
    let slide = &sample_slides()[0];
    let rendered = render_slide(slide);
    assert_eq!(rendered.container_class, "slide-content layout-title");
    assert!(rendered.html.contains(r#"<h1 class="slide-title huge">Your Story Starts Here</h1>"#));
    assert!(rendered.html.contains(r#"<p class="slide-subtitle">A modern writing workflow</p>"#));
    assert!(rendered.html.contains("decorative-line"));
}

#[test]
fn test_background_defaults_to_neutral_gradient() {
    let rendered = render_slide(&sample_slides()[0]);
    assert_eq!(rendered.background, DEFAULT_BACKGROUND);

    let rendered = render_slide(&sample_slides()[1]);
    assert_eq!(rendered.background, "#fff");

    let blank = Slide::new("title").with_background("  ");
    assert_eq!(render::slide_background(&blank), DEFAULT_BACKGROUND);
}

#[test]
fn test_concept_layout_rewrites_bold() {
    let rendered = render_slide(&sample_slides()[1]);
    assert!(rendered.html.contains(r#"<h2 class="slide-title">The 4 Pillars of Git</h2>"#));
    assert!(rendered.html.contains("<li><strong>Branch</strong>: your private sandbox.</li>"));
    assert!(rendered.html.contains("<li><strong>Commit</strong>: a snapshot of your progress.</li>"));
    assert!(!rendered.html.contains("**"));
}

#[test]
fn test_interactive_layout() {
    let html = render_slide(&sample_slides()[2]).html;
    assert!(html.contains("interactive-grid"));
    assert!(html.contains(r#"<p class="context-text">Open the repository.</p>"#));
    assert!(html.contains("<p>Create a branch.</p>"));
    assert!(html.contains("<strong>Tip:</strong> Use the sidebar."));
}

#[test]
fn test_code_layout_carries_exact_code() {
    let html = render_slide(&sample_slides()[3]).html;
    assert!(html.contains("<pre><code>git pull --rebase</code></pre>"));
    assert!(html.contains(r#"data-clipboard="git pull --rebase""#));
    assert!(html.contains(r#"<p class="code-desc">Fetch the latest chapters.</p>"#));
}

#[test]
fn test_unknown_layout_renders_fallback() {
    let rendered = render_slide(&sample_slides()[4]);
    assert_eq!(rendered.html, "<h1>Slide layout timeline not found</h1>");
    assert_eq!(rendered.container_class, "slide-content layout-timeline");
}

#[test]
fn test_bold_rewrite_examples() {
    assert_eq!(format_bold("a **b** c"), "a <strong>b</strong> c");
    assert_eq!(format_bold("a **b c"), "a **b c");
    assert_eq!(format_bold("no markers"), "no markers");
}

#[test]
fn test_animation_class_is_appended() {
    let rendered = render_slide(&sample_slides()[0]);
    assert_eq!(rendered.animated_class(), "slide-content layout-title fade-in");
}
