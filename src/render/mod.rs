//! Pure slide rendering: a slide in, a markup string out.

mod layouts;

use regex::Regex;
use std::sync::OnceLock;

use crate::models::slide::{Layout, Slide};

/// Body background when a slide does not set its own.
pub const DEFAULT_BACKGROUND: &str = "linear-gradient(135deg, #F0F4F8 0%, #E6E9EF 100%)";

/// Class re-applied to the container on every render to replay the entry animation.
pub const ENTER_ANIMATION_CLASS: &str = "fade-in";

/// Markup and container settings for one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSlide {
    /// Class list for the slide container, e.g. `slide-content layout-title`.
    pub container_class: String,
    /// CSS `background` value for the page body.
    pub background: String,
    pub html: String,
}

impl RenderedSlide {
    /// Container class including the entry animation.
    pub fn animated_class(&self) -> String {
        format!("{} {}", self.container_class, ENTER_ANIMATION_CLASS)
    }
}

pub fn render_slide(slide: &Slide) -> RenderedSlide {
    let html = match &slide.layout {
        Layout::Title => layouts::title(slide),
        Layout::Concept => layouts::concept(slide),
        Layout::Interactive => layouts::interactive(slide),
        Layout::Code => layouts::code(slide),
        Layout::Unknown(name) => {
            log::warn!("no template for slide layout '{name}'");
            layouts::not_found(name)
        }
    };

    RenderedSlide {
        container_class: format!("slide-content layout-{}", slide.layout),
        background: slide_background(slide).to_string(),
        html,
    }
}

pub fn slide_background(slide: &Slide) -> &str {
    slide
        .background
        .as_deref()
        .filter(|b| !b.trim().is_empty())
        .unwrap_or(DEFAULT_BACKGROUND)
}

fn bold_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold regex is valid"))
}

/// Rewrite `**text**` pairs to `<strong>text</strong>`. Single pass, no
/// nesting, no escapes; a lone `**` is left as is.
pub fn format_bold(text: &str) -> String {
    bold_regex().replace_all(text, "<strong>$1</strong>").into_owned()
}

/// `(current + 1) / count * 100`. An empty deck has no progress.
pub fn progress_percent(current: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (current as f64 + 1.0) / count as f64 * 100.0
}

/// Escape text for use in element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
