use super::{escape_html, format_bold};
use crate::models::slide::Slide;

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

pub(super) fn title(slide: &Slide) -> String {
    format!(
        r#"<div class="hero">
    <h1 class="slide-title huge">{}</h1>
    <p class="slide-subtitle">{}</p>
    <div class="decorative-line"></div>
</div>"#,
        text(&slide.title),
        text(&slide.subtitle),
    )
}

pub(super) fn concept(slide: &Slide) -> String {
    let bullets = slide
        .bullets
        .iter()
        .map(|b| format!("<li>{}</li>", format_bold(b)))
        .collect::<Vec<_>>()
        .join("");

    format!(
        r#"<h2 class="slide-title">{}</h2>
<ul class="bullet-list">{}</ul>"#,
        text(&slide.title),
        bullets,
    )
}

pub(super) fn interactive(slide: &Slide) -> String {
    format!(
        r#"<div class="interactive-grid">
    <div class="col-instructions">
        <h2 class="slide-title">{}</h2>
        <p class="context-text">{}</p>
    </div>
    <div class="col-task">
        <div class="task-card">
            <h3>🎯 Your Task</h3>
            <p>{}</p>
            <div class="hint"><strong>Tip:</strong> {}</div>
        </div>
    </div>
</div>"#,
        text(&slide.title),
        text(&slide.instructions),
        text(&slide.task),
        text(&slide.hint),
    )
}

/// The copy button carries the exact code in `data-clipboard`;
/// `static/deck.js` writes that attribute's value to the clipboard.
pub(super) fn code(slide: &Slide) -> String {
    let code = escape_html(text(&slide.code));
    format!(
        r#"<h2 class="slide-title">{}</h2>
<div class="code-block-container">
    <pre><code>{code}</code></pre>
    <button class="copy-btn" type="button" data-clipboard="{code}">Copy Magic Phrase</button>
</div>
<p class="code-desc">{}</p>"#,
        text(&slide.title),
        text(&slide.description),
    )
}

pub(super) fn not_found(layout: &str) -> String {
    format!("<h1>Slide layout {} not found</h1>", escape_html(layout))
}
