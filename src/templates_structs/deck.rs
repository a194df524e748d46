use askama::Template;

use crate::deck::session::DeckSession;
use crate::models::deck_config::DeckConfig;

/// Prev/next link target; `None` renders a disabled control.
pub struct NavLink {
    pub href: String,
    pub label: &'static str,
}

#[derive(Template)]
#[template(path = "deck.html")]
pub struct DeckPageTemplate {
    pub page_title: String,
    pub body_style: String,
    pub brand: Option<String>,
    pub heading_font: Option<String>,
    pub footer: String,
    pub container_class: String,
    pub slide_html: String,
    pub progress: String,
    pub position: String,
    pub notes: String,
    pub notes_visible: bool,
    pub controls_opacity: String,
    pub prev: Option<NavLink>,
    pub next: Option<NavLink>,
    // Input capabilities of the preset; `static/deck.js` only listens for enabled ones.
    pub keyboard: bool,
    pub touch: bool,
    pub click_to_advance: bool,
    pub presenter_shortcuts: bool,
}

impl DeckPageTemplate {
    /// Page for the session's current slide with the config block applied.
    pub fn build(session: &DeckSession, config: &DeckConfig) -> Self {
        let deck = session.deck();
        let rendered = session.render();
        let view = session.presenter_view();
        let options = deck.options();

        // The config's background image is layered over the slide's own background.
        let mut body_style = format!("background: {};", rendered.background);
        if let Some(image) = config.background_style() {
            body_style.push(' ');
            body_style.push_str(&image);
        }

        Self {
            page_title: config.document_title(),
            body_style,
            brand: config.brand_url().map(str::to_string),
            heading_font: config.heading_font_css(),
            footer: config.footer().to_string(),
            container_class: rendered.animated_class(),
            slide_html: rendered.html,
            progress: format!("{:.2}", session.progress_percent()),
            position: view.position,
            notes: view.notes,
            notes_visible: view.notes_visible,
            controls_opacity: format!("{}", session.panel().controls_opacity()),
            prev: deck.peek_previous().map(|i| NavLink { href: format!("/slides/{i}"), label: "◀" }),
            next: deck.peek_next().map(|i| NavLink { href: format!("/slides/{i}"), label: "▶" }),
            keyboard: options.keyboard,
            touch: options.touch,
            click_to_advance: options.click_to_advance,
            presenter_shortcuts: options.presenter_shortcuts,
        }
    }
}
