use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;

pub const DEFAULT_FOOTER_TEXT: &str = "Ruban Investment Vlog © 2025 | Jeff Li | zheli001@gmail.com";
pub const DEFAULT_PAGE_TITLE: &str = "Slides";

/// Display settings embedded in a deck page as a JSON block. Every key is
/// optional and applies its own effect; empty strings count as unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckConfig {
    pub title: String,
    pub subtitle: String,
    /// Page background image URL.
    pub background: String,
    /// Brand logo URL.
    pub brand: String,
    pub heading_font: String,
    pub footer_text: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            background: String::new(),
            brand: String::new(),
            heading_font: String::new(),
            footer_text: DEFAULT_FOOTER_TEXT.to_string(),
        }
    }
}

impl DeckConfig {
    /// Parse a config block. Malformed JSON is ignored and defaults are used.
    pub fn parse_lenient(json: &str) -> Self {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => DeckConfig::from_value(&value),
            Err(e) => {
                log::debug!("ignoring malformed deck config: {e}");
                DeckConfig::default()
            }
        }
    }

    /// Apply each string-valued key on top of the defaults. Keys of any other
    /// type are skipped one by one; the rest still apply.
    pub fn from_value(value: &Value) -> Self {
        let mut config = DeckConfig::default();
        let Some(map) = value.as_object() else {
            log::debug!("ignoring deck config that is not an object");
            return config;
        };
        for (key, value) in map {
            let Some(text) = value.as_str() else {
                log::debug!("ignoring deck config key '{key}': not a string");
                continue;
            };
            let slot = match key.as_str() {
                "title" => &mut config.title,
                "subtitle" => &mut config.subtitle,
                "background" => &mut config.background,
                "brand" => &mut config.brand,
                "headingFont" => &mut config.heading_font,
                "footerText" => &mut config.footer_text,
                _ => {
                    log::debug!("ignoring unknown deck config key '{key}'");
                    continue;
                }
            };
            *slot = text.to_string();
        }
        config
    }

    /// `title:subtitle` when both are set, the title alone when only it is set.
    pub fn document_title(&self) -> String {
        match (self.title.is_empty(), self.subtitle.is_empty()) {
            (false, false) => format!("{}:{}", self.title, self.subtitle),
            (false, true) => self.title.clone(),
            _ => DEFAULT_PAGE_TITLE.to_string(),
        }
    }

    /// Inline body style for the background image, if one is configured.
    pub fn background_style(&self) -> Option<String> {
        if self.background.is_empty() {
            return None;
        }
        Some(format!(
            "background-image: url(\"{}\"); background-size: cover; background-position: center;",
            css_string_body(&self.background)
        ))
    }

    pub fn brand_url(&self) -> Option<&str> {
        Some(self.brand.as_str()).filter(|b| !b.is_empty())
    }

    pub fn heading_font(&self) -> Option<&str> {
        Some(self.heading_font.as_str()).filter(|f| !f.is_empty())
    }

    /// Heading font as a `font-family` value safe to place inside `<style>`.
    /// Characters that could close the declaration or the element are dropped.
    pub fn heading_font_css(&self) -> Option<String> {
        let font: String = self
            .heading_font()?
            .chars()
            .filter(|c| !matches!(c, '{' | '}' | ';' | '<' | '>' | '\\') && !c.is_control())
            .collect();
        Some(font.trim().to_string()).filter(|f| !f.is_empty())
    }

    /// Footer text, falling back to the attribution string when blank.
    pub fn footer(&self) -> &str {
        if self.footer_text.is_empty() {
            DEFAULT_FOOTER_TEXT
        } else {
            &self.footer_text
        }
    }
}

/// Escape text for use between double quotes in a CSS string.
fn css_string_body(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' | '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

fn config_block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?is)<script[^>]*\bid\s*=\s*["']lesson-config["'][^>]*>(.*?)</script>"#)
            .expect("config block regex is valid")
    })
}

/// Raw text content of the `lesson-config` script element, if present.
pub fn extract_config_block(html: &str) -> Option<&str> {
    config_block_regex()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}
