use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering strategy for a slide. Unrecognized names are kept verbatim so
/// the renderer can report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Layout {
    Title,
    Concept,
    Interactive,
    Code,
    Unknown(String),
}

impl Layout {
    pub fn as_str(&self) -> &str {
        match self {
            Layout::Title => "title",
            Layout::Concept => "concept",
            Layout::Interactive => "interactive",
            Layout::Code => "code",
            Layout::Unknown(name) => name,
        }
    }
}

impl From<String> for Layout {
    fn from(s: String) -> Self {
        match s.as_str() {
            "title" => Layout::Title,
            "concept" => Layout::Concept,
            "interactive" => Layout::Interactive,
            "code" => Layout::Code,
            _ => Layout::Unknown(s),
        }
    }
}

impl From<&str> for Layout {
    fn from(s: &str) -> Self {
        Layout::from(s.to_string())
    }
}

impl From<Layout> for String {
    fn from(layout: Layout) -> Self {
        layout.as_str().to_string()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One slide of a deck. Every content field is optional; which ones matter
/// depends on `layout`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub layout: Layout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Presenter notes, shown only in the presenter panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Marks the slide a deck should open on.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub active: bool,
}

impl Slide {
    /// An empty slide of the given layout. Fill fields with the `with_*` builders.
    pub fn new(layout: impl Into<Layout>) -> Self {
        Self {
            id: None,
            layout: layout.into(),
            title: None,
            subtitle: None,
            background: None,
            bullets: Vec::new(),
            instructions: None,
            task: None,
            hint: None,
            code: None,
            description: None,
            notes: None,
            active: false,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_background(mut self, background: &str) -> Self {
        self.background = Some(background.to_string());
        self
    }

    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = bullets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_instructions(mut self, instructions: &str) -> Self {
        self.instructions = Some(instructions.to_string());
        self
    }

    pub fn with_task(mut self, task: &str) -> Self {
        self.task = Some(task.to_string());
        self
    }

    pub fn with_hint(mut self, hint: &str) -> Self {
        self.hint = Some(hint.to_string());
        self
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = Some(code.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    pub fn with_active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Presenter notes, treating an empty string as absent.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }
}
