//! Which navigation entry to highlight for a scroll offset.

/// Geometry of one page section, in document pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: &str, top: f64, height: f64) -> Self {
        Self { id: id.to_string(), top, height }
    }

    /// Offset at which this section becomes the active one.
    pub fn activation_threshold(&self) -> f64 {
        self.top - self.height / 3.0
    }
}

/// Lay out sections one after another starting at `start`, given their heights.
pub fn stack_sections(start: f64, sections: &[(&str, f64)]) -> Vec<Section> {
    let mut top = start;
    sections
        .iter()
        .map(|(id, height)| {
            let section = Section::new(id, top, *height);
            top += height;
            section
        })
        .collect()
}

/// The last section, scanning top to bottom, whose threshold the offset has
/// reached. `None` above the first threshold.
pub fn active_section(sections: &[Section], offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| offset >= s.activation_threshold())
        .last()
        .map(|s| s.id.as_str())
}

/// A navigation link and whether it is highlighted.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLinkState {
    pub href: String,
    pub active: bool,
}

/// Mark each `#id` link active when it targets the active section.
pub fn nav_link_states(links: &[&str], sections: &[Section], offset: f64) -> Vec<NavLinkState> {
    let current = active_section(sections, offset);
    links
        .iter()
        .map(|href| NavLinkState {
            href: href.to_string(),
            active: current.is_some_and(|id| href.strip_prefix('#') == Some(id)),
        })
        .collect()
}
