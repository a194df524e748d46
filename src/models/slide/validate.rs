use super::types::{Layout, Slide};

/// Presence checks for a slide. Returns one message per missing field that
/// its layout displays; an empty list means the slide is complete.
///
/// Missing fields never stop a deck from loading, they render as empty text.
pub fn validate_slide(slide: &Slide) -> Vec<String> {
    let mut warnings = Vec::new();
    let label = slide_label(slide);

    let require = |value: &Option<String>, field: &str, warnings: &mut Vec<String>| {
        if value.as_deref().map(str::trim).unwrap_or("").is_empty() {
            warnings.push(format!("{label}: {field} is missing"));
        }
    };

    match &slide.layout {
        Layout::Title => {
            require(&slide.title, "title", &mut warnings);
            require(&slide.subtitle, "subtitle", &mut warnings);
        }
        Layout::Concept => {
            require(&slide.title, "title", &mut warnings);
            if slide.bullets.is_empty() {
                warnings.push(format!("{label}: bullets are empty"));
            }
        }
        Layout::Interactive => {
            require(&slide.title, "title", &mut warnings);
            require(&slide.instructions, "instructions", &mut warnings);
            require(&slide.task, "task", &mut warnings);
            require(&slide.hint, "hint", &mut warnings);
        }
        Layout::Code => {
            require(&slide.title, "title", &mut warnings);
            require(&slide.code, "code", &mut warnings);
            require(&slide.description, "description", &mut warnings);
        }
        Layout::Unknown(name) => {
            warnings.push(format!("{label}: unrecognized layout '{name}'"));
        }
    }

    warnings
}

/// Validate every slide, logging each finding. Returns the number of warnings.
pub fn validate_deck(slides: &[Slide]) -> usize {
    let mut count = 0;
    for (i, slide) in slides.iter().enumerate() {
        for warning in validate_slide(slide) {
            log::warn!("slide {}: {}", i + 1, warning);
            count += 1;
        }
    }
    count
}

fn slide_label(slide: &Slide) -> String {
    match &slide.id {
        Some(id) if !id.is_empty() => format!("{} slide '{}'", slide.layout, id),
        _ => format!("{} slide", slide.layout),
    }
}
