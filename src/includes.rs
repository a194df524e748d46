//! Batch maintenance of generated lesson pages: make sure every
//! `lesson_ppt.html` under a directory pulls in the shared presenter
//! controls stylesheet and script.

use std::fs;
use std::path::{Path, PathBuf};

pub const LESSON_FILE_NAME: &str = "lesson_ppt.html";

/// The two tags to inject and the substrings that mark them as present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeSet {
    pub css_tag: String,
    pub css_marker: String,
    pub js_tag: String,
    pub js_marker: String,
}

impl Default for IncludeSet {
    fn default() -> Self {
        Self {
            css_tag: r#"<link rel="stylesheet" href="../../shared/presenter_controls.css">"#.to_string(),
            css_marker: "presenter_controls.css".to_string(),
            js_tag: r#"<script src="../../shared/presenter_controls.js"></script>"#.to_string(),
            js_marker: "presenter_controls.js".to_string(),
        }
    }
}

impl IncludeSet {
    pub fn is_complete(&self, content: &str) -> bool {
        content.contains(&self.css_marker) && content.contains(&self.js_marker)
    }

    /// Insert whichever tags are missing. Returns the new content and whether
    /// anything changed; content that already has both is returned untouched.
    pub fn ensure(&self, content: &str) -> (String, bool) {
        let mut out = content.to_string();
        let mut changed = false;

        if !out.contains(&self.css_marker) {
            out = if out.contains("</head>") {
                out.replacen("</head>", &format!("{}\n</head>", self.css_tag), 1)
            } else if out.contains("<head>") {
                out.replacen("<head>", &format!("<head>\n{}", self.css_tag), 1)
            } else {
                format!("{}\n{}", self.css_tag, out)
            };
            changed = true;
        }

        if !out.contains(&self.js_marker) {
            out = if out.contains("</body>") {
                out.replacen("</body>", &format!("{}\n</body>", self.js_tag), 1)
            } else {
                format!("{}\n{}", out, self.js_tag)
            };
            changed = true;
        }

        (out, changed)
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub found: usize,
    pub modified: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// Every `lesson_ppt.html` below `root`, sorted. Unreadable directories are
/// logged and skipped.
pub fn find_lesson_files(root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    walk(root, &mut found);
    found.sort();
    found
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Skipping {}: {}", dir.display(), e);
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else { continue };
        if file_type.is_dir() {
            walk(&path, found);
        } else if file_type.is_file() && entry.file_name() == LESSON_FILE_NAME {
            found.push(path);
        }
    }
}

/// Patch one file in place. Writes only when something was inserted.
pub fn ensure_includes_in_file(path: &Path, includes: &IncludeSet) -> std::io::Result<bool> {
    let content = fs::read_to_string(path)?;
    let (patched, changed) = includes.ensure(&content);
    if changed {
        fs::write(path, patched)?;
    }
    Ok(changed)
}

/// Patch every lesson file under `root`. A failing file is logged and the
/// run moves on; nothing is rolled back.
pub fn add_includes(root: &Path, includes: &IncludeSet) -> BatchReport {
    log::info!("Scanning {} for {}", root.display(), LESSON_FILE_NAME);
    let files = find_lesson_files(root);
    log::info!("Found {} {} files", files.len(), LESSON_FILE_NAME);

    let mut report = BatchReport { found: files.len(), ..Default::default() };
    for file in files {
        match ensure_includes_in_file(&file, includes) {
            Ok(true) => report.modified.push(file),
            Ok(false) => {}
            Err(e) => {
                log::error!("Failed to process {}: {}", file.display(), e);
                report.failed.push((file, e.to_string()));
            }
        }
    }
    log::info!("Modified {} files", report.modified.len());
    report
}

/// Read-only audit of the lesson files under a root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IncludeReport {
    pub total: usize,
    /// Files that lack either include.
    pub missing: Vec<PathBuf>,
    /// Files that could not be read, with the reason.
    pub unreadable: Vec<(PathBuf, String)>,
}

/// Lesson files under `root` that lack either include. Read-only.
pub fn report_missing(root: &Path, includes: &IncludeSet) -> IncludeReport {
    let files = find_lesson_files(root);
    let mut report = IncludeReport { total: files.len(), ..Default::default() };
    for file in files {
        match fs::read_to_string(&file) {
            Ok(content) if !includes.is_complete(&content) => report.missing.push(file),
            Ok(_) => {}
            Err(e) => {
                log::error!("Failed to read {}: {}", file.display(), e);
                report.unreadable.push((file, e.to_string()));
            }
        }
    }
    report
}
