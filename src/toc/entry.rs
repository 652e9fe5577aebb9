use serde::Serialize;
use std::fmt;

/// One row of a table of contents.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Entry {
    /// Nesting depth, counted from the section label (`4.2.23` is level 3).
    pub level: usize,
    pub title: String,
    pub page: u32,
}

impl Entry {
    pub fn new(level: usize, title: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            title: title.into(),
            page,
        }
    }

    /// Moves the target page by `offset`, clamped to the `u32` range.
    pub fn shift_page(&mut self, offset: i64) {
        let shifted = i64::from(self.page).saturating_add(offset);
        self.page = shifted.clamp(0, i64::from(u32::MAX)) as u32;
    }
}

/// Review line, e.g. `Level 1:	 1. Introduction,	 p. 12`.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}:\t {},\t p. {}", self.level, self.title, self.page)
    }
}

/// Number of non-empty dot-separated groups in a section label.
pub fn section_level(label: &str) -> usize {
    label.split('.').filter(|group| !group.is_empty()).count()
}
