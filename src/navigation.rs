//! In-page navigation: section identifiers, anchors and the scroll navigator
//!
//! The page composer records the first line of every section it lays out
//! into [`SectionAnchors`]. The [`ScrollNavigator`] looks targets up there and
//! asks the [`Viewport`] to animate to them. Unknown targets are ignored.

use std::fmt;

/// Closed set of in-page anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Document order
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Anchor id, also used as the nav link text
    pub fn id(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Capitalized label for nav links
    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Position in document order (0-based)
    pub fn index(&self) -> usize {
        match self {
            Section::About => 0,
            Section::Skills => 1,
            Section::Projects => 2,
            Section::Contact => 3,
        }
    }

    /// Digit shortcut: '1' -> About ... '4' -> Contact
    pub fn from_digit(c: char) -> Option<Self> {
        let idx = c.to_digit(10)? as usize;
        idx.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// First document line of each rendered section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionAnchors {
    lines: [Option<usize>; 4],
}

impl SectionAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, section: Section, line: usize) {
        self.lines[section.index()] = Some(line);
    }

    pub fn get(&self, section: Section) -> Option<usize> {
        self.lines[section.index()]
    }

    /// Section whose anchor is the last one at or above `line`
    pub fn section_at(&self, line: usize) -> Option<Section> {
        Section::ALL
            .into_iter()
            .filter_map(|s| self.get(s).map(|anchor| (s, anchor)))
            .filter(|(_, anchor)| *anchor <= line)
            .max_by_key(|(_, anchor)| *anchor)
            .map(|(s, _)| s)
    }
}

/// Something that can animate its scroll position to a document line
pub trait Viewport {
    fn animate_to(&mut self, line: usize);
}

/// Resolves section targets to anchors and drives the viewport
#[derive(Debug, Default)]
pub struct ScrollNavigator {
    anchors: SectionAnchors,
}

impl ScrollNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace anchors after the page has been laid out again
    pub fn set_anchors(&mut self, anchors: SectionAnchors) {
        self.anchors = anchors;
    }

    pub fn anchors(&self) -> &SectionAnchors {
        &self.anchors
    }

    /// Fire-and-forget scroll to the section's top line.
    /// Returns false (and does nothing) when the section has no anchor.
    pub fn scroll_to(&self, target: Section, viewport: &mut dyn Viewport) -> bool {
        match self.anchors.get(target) {
            Some(line) => {
                tracing::trace!("Scrolling to #{} (line {})", target, line);
                viewport.animate_to(line);
                true
            }
            None => {
                tracing::trace!("No anchor for #{}, ignoring", target);
                false
            }
        }
    }
}
