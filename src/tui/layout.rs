/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: phone-sized, nav collapses into the menu button
    Compact,
    /// 60-99 cols: inline nav links, single column cards
    Normal,
    /// 100-139 cols: two column grids
    Wide,
    /// 140+ cols: content column capped and centered
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    /// Inline nav links in the bar; otherwise the menu button replaces them
    pub fn shows_inline_nav(&self) -> bool {
        self.at_least(Breakpoint::Normal)
    }

    /// Cards per row in the skills grid
    pub fn grid_columns(&self) -> usize {
        if self.at_least(Breakpoint::Wide) {
            2
        } else {
            1
        }
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }
}

/// Maximum width of the page column; wider terminals get side margins
pub const MAX_CONTENT_WIDTH: u16 = 120;
