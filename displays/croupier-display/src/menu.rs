//! Retained menu state and redraw planning
//!
//! The UI remembers the last list it painted. Comparing the next request
//! against it decides between a full repaint, repainting only the two
//! rows whose highlight changed, or doing nothing.

use croupier_core::traits::DisplayError;
use heapless::{String, Vec};

use crate::glyph::TextSize;

/// Maximum number of menu rows
pub const MAX_MENU_ITEMS: usize = 16;

/// Maximum stored label length in bytes
pub const MAX_LABEL_LEN: usize = 40;

/// Vertical padding unit between title, bands and text
pub const LINE_SPACING: i32 = 4;

/// Left margin of row text
pub const TEXT_X: i32 = 5;

/// Stored label
pub type Label = String<MAX_LABEL_LEN>;

/// What a menu draw has to repaint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RedrawPlan {
    /// Clear and draw everything
    Full,
    /// Only the highlight moved
    Partial { previous: usize, current: usize },
    /// Identical to what is on screen
    Unchanged,
}

/// Longest prefix of `s` that fits a [`Label`], cut on a char boundary
pub fn truncate_label(s: &str) -> &str {
    if s.len() <= MAX_LABEL_LEN {
        return s;
    }
    let mut end = MAX_LABEL_LEN;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fn label(s: &str) -> Label {
    let mut out = Label::new();
    // Cannot fail: the prefix fits by construction
    let _ = out.push_str(truncate_label(s));
    out
}

/// Last painted menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRenderState {
    items: Vec<Label, MAX_MENU_ITEMS>,
    selected: usize,
    start_y: i32,
    title: Option<Label>,
}

impl MenuRenderState {
    /// Snapshot a menu request
    ///
    /// Fails with [`DisplayError::BufferOverflow`] for more than
    /// [`MAX_MENU_ITEMS`] items. Labels are kept up to [`MAX_LABEL_LEN`].
    pub fn capture(
        items: &[&str],
        selected: usize,
        title: Option<&str>,
        start_y: i32,
    ) -> Result<Self, DisplayError> {
        let mut stored = Vec::new();
        for item in items {
            stored
                .push(label(item))
                .map_err(|_| DisplayError::BufferOverflow)?;
        }
        Ok(Self {
            items: stored,
            selected,
            start_y,
            title: title.map(label),
        })
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn start_y(&self) -> i32 {
        self.start_y
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|s| s.as_str())
    }

    fn same_layout(&self, items: &[&str], title: Option<&str>, start_y: i32) -> bool {
        self.start_y == start_y
            && self.title.as_deref() == title.map(truncate_label)
            && self.items.len() == items.len()
            && self
                .items
                .iter()
                .zip(items)
                .all(|(stored, item)| stored.as_str() == truncate_label(item))
    }

    /// Decide how to paint `items` given that this state is on screen
    pub fn plan(
        &self,
        items: &[&str],
        selected: usize,
        title: Option<&str>,
        start_y: i32,
    ) -> RedrawPlan {
        if !self.same_layout(items, title, start_y) {
            RedrawPlan::Full
        } else if self.selected != selected {
            RedrawPlan::Partial {
                previous: self.selected,
                current: selected,
            }
        } else {
            RedrawPlan::Unchanged
        }
    }
}

/// Plan against an optional retained state
pub fn plan(
    retained: Option<&MenuRenderState>,
    items: &[&str],
    selected: usize,
    title: Option<&str>,
    start_y: i32,
) -> RedrawPlan {
    match retained {
        Some(state) => state.plan(items, selected, title, start_y),
        None => RedrawPlan::Full,
    }
}

/// Row geometry shared by full and partial repaints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    start_y: i32,
    title_height: i32,
    glyph_height: i32,
}

impl MenuLayout {
    pub fn new(start_y: i32, has_title: bool, size: TextSize) -> Self {
        let glyph_height = size.cell_height() as i32;
        Self {
            start_y,
            title_height: if has_title {
                glyph_height + LINE_SPACING
            } else {
                0
            },
            glyph_height,
        }
    }

    /// Height of the title band (0 without a title)
    pub fn title_height(&self) -> i32 {
        self.title_height
    }

    /// Top of row `index`'s band
    pub fn row_top(&self, index: usize) -> i32 {
        self.start_y + self.title_height + index as i32 * (self.glyph_height + 2 * LINE_SPACING)
    }

    /// Height of a row band
    pub fn band_height(&self) -> u32 {
        (self.glyph_height + LINE_SPACING) as u32
    }

    /// Top of row `index`'s text
    pub fn text_y(&self, index: usize) -> i32 {
        self.row_top(index) + LINE_SPACING
    }
}
