//! High-level drawing API
//!
//! [`Ui`] is what application code talks to: themed text, word-wrapped
//! paragraphs, a titled menu with one highlighted row, message boxes and a
//! welcome screen. Menus are diffed against the last painted one so that
//! moving the highlight repaints two rows instead of the whole screen.

use croupier_core::config::ThemeConfig;
use croupier_core::traits::{DisplayError, Panel};
use croupier_core::Rgb565;

use crate::canvas::{Canvas, DEFAULT_SCRATCH_BYTES};
use crate::glyph::TextSize;
use crate::menu::{self, MenuLayout, MenuRenderState, RedrawPlan, LINE_SPACING, MAX_MENU_ITEMS, TEXT_X};

/// Message box margin
const BOX_PADDING: i32 = 10;
/// Message box button height
const BUTTON_HEIGHT: u32 = 20;
/// Gap between message box buttons
const BUTTON_SPACING: i32 = 5;

/// Themed UI over a [`Canvas`]
pub struct Ui<P, const N: usize = DEFAULT_SCRATCH_BYTES> {
    canvas: Canvas<P, N>,
    theme: ThemeConfig,
    size: TextSize,
    menu: Option<MenuRenderState>,
}

impl<P: Panel, const N: usize> Ui<P, N> {
    pub fn new(panel: P, theme: ThemeConfig) -> Self {
        Self {
            canvas: Canvas::new(panel).with_background(theme.background),
            theme,
            size: TextSize::UI,
            menu: None,
        }
    }

    /// Use a different text scale
    pub fn with_text_size(mut self, size: TextSize) -> Self {
        self.size = size;
        self.menu = None;
        self
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn canvas(&self) -> &Canvas<P, N> {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas<P, N> {
        &mut self.canvas
    }

    /// Unwrap the panel
    pub fn into_inner(self) -> P {
        self.canvas.into_inner()
    }

    fn width(&self) -> i32 {
        self.canvas.size().0 as i32
    }

    fn height(&self) -> i32 {
        self.canvas.size().1 as i32
    }

    fn cell_width(&self) -> i32 {
        self.size.cell_width() as i32
    }

    fn glyph_height(&self) -> i32 {
        self.size.cell_height() as i32
    }

    /// Fill the screen with `color`, or the theme background
    ///
    /// The retained menu is forgotten since it is no longer on screen.
    pub fn clear(&mut self, color: Option<Rgb565>) -> Result<(), DisplayError> {
        self.menu = None;
        self.canvas.clear(color.unwrap_or(self.theme.background))
    }

    pub fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.canvas.fill_rect(x, y, width, height, color)
    }

    pub fn pixel(&mut self, x: i32, y: i32, color: Rgb565) -> Result<(), DisplayError> {
        self.canvas.pixel(x, y, color)
    }

    /// Draw one line of text, cut to whole characters within `max_width`
    ///
    /// Returns the x coordinate just past the last drawn character.
    pub fn draw_text_line(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        fg: Option<Rgb565>,
        bg: Option<Rgb565>,
        max_width: Option<u32>,
    ) -> Result<i32, DisplayError> {
        let text = match max_width {
            Some(max) => {
                let fit = (max / self.size.cell_width()) as usize;
                match text.char_indices().nth(fit) {
                    Some((end, _)) => &text[..end],
                    None => text,
                }
            }
            None => text,
        };
        let fg = fg.unwrap_or(self.theme.text);
        self.canvas.draw_text(text, x, y, fg, bg, self.size)
    }

    /// Word-wrap `text` into lines no wider than `max_width`
    ///
    /// Words are split on single spaces and packed greedily. A word wider
    /// than the line is cut. Drawing stops once the next line would pass the
    /// bottom of the screen. Returns the y coordinate below the last line.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text_multiline(
        &mut self,
        text: &str,
        x: i32,
        mut y: i32,
        max_width: u32,
        fg: Option<Rgb565>,
        bg: Option<Rgb565>,
        line_height: Option<i32>,
    ) -> Result<i32, DisplayError> {
        let line_height = line_height.unwrap_or(self.glyph_height() + LINE_SPACING);
        let max_chars = (max_width / self.size.cell_width()) as usize;
        let bottom = self.height();

        // Current line as a byte range of `text`
        let mut line: Option<(usize, usize)> = None;
        let mut offset = 0;
        for word in text.split(' ') {
            let start = offset;
            let end = start + word.len();
            offset = end + 1;

            let candidate = (line.map_or(start, |(s, _)| s), end);
            if text[candidate.0..candidate.1].chars().count() <= max_chars {
                line = Some(candidate);
                continue;
            }

            if let Some((s, e)) = line {
                self.draw_text_line(&text[s..e], x, y, fg, bg, Some(max_width))?;
                y += line_height;
                if y + self.glyph_height() > bottom {
                    return Ok(y);
                }
            }
            line = Some((start, end));
        }

        if let Some((s, e)) = line {
            if s < e {
                self.draw_text_line(&text[s..e], x, y, fg, bg, Some(max_width))?;
                y += line_height;
            }
        }
        Ok(y)
    }

    /// Draw a list with row `selected` highlighted, under an optional title
    ///
    /// Repaints only what changed since the previous call: everything when
    /// the items, title or position differ, otherwise just the rows whose
    /// highlight moved. More than 16 items is rejected before drawing.
    pub fn draw_menu(
        &mut self,
        items: &[&str],
        selected: usize,
        title: Option<&str>,
        start_y: i32,
    ) -> Result<(), DisplayError> {
        if items.len() > MAX_MENU_ITEMS {
            return Err(DisplayError::BufferOverflow);
        }

        let plan = menu::plan(self.menu.as_ref(), items, selected, title, start_y);
        let layout = MenuLayout::new(start_y, title.is_some(), self.size);

        // Anything interrupted below leaves the screen unknown
        let retained = self.menu.take();

        match plan {
            RedrawPlan::Full => {
                self.canvas.clear(self.theme.background)?;
                if let Some(title) = title {
                    let width = self.width();
                    self.canvas.fill_rect(
                        0,
                        start_y,
                        width as u32,
                        layout.title_height() as u32,
                        self.theme.background,
                    )?;
                    self.draw_text_multiline(
                        title,
                        TEXT_X,
                        start_y,
                        (width - 2 * TEXT_X).max(0) as u32,
                        Some(self.theme.highlight_text),
                        Some(self.theme.background),
                        None,
                    )?;
                }
                for (index, item) in items.iter().enumerate() {
                    self.draw_menu_row(&layout, index, item, index == selected)?;
                }
            }
            RedrawPlan::Partial { previous, current } => {
                if let Some(item) = items.get(previous) {
                    self.draw_menu_row(&layout, previous, item, false)?;
                }
                if let Some(item) = items.get(current) {
                    self.draw_menu_row(&layout, current, item, true)?;
                }
            }
            RedrawPlan::Unchanged => {
                self.menu = retained;
                return Ok(());
            }
        }

        self.menu = Some(MenuRenderState::capture(items, selected, title, start_y)?);
        Ok(())
    }

    fn draw_menu_row(
        &mut self,
        layout: &MenuLayout,
        index: usize,
        text: &str,
        highlighted: bool,
    ) -> Result<(), DisplayError> {
        let (band, fg) = if highlighted {
            (self.theme.highlight_background, self.theme.highlight_text)
        } else {
            (self.theme.background, self.theme.text)
        };
        let width = self.width() as u32;
        self.canvas
            .fill_rect(0, layout.row_top(index), width, layout.band_height(), band)?;
        self.draw_text_line(text, TEXT_X, layout.text_y(index), Some(fg), Some(band), None)?;
        Ok(())
    }

    /// Forget the retained menu; the next `draw_menu` repaints fully
    pub fn reset_menu(&mut self) {
        self.menu = None;
    }

    /// Full-screen message with an optional title and a row of buttons
    ///
    /// Button `selected_option` is highlighted.
    pub fn show_message_box(
        &mut self,
        lines: &[&str],
        title: Option<&str>,
        options: &[&str],
        selected_option: usize,
    ) -> Result<(), DisplayError> {
        self.clear(None)?;

        let width = self.width();
        let box_height = self.height() - 2 * BOX_PADDING;
        let text_width = (width - 2 * BOX_PADDING).max(0) as u32;
        let mut y = BOX_PADDING;

        if let Some(title) = title {
            self.draw_text_multiline(
                title,
                BOX_PADDING,
                y,
                text_width,
                Some(self.theme.highlight_text),
                Some(self.theme.background),
                None,
            )?;
            y += self.glyph_height() + 2 * LINE_SPACING;
        }

        for line in lines {
            y = self.draw_text_multiline(
                line,
                BOX_PADDING,
                y,
                text_width,
                Some(self.theme.text),
                Some(self.theme.background),
                None,
            )?;
            // Keep clear of the button strip
            if y > box_height - BUTTON_HEIGHT as i32 {
                break;
            }
        }

        if options.is_empty() {
            return Ok(());
        }

        let count = options.len() as i32;
        let button_width =
            ((width - 2 * BOX_PADDING - (count - 1) * BUTTON_SPACING) / count).max(0);
        let button_y = box_height - 25;
        for (i, option) in options.iter().enumerate() {
            let (band, fg) = if i == selected_option {
                (self.theme.highlight_background, self.theme.highlight_text)
            } else {
                (self.theme.background, self.theme.text)
            };
            let button_x = BOX_PADDING + i as i32 * (button_width + BUTTON_SPACING);
            self.canvas
                .fill_rect(button_x, button_y, button_width as u32, BUTTON_HEIGHT, band)?;

            let label_width = option.chars().count() as i32 * self.cell_width();
            let text_x = button_x + ((button_width - label_width) / 2).max(0);
            self.draw_text_line(
                option,
                text_x,
                box_height - 20,
                Some(fg),
                Some(band),
                Some(button_width as u32),
            )?;
        }
        Ok(())
    }

    /// Blue splash with a centered title and a status line beneath
    pub fn show_welcome_screen(&mut self, title: &str, subtitle: &str) -> Result<(), DisplayError> {
        self.clear(Some(Rgb565::BLUE))?;

        let width = self.width();
        let middle = self.height() / 2;
        let title_width = title.chars().count() as i32 * self.cell_width();
        self.draw_text_line(
            title,
            (width - title_width) / 2,
            middle - 10,
            Some(Rgb565::YELLOW),
            Some(Rgb565::BLUE),
            None,
        )?;
        self.draw_text_line(
            subtitle,
            10,
            middle + 10,
            Some(Rgb565::WHITE),
            Some(Rgb565::BLUE),
            None,
        )?;
        Ok(())
    }
}
