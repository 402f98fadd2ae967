//! The in-memory text framebuffer everything renders onto.

use std::ops;

use crate::io::{
    clifmt::{Cell, FormattedExt, Text},
    widgets::{Card, Dialog, Header, Textbox},
    XY,
};

/// A text framebuffer.
///
/// Everything renders onto this, and then a backend renders it to the real display in one go. That avoids flicker and
/// partial frames, and it means the widgets and the game can be tested without any terminal at all.
pub struct Screen {
    cells: Vec<Cell>,
    size: XY,
}

impl Screen {
    /// Create a new `Screen` of the given size.
    pub fn new(size: XY) -> Self {
        let mut res = Self {
            cells: vec![],
            size: XY(0, 0),
        };
        res.resize(size);
        res
    }

    /// How big this screen is, in characters.
    pub fn size(&self) -> XY {
        self.size
    }

    /// All of the cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The rows of the screen, top to bottom.
    pub fn rows(&self) -> Vec<&[Cell]> {
        let mut res = Vec::with_capacity(self.size.y());
        for y in 0..self.size.y() {
            res.push(&self[y]);
        }
        res
    }

    /// Reset the whole screen to blank cells.
    pub fn clear(&mut self) {
        self.resize(self.size())
    }

    /// Resize the screen, clearing its contents at the same time. Only reallocates if the screen is growing.
    pub fn resize(&mut self, size: XY) {
        self.cells.truncate(0);
        self.cells.resize(size.x() * size.y(), Cell::BLANK);
        self.size = size;
    }

    /// Write some formatted text at a position, clipped to the screen.
    ///
    /// This doesn't understand newlines or wrapping; that's [`Self::textbox`]'s job.
    pub fn write(&mut self, pos: XY, text: Vec<Text>) {
        let XY(mut x, y) = pos;
        if y >= self.size.y() {
            return;
        }
        for chunk in text {
            for ch in chunk.text.chars() {
                if x >= self.size.x() {
                    return;
                }
                self[y][x] = Cell::of(ch).fmt_of(&chunk);
                x += 1;
            }
        }
    }

    /// Write the top bar (title, score, rule) to the screen. (Rewrite it every frame!)
    pub fn header(&mut self) -> Header<'_> {
        Header::new(self)
    }

    /// Write a (possibly wrapped, possibly centered) block of text to the screen.
    pub fn textbox(&mut self, text: Vec<Text>) -> Textbox<'_> {
        Textbox::new(self, text)
    }

    /// Draw one flag card at the given rectangle.
    pub fn card(&mut self, at: XY, size: XY) -> Card<'_> {
        Card::new(self, at, size)
    }

    /// Draw a modal dialog, centered over whatever's already on screen.
    pub fn dialog(&mut self, title: Vec<Text>) -> Dialog<'_> {
        Dialog::new(self, title)
    }
}

impl ops::Index<usize> for Screen {
    type Output = [Cell];
    fn index(&self, row: usize) -> &Self::Output {
        let start = row * self.size.x();
        let end = start + self.size.x();
        &self.cells[start..end]
    }
}

impl ops::IndexMut<usize> for Screen {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        let start = row * self.size.x();
        let end = start + self.size.x();
        &mut self.cells[start..end]
    }
}
