//! The shipped roster, and the flag art each label resolves to.
//!
//! Art here is procedural: most of these flags are just bands or stripes, and the two that aren't get a painter
//! function. Whatever the card size ends up being, the art scales to it.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::io::{
    clifmt::{Cell, Color, FormattedExt},
    XY,
};

/// The countries the quiz ships with. Order doesn't matter; the quiz shuffles it every round.
pub const COUNTRIES: [&str; 11] = [
    "Estonia", "France", "Germany", "Ireland", "Italy", "Nigeria", "Poland", "Spain", "UK",
    "Ukraine", "US",
];

/// How to paint a flag into a rectangle of cells.
pub enum FlagArt {
    /// Equal horizontal bands, top to bottom.
    Bands(&'static [Color]),
    /// Equal vertical stripes, left to right.
    Stripes(&'static [Color]),
    /// Anything fancier paints itself: (position, size) -> cell.
    Painter(fn(XY, XY) -> Cell),
}

fn swatch(color: Color) -> Cell {
    Cell::of(' ').bg(color)
}

impl FlagArt {
    /// The cell at `pos` within a flag drawn at `size`.
    pub fn cell(&self, pos: XY, size: XY) -> Cell {
        match self {
            FlagArt::Bands(colors) => {
                let band = (pos.y() * colors.len() / size.y().max(1)).min(colors.len() - 1);
                swatch(colors[band])
            }
            FlagArt::Stripes(colors) => {
                let stripe = (pos.x() * colors.len() / size.x().max(1)).min(colors.len() - 1);
                swatch(colors[stripe])
            }
            FlagArt::Painter(paint) => paint(pos, size),
        }
    }
}

/// The Union Jack, as well as it survives being a dozen character cells. The diagonals come out chunky, but the
/// cross reads clearly.
fn union_jack(pos: XY, size: XY) -> Cell {
    let (x, y) = (pos.x() as i64, pos.y() as i64);
    let (w, h) = (size.x().max(2) as i64, size.y().max(2) as i64);
    let (cx, cy) = (w / 2, h / 2);
    if (x - cx).abs() <= w / 10 || y == cy {
        return swatch(Color::Red);
    }
    if (x - cx).abs() <= w / 5 || (y - cy).abs() <= 1 {
        return swatch(Color::White);
    }
    let main = x * (h - 1) - y * (w - 1);
    let anti = x * (h - 1) - (h - 1 - y) * (w - 1);
    if main.abs() <= w || anti.abs() <= w {
        swatch(Color::White)
    } else {
        swatch(Color::Blue)
    }
}

/// Old Glory. Thirteen stripes is asking a lot of a seven-row card, so stripes just alternate from the top; the
/// canton takes the usual top-left corner with a sprinkling of stars.
fn stars_and_stripes(pos: XY, size: XY) -> Cell {
    let XY(x, y) = pos;
    let XY(w, h) = size;
    if x < w * 2 / 5 && y < (h + 1) / 2 {
        let ch = if (x + y) % 2 == 0 { '*' } else { ' ' };
        return Cell::of(ch).fg(Color::BrightWhite).on_blue();
    }
    if y % 2 == 0 {
        swatch(Color::Red)
    } else {
        swatch(Color::White)
    }
}

lazy_static! {
    static ref FLAGS: HashMap<&'static str, FlagArt> = {
        use Color::*;
        let mut m = HashMap::new();
        m.insert("Estonia", FlagArt::Bands(&[Blue, Black, White]));
        m.insert("France", FlagArt::Stripes(&[Blue, White, Red]));
        m.insert("Germany", FlagArt::Bands(&[Black, Red, Yellow]));
        // orange isn't in the ANSI sixteen; bright yellow reads closest
        m.insert("Ireland", FlagArt::Stripes(&[Green, White, BrightYellow]));
        m.insert("Italy", FlagArt::Stripes(&[Green, White, Red]));
        m.insert("Nigeria", FlagArt::Stripes(&[Green, White, Green]));
        m.insert("Poland", FlagArt::Bands(&[White, Red]));
        m.insert("Spain", FlagArt::Bands(&[Red, Yellow, Red]));
        m.insert("UK", FlagArt::Painter(union_jack));
        m.insert("Ukraine", FlagArt::Bands(&[Blue, Yellow]));
        m.insert("US", FlagArt::Painter(stars_and_stripes));
        m
    };
}

/// Resolve a label to its art. The quiz core never calls this; whether a missing flag matters is the screen's
/// problem, and it has a placeholder for the occasion.
pub fn flag(label: &str) -> Option<&'static FlagArt> {
    FLAGS.get(label)
}
