use crate::{
    flags::FlagArt,
    io::{
        clifmt::{Cell, Color, FormattedExt},
        screen::Screen,
        XY,
    },
};

/// One tappable flag card: a border, the flag art inside, and a hotkey caption.
///
/// The card deliberately does *not* show the country name -- that would rather give the game away. The label is only
/// used as a placeholder when there's no art to show for it.
pub struct Card<'a> {
    screen: &'a mut Screen,
    at: XY,
    size: XY,
    art: Option<&'static FlagArt>,
    label: String,
    hotkey: Option<char>,
    highlight: bool,
}

impl<'a> Card<'a> {
    pub fn new(screen: &'a mut Screen, at: XY, size: XY) -> Self {
        Self {
            screen,
            at,
            size,
            art: None,
            label: String::new(),
            hotkey: None,
            highlight: false,
        }
    }

    crate::util::setters! {
        art(art: Option<&'static FlagArt>) => art = art,
        label(label: &str) => label = label.into(),
        hotkey(ch: char) => hotkey = Some(ch),
        highlight(on: bool) => highlight = on,
    }
}

impl<'a> Drop for Card<'a> {
    fn drop(&mut self) {
        let XY(x0, y0) = self.at;
        let XY(w, h) = self.size;
        let screen_size = self.screen.size();
        // interior needs at least one flag cell plus the caption row
        if w < 4 || h < 4 || x0 + w > screen_size.x() || y0 + h > screen_size.y() {
            return;
        }

        let frame = if self.highlight {
            Color::BrightWhite
        } else {
            Color::White
        };
        let edge = |ch: char| Cell::of(ch).fg(frame);

        // border
        self.screen[y0][x0] = edge('┌');
        self.screen[y0][x0 + w - 1] = edge('┐');
        self.screen[y0 + h - 1][x0] = edge('└');
        self.screen[y0 + h - 1][x0 + w - 1] = edge('┘');
        for x in x0 + 1..x0 + w - 1 {
            self.screen[y0][x] = edge('─');
            self.screen[y0 + h - 1][x] = edge('─');
        }
        for y in y0 + 1..y0 + h - 1 {
            self.screen[y][x0] = edge('│');
            self.screen[y][x0 + w - 1] = edge('│');
        }

        // the flag itself, filling everything between border and caption
        let flag_size = XY(w - 2, h - 3);
        for fy in 0..flag_size.y() {
            for fx in 0..flag_size.x() {
                let cell = match self.art {
                    Some(art) => art.cell(XY(fx, fy), flag_size),
                    // no art for this label: a placeholder the player can still tap
                    None => Cell::of('░').fg(Color::BrightBlack),
                };
                self.screen[y0 + 1 + fy][x0 + 1 + fx] = cell;
            }
        }
        if self.art.is_none() {
            let mut label: String = self.label.chars().take(flag_size.x()).collect();
            if label.is_empty() {
                label = "?".into();
            }
            let lx = x0 + 1 + (flag_size.x() - label.chars().count()) / 2;
            let ly = y0 + 1 + flag_size.y() / 2;
            self.screen.write(XY(lx, ly), vec![crate::text1!["{}"(label)]]);
        }

        // caption row, centered inside the bottom of the border
        if let Some(ch) = self.hotkey {
            let caption = format!("[{}]", ch);
            let cx = x0 + (w - caption.len()) / 2;
            let mut text = crate::text1!["{}"(caption)];
            if self.highlight {
                text = text.bold().bright_white();
            }
            self.screen.write(XY(cx, y0 + h - 2), vec![text]);
        }
    }
}

#[cfg(test)]
mod card_test {
    use super::*;
    use crate::flags;
    use crate::io::clifmt::Formatted;

    fn row_text(screen: &Screen, y: usize) -> String {
        screen[y].iter().map(|c| c.ch).collect::<String>().trim_end().to_owned()
    }

    #[test]
    fn draws_a_border_and_caption() {
        let mut screen = Screen::new(XY(20, 10));
        screen
            .card(XY(2, 1), XY(10, 7))
            .art(flags::flag("France"))
            .hotkey('1');
        assert_eq!(row_text(&screen, 1), "  ┌────────┐");
        assert_eq!(row_text(&screen, 7), "  └────────┘");
        assert!(row_text(&screen, 6).contains("[1]"));
    }

    #[test]
    fn flag_cells_get_painted() {
        let mut screen = Screen::new(XY(20, 10));
        screen.card(XY(0, 0), XY(14, 7)).art(flags::flag("France"));
        // France is blue-white-red left to right; sample just inside each border
        assert_eq!(screen[2][1].get_fmt().bg, Color::Blue);
        assert_eq!(screen[2][12].get_fmt().bg, Color::Red);
    }

    #[test]
    fn missing_art_shows_the_label() {
        let mut screen = Screen::new(XY(24, 10));
        screen.card(XY(0, 0), XY(16, 7)).label("Atlantis");
        let mid: String = (0..10).map(|y| row_text(&screen, y)).collect();
        assert!(mid.contains("Atlantis"));
    }

    #[test]
    fn too_small_or_offscreen_is_skipped() {
        let mut screen = Screen::new(XY(8, 4));
        screen.card(XY(0, 0), XY(2, 2)).hotkey('1');
        screen.card(XY(6, 2), XY(10, 10)).hotkey('2');
        for y in 0..4 {
            assert_eq!(row_text(&screen, y), "");
        }
    }
}
