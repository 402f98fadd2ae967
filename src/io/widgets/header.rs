use crate::{
    cell, text, text1,
    io::{clifmt::FormattedExt, screen::Screen, XY},
};

/// The bar across the top of the game: title on the left, session score on the right, a rule underneath.
///
/// e.g.:
/// ```text
///  flagtap                                score 3/7
/// ─────────────────────────────────────────────────
/// ```
pub struct Header<'a> {
    screen: &'a mut Screen,
    title: String,
    score: Option<(u32, u32)>,
}

impl<'a> Header<'a> {
    pub fn new(screen: &'a mut Screen) -> Self {
        Self {
            screen,
            title: String::new(),
            score: None,
        }
    }

    crate::util::setters! {
        title(name: &str) => title = name.into(),
        score(correct: u32, asked: u32) => score = Some((correct, asked)),
    }
}

impl<'a> Drop for Header<'a> {
    fn drop(&mut self) {
        let size = self.screen.size();
        if size.y() < 2 {
            return;
        }
        self.screen.write(XY(1, 0), text![bold "{}"(self.title)]);
        if let Some((correct, asked)) = self.score {
            let tally = format!("score {}/{}", correct, asked);
            let x = size.x().saturating_sub(tally.len() + 1);
            self.screen.write(XY(x, 0), vec![text1![yellow "{}"(tally)]]);
        }
        for x in 0..size.x() {
            self.screen[1][x] = cell!('─');
        }
    }
}

#[cfg(test)]
mod header_test {
    use crate::io::screen::Screen;
    use crate::io::XY;

    fn row_text(screen: &Screen, y: usize) -> String {
        screen[y].iter().map(|c| c.ch).collect::<String>().trim_end().to_owned()
    }

    #[test]
    fn title_left_score_right() {
        let mut screen = Screen::new(XY(30, 4));
        screen.header().title("flagtap").score(2, 5);
        let top = row_text(&screen, 0);
        assert!(top.starts_with(" flagtap"), "got {:?}", top);
        assert!(top.ends_with("score 2/5"), "got {:?}", top);
    }

    #[test]
    fn rule_spans_the_row() {
        let mut screen = Screen::new(XY(12, 3));
        screen.header().title("x");
        assert_eq!(row_text(&screen, 1), "─".repeat(12));
    }

    #[test]
    fn tiny_screen_is_skipped() {
        let mut screen = Screen::new(XY(12, 1));
        screen.header().title("x");
        // one row only: nothing written, and especially no panic
        assert_eq!(row_text(&screen, 0), "");
    }
}
