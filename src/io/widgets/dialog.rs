use crate::io::{
    clifmt::{Cell, Color, FormattedExt, Text},
    screen::Screen,
    XY,
};

/// A modal dialog, centered over whatever has already been drawn.
///
/// Blanks its whole rectangle first so the cards underneath don't bleed through, which is what makes it read as
/// modal.
pub struct Dialog<'a> {
    screen: &'a mut Screen,
    title: Vec<Text>,
    lines: Vec<Vec<Text>>,
}

impl<'a> Dialog<'a> {
    pub fn new(screen: &'a mut Screen, title: Vec<Text>) -> Self {
        Self {
            screen,
            title,
            lines: vec![],
        }
    }

    /// Add a body line under the title.
    pub fn line(mut self, line: Vec<Text>) -> Self {
        self.lines.push(line);
        self
    }
}

fn line_width(line: &[Text]) -> usize {
    line.iter().map(Text::width).sum()
}

impl<'a> Drop for Dialog<'a> {
    fn drop(&mut self) {
        let screen_size = self.screen.size();
        let content = line_width(&self.title)
            .max(self.lines.iter().map(|l| line_width(l)).max().unwrap_or(0))
            .max(16);
        // border, plus one cell of breathing room each side
        let w = content + 4;
        let h = self.lines.len() + 4;
        if w > screen_size.x() || h > screen_size.y() {
            return;
        }
        let x0 = (screen_size.x() - w) / 2;
        let y0 = (screen_size.y() - h) / 2;

        let edge = |ch: char| Cell::of(ch).bright_white().on_black();
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                self.screen[y][x] = Cell::of(' ').on_black();
            }
        }
        self.screen[y0][x0] = edge('╔');
        self.screen[y0][x0 + w - 1] = edge('╗');
        self.screen[y0 + h - 1][x0] = edge('╚');
        self.screen[y0 + h - 1][x0 + w - 1] = edge('╝');
        for x in x0 + 1..x0 + w - 1 {
            self.screen[y0][x] = edge('═');
            self.screen[y0 + h - 1][x] = edge('═');
        }
        for y in y0 + 1..y0 + h - 1 {
            self.screen[y][x0] = edge('║');
            self.screen[y][x0 + w - 1] = edge('║');
        }

        let centered_x = |line: &[Text]| x0 + 2 + (content - line_width(line).min(content)) / 2;
        let title = std::mem::take(&mut self.title);
        self.screen.write(XY(centered_x(&title), y0 + 1), title);
        for (i, line) in std::mem::take(&mut self.lines).into_iter().enumerate() {
            self.screen.write(XY(centered_x(&line), y0 + 3 + i), line);
        }
    }
}

#[cfg(test)]
mod dialog_test {
    use super::*;
    use crate::text;

    fn row_text(screen: &Screen, y: usize) -> String {
        screen[y].iter().map(|c| c.ch).collect::<String>().trim_end().to_owned()
    }

    #[test]
    fn centers_and_frames() {
        let mut screen = Screen::new(XY(40, 12));
        screen
            .dialog(text![bold "WRONG!"])
            .line(text!["your score is 0/1"])
            .line(text!["[enter] continue"]);
        // h = 2 lines + 4 = 6, so the box spans rows 3..=8 on a 12-row screen
        assert!(row_text(&screen, 3).contains('╔'));
        assert!(row_text(&screen, 4).contains("WRONG!"));
        assert!(row_text(&screen, 6).contains("your score is 0/1"));
        assert!(row_text(&screen, 7).contains("[enter] continue"));
        assert!(row_text(&screen, 8).contains('╚'));
    }

    #[test]
    fn masks_what_is_underneath() {
        let mut screen = Screen::new(XY(40, 12));
        screen.textbox(text!["{}"("#".repeat(40))]).pos(0, 5);
        screen.dialog(text!["hi"]);
        let mid = row_text(&screen, 5);
        // the middle of the row is inside the dialog, so the #s there are gone
        assert!(mid.starts_with('#'));
        assert!(
            mid.chars().skip(10).take(20).all(|ch| ch != '#'),
            "got {:?}",
            mid
        );
    }

    #[test]
    fn too_small_is_skipped() {
        let mut screen = Screen::new(XY(10, 3));
        screen.dialog(text!["much too wide for this screen"]);
        assert_eq!(row_text(&screen, 1), "");
    }
}
