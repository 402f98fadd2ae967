use crate::io::{
    clifmt::Text,
    screen::Screen,
    XY,
};

fn breakable(ch: char) -> bool {
    ch.is_whitespace()
}

/// A block of formatted text which word-wraps to a width and can be centered within it.
///
/// Meant to be generated on the fly, every frame. The actual writing happens when it's dropped, or when
/// [`Self::render`] is called for the line count.
pub struct Textbox<'a> {
    screen: Option<&'a mut Screen>,
    chunks: Vec<Text>,
    pos: XY,
    width: Option<usize>,
    centered: bool,
}

impl<'a> Textbox<'a> {
    pub fn new(screen: &'a mut Screen, text: Vec<Text>) -> Self {
        Self {
            screen: Some(screen),
            chunks: text,
            pos: XY(0, 0),
            width: None,
            centered: false,
        }
    }

    crate::util::setters! {
        pos(x: usize, y: usize) => pos = XY(x, y),
        width(w: usize) => width = Some(w),
        centered() => centered = true,
    }

    /// Write the text to the screen, returning how many lines it took up.
    pub fn render(mut self) -> usize {
        let screen = match self.screen.take() {
            Some(s) => s,
            None => return 0,
        };

        let XY(x, y) = self.pos;
        let screen_size = screen.size();
        if x >= screen_size.x() || y >= screen_size.y() {
            return 0;
        }
        let width = self.width.unwrap_or(screen_size.x() - x).min(screen_size.x() - x);
        if width == 0 {
            return 0;
        }

        // split the chunks into paragraphs on explicit newlines
        let mut paragraphs = vec![];
        let mut cur_para = vec![];
        for mut chunk in std::mem::take(&mut self.chunks) {
            while let Some((line, rest)) = chunk.text.split_once('\n') {
                cur_para.push(chunk.with_text(line.into()));
                paragraphs.push(cur_para);
                cur_para = vec![];
                chunk.text = rest.into();
            }
            if !chunk.text.is_empty() {
                cur_para.push(chunk);
            }
        }
        paragraphs.push(cur_para);

        // greedily wrap each paragraph to the width
        let mut lines: Vec<Vec<Text>> = vec![];
        for para in paragraphs {
            let mut line: Vec<Text> = vec![];
            let mut used = 0;
            for mut chunk in para {
                while used + chunk.width() > width {
                    let space_left = width - used;
                    // byte index of the first char that doesn't fit
                    let split_at = chunk
                        .text
                        .char_indices()
                        .nth(space_left)
                        .map(|(idx, _)| idx)
                        .unwrap_or(chunk.text.len());
                    // take as much as fits, preferring to cut at whitespace
                    let cut = match chunk.text[..split_at].rfind(breakable) {
                        Some(idx) => idx,
                        // no room to break; push what we have and retry on a fresh line
                        None if used > 0 => {
                            lines.push(std::mem::take(&mut line));
                            used = 0;
                            continue;
                        }
                        // a word longer than the whole width gets chopped mid-word
                        None => split_at,
                    };
                    let head = chunk.text[..cut].trim_end().to_owned();
                    let tail = chunk.text[cut..].trim_start().to_owned();
                    if !head.is_empty() {
                        line.push(chunk.with_text(head));
                    }
                    lines.push(std::mem::take(&mut line));
                    used = 0;
                    chunk.text = tail;
                }
                if !chunk.text.is_empty() {
                    used += chunk.width();
                    line.push(chunk);
                }
            }
            lines.push(line);
        }

        let mut written = 0;
        for (i, line) in lines.into_iter().enumerate() {
            if y + i >= screen_size.y() {
                break;
            }
            let line_w: usize = line.iter().map(Text::width).sum();
            let lx = if self.centered {
                x + (width - line_w.min(width)) / 2
            } else {
                x
            };
            screen.write(XY(lx, y + i), line);
            written += 1;
        }
        written
    }
}

impl<'a> Drop for Textbox<'a> {
    fn drop(&mut self) {
        // the dummy has no screen, so its own render (and drop) is a no-op
        if self.screen.is_none() {
            return;
        }
        let dummy = Textbox {
            screen: None,
            chunks: vec![],
            pos: XY(0, 0),
            width: None,
            centered: false,
        };
        let me = std::mem::replace(self, dummy);
        let _ = me.render();
    }
}
