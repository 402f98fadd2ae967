//! The one screen of the game: the prompt, the three flag cards, and the result dialog.
//!
//! All the rules live in [`quiz`][crate::quiz]; this module just translates clicks and hotkeys into calls on the
//! [`Quiz`] and draws what it reads back out.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    flags,
    game::{Game, Response},
    io::{
        clifmt::{Color, FormattedExt},
        input::{Action, Key, MouseButton},
        screen::Screen,
        XY,
    },
    quiz::{Quiz, Verdict, CHOICES},
    text, text1,
};

/// Smallest terminal the cards can be laid out in.
const MIN_SIZE: XY = XY(46, 16);
/// Horizontal gap between cards.
const GAP: usize = 3;
/// Cards stop growing past this width, or the flags start looking like bedsheets.
const MAX_CARD_W: usize = 24;
/// Row the cards start on; everything above is the header and the prompt.
const CARDS_TOP: usize = 6;

/// Where the three cards sit on a screen of this size, as (corner, size), or `None` if it's too cramped to play.
fn card_rects(size: XY) -> Option<[(XY, XY); CHOICES]> {
    if size.x() < MIN_SIZE.x() || size.y() < MIN_SIZE.y() {
        return None;
    }
    let card_w = ((size.x() - 2 * GAP - 2) / CHOICES).min(MAX_CARD_W);
    let flag_h = (card_w / 4).max(3).min(size.y() - CARDS_TOP - 5);
    let card_h = flag_h + 3;
    let total_w = CHOICES * card_w + (CHOICES - 1) * GAP;
    let x0 = (size.x() - total_w) / 2;
    let mut rects = [(XY(0, 0), XY(card_w, card_h)); CHOICES];
    for (i, rect) in rects.iter_mut().enumerate() {
        rect.0 = XY(x0 + i * (card_w + GAP), CARDS_TOP);
    }
    Some(rects)
}

/// Which card, if any, the position lands in.
fn hit(pos: XY, rects: &[(XY, XY); CHOICES]) -> Option<usize> {
    rects.iter().position(|(at, size)| {
        pos.x() >= at.x()
            && pos.x() < at.x() + size.x()
            && pos.y() >= at.y()
            && pos.y() < at.y() + size.y()
    })
}

/// The quiz screen. Implements [`Game`], so [`Runner`][crate::game::Runner] can drive it.
pub struct QuizApp<R = SmallRng> {
    quiz: Quiz<R>,
    /// Which card the mouse is over, for the highlight.
    hover: Option<usize>,
    /// The card layout as of the last render; clicks before the first frame land nowhere.
    rects: Option<[(XY, XY); CHOICES]>,
}

impl QuizApp<SmallRng> {
    /// The standard game: the shipped roster, shuffled from entropy.
    pub fn new() -> Self {
        Self::with_quiz(Quiz::new(flags::COUNTRIES))
    }

    /// A reproducible game, for `--seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_quiz(Quiz::from_seed(flags::COUNTRIES, seed))
    }
}

impl Default for QuizApp<SmallRng> {
    #[cfg_attr(coverage, no_coverage)]
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuizApp<R> {
    /// Wrap an existing quiz, e.g. one with a scripted RNG or a different roster.
    pub fn with_quiz(quiz: Quiz<R>) -> Self {
        Self {
            quiz,
            hover: None,
            rects: None,
        }
    }

    /// A read-only look at the quiz state, for tests and anyone else curious.
    pub fn quiz(&self) -> &Quiz<R> {
        &self.quiz
    }

    fn tap(&mut self, position: usize) -> Response {
        if self.quiz.verdict().is_some() {
            return Response::Nothing;
        }
        self.quiz.tap(position);
        Response::Redraw
    }
}

impl<R: Rng + Send> Game for QuizApp<R> {
    fn input(&mut self, input: Action) -> Response {
        // quitting works no matter what else is going on
        if let Action::KeyPress { key } = &input {
            if matches!(key, Key::Escape | Key::Char('q')) {
                return Response::Quit;
            }
        }

        if self.quiz.verdict().is_some() {
            // the dialog is modal: anything that reads as "continue" starts the next round, all else is swallowed
            return match input {
                Action::KeyPress {
                    key: Key::Enter | Key::Char(' '),
                }
                | Action::MousePress {
                    button: MouseButton::Left,
                    ..
                } => {
                    self.quiz.acknowledge();
                    self.hover = None;
                    Response::Redraw
                }
                _ => Response::Nothing,
            };
        }

        match input {
            Action::KeyPress {
                key: Key::Char(ch @ '1'..='3'),
            } => self.tap(ch as usize - '1' as usize),
            Action::MousePress {
                button: MouseButton::Left,
                pos,
            } => match self.rects.as_ref().and_then(|r| hit(pos, r)) {
                Some(i) => self.tap(i),
                None => Response::Nothing,
            },
            Action::MouseMove { pos } => {
                let over = self.rects.as_ref().and_then(|r| hit(pos, r));
                if over != self.hover {
                    self.hover = over;
                    Response::Redraw
                } else {
                    Response::Nothing
                }
            }
            _ => Response::Nothing,
        }
    }

    fn render(&mut self, onto: &mut Screen) {
        let size = onto.size();
        self.rects = card_rects(size);
        let (correct, asked) = self.quiz.score();
        onto.header().title("flagtap").score(correct, asked);

        let rects = match self.rects {
            Some(rects) => rects,
            None => {
                onto.textbox(text![
                    "this terminal is too small to play in; need at least {}x{}"(
                        MIN_SIZE.x(),
                        MIN_SIZE.y()
                    )
                ])
                .pos(1, 3)
                .render();
                return;
            }
        };

        onto.textbox(text!["tap the flag of"])
            .pos(0, 3)
            .width(size.x())
            .centered();
        onto.textbox(text![bold bright_white "{}"(self.quiz.round().prompt())])
            .pos(0, 4)
            .width(size.x())
            .centered();

        for (i, (at, card_size)) in rects.iter().enumerate() {
            let label = &self.quiz.round().shown()[i];
            onto.card(*at, *card_size)
                .art(flags::flag(label))
                .label(label)
                .hotkey(char::from(b'1' + i as u8))
                .highlight(self.hover == Some(i) && self.quiz.verdict().is_none());
        }

        onto.textbox(text!["click a flag or press 1-3 · q quits"])
            .pos(0, size.y() - 1)
            .width(size.x())
            .centered();

        if let Some(verdict) = self.quiz.verdict() {
            let fg = match verdict {
                Verdict::Correct => Color::Green,
                Verdict::Wrong => Color::Red,
            };
            onto.dialog(vec![
                text1![bold "{}!"(verdict.title().to_uppercase())].fg(fg)
            ])
            .line(text!["your score is {}/{}"(correct, asked)])
            .line(text!["[enter] continue"]);
        }
    }
}

#[cfg(test)]
mod app_test {
    use super::*;
    use crate::io::sys::test::ScriptedIo;
    use crate::io::sys::IoSystem;

    const SIZE: XY = XY(80, 24);

    const ENTER: Action = Action::KeyPress { key: Key::Enter };
    const QUIT: Action = Action::KeyPress {
        key: Key::Char('q'),
    };

    fn press(ch: char) -> Action {
        Action::KeyPress { key: Key::Char(ch) }
    }

    fn click(pos: XY) -> Action {
        Action::MousePress {
            pos,
            button: MouseButton::Left,
        }
    }

    fn center(rect: (XY, XY)) -> XY {
        XY(
            rect.0.x() + rect.1.x() / 2,
            rect.0.y() + rect.1.y() / 2,
        )
    }

    /// A freshly-rendered app, so the card layout is in place like it would be in a real game.
    fn app(seed: u64) -> QuizApp {
        let mut app = QuizApp::from_seed(seed);
        app.render(&mut Screen::new(SIZE));
        app
    }

    fn row_text(screen: &Screen, y: usize) -> String {
        screen[y].iter().map(|c| c.ch).collect::<String>().trim_end().to_owned()
    }

    #[test]
    fn hotkeys_map_to_positions() {
        for offset in 0..CHOICES {
            let mut app = app(21);
            let answer = app.quiz().round().answer();
            let position = (answer + offset) % CHOICES;
            let key = char::from(b'1' + position as u8);
            assert_eq!(app.input(press(key)), Response::Redraw);
            let expected = if position == answer {
                Verdict::Correct
            } else {
                Verdict::Wrong
            };
            assert_eq!(app.quiz().verdict(), Some(expected));
        }
    }

    #[test]
    fn clicks_inside_each_card_tap_it() {
        let rects = card_rects(SIZE).unwrap();
        for (i, rect) in rects.iter().enumerate() {
            let mut app = app(22);
            let answer = app.quiz().round().answer();
            assert_eq!(app.input(click(center(*rect))), Response::Redraw);
            let expected = if i == answer {
                Verdict::Correct
            } else {
                Verdict::Wrong
            };
            assert_eq!(app.quiz().verdict(), Some(expected), "card {}", i);
        }
    }

    #[test]
    fn clicks_in_the_gutter_do_nothing() {
        let mut app = app(23);
        let rects = card_rects(SIZE).unwrap();
        let gutter = XY(rects[0].0.x() + rects[0].1.x() + 1, rects[0].0.y() + 1);
        assert_eq!(app.input(click(gutter)), Response::Nothing);
        assert_eq!(app.input(click(XY(0, 0))), Response::Nothing);
        assert_eq!(app.quiz().verdict(), None);
    }

    #[test]
    fn clicks_before_the_first_render_land_nowhere() {
        let mut app = QuizApp::from_seed(24);
        assert_eq!(app.input(click(XY(40, 10))), Response::Nothing);
        assert_eq!(app.quiz().verdict(), None);
    }

    #[test]
    fn the_dialog_is_modal() {
        let mut app = app(25);
        let answer = app.quiz().round().answer();
        app.input(press(char::from(b'1' + answer as u8)));
        assert_eq!(app.quiz().score(), (1, 1));
        // more taps bounce off the dialog
        assert_eq!(app.input(press('2')), Response::Nothing);
        assert_eq!(app.quiz().score(), (1, 1));
        // and continuing starts a fresh round
        assert_eq!(app.input(ENTER), Response::Redraw);
        assert_eq!(app.quiz().verdict(), None);
    }

    #[test]
    fn a_click_dismisses_the_dialog_too() {
        let mut app = app(26);
        app.input(press('1'));
        assert!(app.quiz().verdict().is_some());
        assert_eq!(app.input(click(XY(40, 12))), Response::Redraw);
        assert_eq!(app.quiz().verdict(), None);
    }

    #[test]
    fn quit_works_any_time() {
        let mut app = app(27);
        assert_eq!(app.input(QUIT), Response::Quit);
        app.input(press('1'));
        assert_eq!(app.input(QUIT), Response::Quit);
        assert_eq!(
            app.input(Action::KeyPress { key: Key::Escape }),
            Response::Quit
        );
    }

    #[test]
    fn hover_highlights_redraw_only_on_change() {
        let mut app = app(28);
        let rects = card_rects(SIZE).unwrap();
        let inside = center(rects[1]);
        assert_eq!(app.input(Action::MouseMove { pos: inside }), Response::Redraw);
        assert_eq!(app.input(Action::MouseMove { pos: inside }), Response::Nothing);
        let outside = XY(0, 0);
        assert_eq!(app.input(Action::MouseMove { pos: outside }), Response::Redraw);
    }

    #[test]
    fn the_prompt_names_the_answer_flag() {
        let mut app = QuizApp::from_seed(29);
        let mut screen = Screen::new(SIZE);
        app.render(&mut screen);
        let prompt = app.quiz().round().prompt().to_owned();
        assert!(row_text(&screen, 3).contains("tap the flag of"));
        assert!(row_text(&screen, 4).contains(&prompt));
    }

    #[test]
    fn the_dialog_appears_after_a_tap() {
        let mut app = app(30);
        let answer = app.quiz().round().answer();
        app.input(press(char::from(b'1' + answer as u8)));
        let mut screen = Screen::new(SIZE);
        app.render(&mut screen);
        let all: String = (0..SIZE.y()).map(|y| row_text(&screen, y) + "\n").collect();
        assert!(all.contains("CORRECT!"), "screen was:\n{}", all);
        assert!(all.contains("your score is 1/1"));
    }

    #[test]
    fn tiny_terminals_get_an_excuse_instead_of_a_panic() {
        let mut app = QuizApp::from_seed(31);
        let mut screen = Screen::new(XY(30, 8));
        app.render(&mut screen);
        let all: String = (0..8).map(|y| row_text(&screen, y) + "\n").collect();
        assert!(all.contains("too small"));
        // and the stale layout is gone, so clicks can't tap ghosts
        assert_eq!(app.input(click(XY(5, 5))), Response::Nothing);
    }

    #[test]
    fn plays_a_whole_round_through_the_runner() {
        use crate::game::Runner;

        let app = QuizApp::from_seed(32);
        let answer = app.quiz().round().answer();
        let rects = card_rects(SIZE).unwrap();
        let (iosys, handle) = ScriptedIo::of(&[
            click(center(rects[answer])),
            ENTER,
            QUIT,
        ]);
        assert_eq!(iosys.size(), SIZE);
        let app = Runner::new(app).run_on(iosys);
        assert_eq!(app.quiz().score(), (1, 1));
        assert_eq!(app.quiz().verdict(), None);
        assert!(handle.draws() >= 1);
        assert!(handle
            .last_frame()
            .iter()
            .any(|row| row.contains("tap the flag of")));
    }
}
