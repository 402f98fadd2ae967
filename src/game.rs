//! The "main loop" bits: feeding input to a [`Game`] and drawing what it renders.

use crate::{
    io::{
        input::Action,
        screen::Screen,
        sys::{self, IoSystem},
    },
    timing::Timer,
};

/// Lets a [`Game`] tell the main loop what to do after handling something.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Response {
    /// Nothing in particular needs to be done.
    Nothing,
    /// The visual state has updated, and the screen needs to be redrawn.
    Redraw,
    /// The game should be exited, e.g. because the player pressed `q`.
    Quit,
}

/// Something the main loop can run: take inputs as they come, render on demand.
///
/// The idea is the usual one:
///
/// - When there's relevant user input, update state for rendering.
/// - Come time to render, all the info is already there from previous inputs.
///
/// Heavy work doesn't belong in either method; neither of these games has any.
pub trait Game: Send {
    /// The player has done some input; update accordingly.
    fn input(&mut self, input: Action) -> Response;

    /// Render the game onto the provided `Screen`. The screen is already sized and blanked.
    fn render(&mut self, onto: &mut Screen);
}

/// Handles starting up and running a [`Game`].
#[must_use]
pub struct Runner<G: Game> {
    game: G,
}

impl<G: Game> Runner<G> {
    /// Prepare a game to be run.
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Run the game on the given backend until it quits, then hand the game back (mostly so tests can inspect it).
    ///
    /// Renders a first frame before reading any input, then alternates between draining input and redrawing, capped
    /// at roughly sixty frames a second.
    pub fn run_on(mut self, mut iosys: impl IoSystem) -> G {
        let mut screen = Screen::new(iosys.size());
        let mut tainted = true;
        let mut frame = Timer::new(1.0 / 60.0);
        loop {
            let size = iosys.size();
            if tainted || size != screen.size() {
                screen.resize(size);
                self.game.render(&mut screen);
                iosys.draw(&screen).expect("failed to draw frame");
                tainted = false;
            }
            frame.tick();
            while let Ok(Some(action)) = iosys.input_until(frame.remaining()) {
                match action {
                    Action::Closed => {
                        iosys.stop();
                        return self.game;
                    }
                    Action::Redraw => tainted = true,
                    other => match self.game.input(other) {
                        Response::Nothing => (),
                        Response::Redraw => tainted = true,
                        Response::Quit => {
                            iosys.stop();
                            return self.game;
                        }
                    },
                }
            }
        }
    }

    /// Load the best available backend and run the game on it.
    ///
    /// This **must** be called on the main thread, ideally straight from `main`: the [`IoRunner`][sys::IoRunner]
    /// monopolizes it, and the game loop gets a thread of its own.
    ///
    /// Only returns once [`Game::input`] asks to quit or the backend reports the terminal closed.
    #[cfg(feature = "__sys")]
    pub fn run(self) -> G
    where
        G: 'static,
    {
        let (iosys, mut iorun) = match sys::load() {
            Ok(pair) => pair,
            Err(errors) => panic!("no io backend would load: {:?}", errors),
        };
        let thread = std::thread::spawn(move || self.run_on(iosys));
        iorun.run();
        // the runner owns the terminal state; drop it before joining so a game loop stuck flushing can finish
        drop(iorun);
        thread.join().unwrap()
    }
}

#[cfg(test)]
mod runner_test {
    use super::*;
    use crate::io::input::{Key, MouseButton};
    use crate::io::sys::test::ScriptedIo;
    use crate::io::XY;

    /// Counts what it's fed; quits on 'q'.
    #[derive(Default)]
    struct Tally {
        inputs: Vec<Action>,
        renders: usize,
    }

    impl Game for Tally {
        fn input(&mut self, input: Action) -> Response {
            self.inputs.push(input.clone());
            match input {
                Action::KeyPress {
                    key: Key::Char('q'),
                } => Response::Quit,
                _ => Response::Redraw,
            }
        }

        fn render(&mut self, _onto: &mut Screen) {
            self.renders += 1;
        }
    }

    const fn press(ch: char) -> Action {
        Action::KeyPress { key: Key::Char(ch) }
    }

    #[test]
    fn quits_when_the_game_says_so() {
        let (iosys, handle) = ScriptedIo::of(&[press('x'), press('q'), press('z')]);
        let tally = Runner::new(Tally::default()).run_on(iosys);
        // 'z' comes after the quit, so it's never seen
        assert_eq!(tally.inputs, vec![press('x'), press('q')]);
        assert_eq!(handle.draws(), 1);
    }

    #[test]
    fn quits_when_the_backend_closes() {
        let (iosys, _handle) = ScriptedIo::of(&[]);
        let tally = Runner::new(Tally::default()).run_on(iosys);
        assert!(tally.inputs.is_empty());
    }

    #[test]
    fn renders_the_first_frame_before_any_input() {
        let (iosys, handle) = ScriptedIo::of(&[press('q')]);
        let tally = Runner::new(Tally::default()).run_on(iosys);
        assert_eq!(tally.renders, 1);
        assert_eq!(handle.draws(), 1);
    }

    #[test]
    fn redraws_after_a_batch_of_input() {
        let (iosys, handle) = ScriptedIo::of(&[
            press('a'),
            Action::MouseMove { pos: XY(3, 3) },
            Action::MousePress {
                pos: XY(3, 3),
                button: MouseButton::Left,
            },
        ]);
        let tally = Runner::new(Tally::default()).run_on(iosys);
        assert_eq!(tally.inputs.len(), 3);
        // one frame up front, one after the batch, then the backend closes
        assert_eq!(handle.draws(), 2);
        assert_eq!(tally.renders, 2);
    }

    #[test]
    fn backend_redraw_requests_taint_the_screen() {
        let (iosys, handle) = ScriptedIo::of(&[Action::Redraw]);
        let _ = Runner::new(Tally::default()).run_on(iosys);
        assert_eq!(handle.draws(), 2);
    }
}
