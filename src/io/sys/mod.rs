//! The input/output backends, one per `sys_*` feature, and the traits they implement.

#[cfg(feature = "__sys")]
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::io::{input::Action, screen::Screen, Result, XY};

#[cfg(feature = "sys_cli")]
pub mod ansi_cli;
#[cfg(feature = "sys_nop")]
pub mod nop;
#[cfg(test)]
pub mod test;

/// An input/output system.
///
/// The output is called a "display" to distinguish it from the [`Screen`].
///
/// This object is meant to be associated with an [`IoRunner`], which runs on the main thread while this is called
/// from the game loop.
pub trait IoSystem: Send {
    /// Actually render a [`Screen`] to the display.
    fn draw(&mut self, screen: &Screen) -> Result<()>;
    /// Get the size of the display, in characters.
    fn size(&self) -> XY;

    /// Wait for the next user input.
    fn input(&mut self) -> Result<Action>;
    /// If the next user input is available, return it.
    fn poll_input(&mut self) -> Result<Option<Action>>;
    /// Wait for the next user input, up to a timeout.
    fn input_until(&mut self, time: Duration) -> Result<Option<Action>> {
        let end = Instant::now() + time;
        loop {
            if let Some(input) = self.poll_input()? {
                return Ok(Some(input));
            }
            if Instant::now() >= end {
                return Ok(None);
            }
            std::thread::sleep(Duration::from_millis(2));
        }
    }

    /// Tells the associated [`IoRunner`] to stop and return control of the main thread, and tells the [`IoSystem`] to
    /// dispose of any resources it's handling.
    ///
    /// This will always be the last method called on this object (unless you count `Drop::drop`), so feel free to
    /// panic in the others if they're called after this one, especially `draw`.
    fn stop(&mut self);
}

impl IoSystem for Box<dyn IoSystem> {
    fn draw(&mut self, screen: &Screen) -> Result<()> {
        (**self).draw(screen)
    }
    fn size(&self) -> XY {
        (**self).size()
    }
    fn input(&mut self) -> Result<Action> {
        (**self).input()
    }
    fn poll_input(&mut self) -> Result<Option<Action>> {
        (**self).poll_input()
    }
    fn input_until(&mut self, time: Duration) -> Result<Option<Action>> {
        (**self).input_until(time)
    }
    fn stop(&mut self) {
        (**self).stop()
    }
}

/// The other half of an [`IoSystem`].
///
/// This type exists so that things which need to run on the main thread specifically, can.
pub trait IoRunner {
    /// Execute one 'step', whatever that means for this backend. Returns whether an exit has been requested (i.e. by
    /// [`IoSystem::stop`]) since the last call.
    #[must_use]
    fn step(&mut self) -> bool;

    /// Run until the paired [`IoSystem`] says to [stop][IoSystem::stop].
    ///
    /// Will always be called on the main thread.
    fn run(&mut self) {
        while !self.step() {}
    }
}

/// Based on the `sys_*` features enabled, attempt to initialize an IO system; in order:
///
/// - crossterm CLI (`sys_cli`)
/// - no-op (`sys_nop`), for benchmarking the rest of the game
///
/// The Err type is a map from the name of the backend to the error that stopped it loading.
#[cfg(feature = "__sys")]
pub fn load() -> core::result::Result<
    (Box<dyn IoSystem>, Box<dyn IoRunner>),
    HashMap<&'static str, crate::io::Error>,
> {
    #[allow(unused_mut)]
    let mut errors = HashMap::new();
    #[allow(unused_macros)]
    macro_rules! try_init {
        ( $name:ident: $( $init:tt )* ) => {
            let res = {
                $($init)*
            };
            match res {
                Ok((iosys, run)) => return Ok((Box::new(iosys), Box::new(run))),
                Err(e) => errors.insert(stringify!($name), e),
            };
        }
    }
    #[cfg(feature = "sys_cli")]
    {
        try_init! { ansi_cli: ansi_cli::CtSystem::new() }
    }
    #[cfg(feature = "sys_nop")]
    {
        try_init! { nop: nop::NopSystem::new() }
    }
    Err(errors)
}
