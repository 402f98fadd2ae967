//! The do-nothing backend: swallows draws, produces no input. Exists so the rest of the game can be benchmarked or
//! smoke-tested without a terminal.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Barrier,
    },
    time::Duration,
};

use crate::io::{input::Action, screen::Screen, Result, XY};

use super::{IoRunner, IoSystem};

pub struct NopSystem(NopRunner);

impl NopSystem {
    pub fn new() -> Result<(Self, NopRunner)> {
        let run = NopRunner::new();
        Ok((Self(run.clone()), run))
    }
}

impl IoSystem for NopSystem {
    fn draw(&mut self, _screen: &Screen) -> Result<()> {
        Ok(())
    }
    fn size(&self) -> XY {
        XY(80, 24)
    }
    fn input(&mut self) -> Result<Action> {
        // there will never be input; block the game loop until the process dies
        loop {
            std::thread::sleep(Duration::from_secs(u64::MAX));
        }
    }
    fn poll_input(&mut self) -> Result<Option<Action>> {
        Ok(None)
    }
    fn input_until(&mut self, time: Duration) -> Result<Option<Action>> {
        std::thread::sleep(time);
        Ok(None)
    }
    fn stop(&mut self) {
        self.0.stop()
    }
}

/// An [`IoRunner`] that does nothing but wait for `stop` to be called.
#[derive(Clone)]
pub struct NopRunner(Arc<AtomicBool>, Arc<Barrier>);

impl NopRunner {
    pub fn new() -> Self {
        Self(Arc::new(false.into()), Arc::new(Barrier::new(2)))
    }

    /// Tell the [`NopRunner`] to stop.
    pub fn stop(&mut self) {
        self.0.store(true, Ordering::Release);
        self.1.wait();
    }
}

impl IoRunner for NopRunner {
    fn step(&mut self) -> bool {
        if self.0.load(Ordering::Acquire) {
            // make sure `stop` gets to return
            self.1.wait();
            true
        } else {
            false
        }
    }

    fn run(&mut self) {
        // no need to constantly poll; just meet `stop` at the barrier
        while !self.0.load(Ordering::Acquire) {
            self.1.wait();
        }
    }
}
