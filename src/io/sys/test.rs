//! A scripted backend for exercising the game loop without a terminal.
//!
//! Feed it a list of [`Action`]s; it hands them out one per poll, then reports `None` once (so the loop gets a
//! render in), then reports [`Action::Closed`] forever so the loop actually exits.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use crate::io::{input::Action, screen::Screen, Result, XY};

use super::IoSystem;

const SIZE: XY = XY(80, 24);

#[derive(Default)]
struct Inner {
    actions: VecDeque<Action>,
    drained: bool,
    draws: usize,
    last_frame: Vec<String>,
}

/// The test's view of what the [`ScriptedIo`] saw and drew.
#[derive(Clone)]
pub struct ScriptedHandle(Arc<Mutex<Inner>>);

impl ScriptedHandle {
    /// How many frames were drawn.
    pub fn draws(&self) -> usize {
        self.0.lock().unwrap().draws
    }

    /// The text of the most recently drawn frame, row by row.
    pub fn last_frame(&self) -> Vec<String> {
        self.0.lock().unwrap().last_frame.clone()
    }
}

pub struct ScriptedIo {
    inner: Arc<Mutex<Inner>>,
}

impl ScriptedIo {
    pub fn of(actions: &[Action]) -> (Self, ScriptedHandle) {
        let inner = Arc::new(Mutex::new(Inner {
            actions: actions.iter().cloned().collect(),
            ..Default::default()
        }));
        (
            Self {
                inner: inner.clone(),
            },
            ScriptedHandle(inner),
        )
    }

    fn next(&mut self) -> Option<Action> {
        let mut inner = self.inner.lock().unwrap();
        match inner.actions.pop_front() {
            Some(action) => Some(action),
            None if !inner.drained => {
                inner.drained = true;
                None
            }
            None => Some(Action::Closed),
        }
    }
}

impl IoSystem for ScriptedIo {
    fn draw(&mut self, screen: &Screen) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.draws += 1;
        inner.last_frame = screen
            .rows()
            .iter()
            .map(|row| row.iter().map(|c| c.ch).collect())
            .collect();
        Ok(())
    }

    fn size(&self) -> XY {
        SIZE
    }

    fn input(&mut self) -> Result<Action> {
        Ok(self.next().unwrap_or(Action::Closed))
    }

    fn poll_input(&mut self) -> Result<Option<Action>> {
        Ok(self.next())
    }

    fn input_until(&mut self, _time: Duration) -> Result<Option<Action>> {
        Ok(self.next())
    }

    fn stop(&mut self) {}
}
