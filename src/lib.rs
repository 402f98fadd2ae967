#![cfg_attr(coverage, feature(no_coverage))]

//! flagtap is a one-screen terminal game: you're named a country, you click its flag.
//!
//! The pieces, roughly in order of interest:
//!
//! - [`quiz`] owns the actual game: shuffling the roster, picking the answer, judging taps.
//! - [`app`] is the screen, translating terminal input into [`quiz`] calls and rendering the state back out.
//! - [`game`] is the main loop, and [`io`] the character-grid plumbing underneath it: formatted cells, widgets, and
//!   the feature-selected terminal backends.
//!
//! Backends are picked with Cargo features, exactly one of which you probably want: `sys_cli` (the default) renders
//! to a real terminal with `crossterm`; `sys_nop` swallows everything, for benchmarks and smoke tests.

pub mod app;
pub mod flags;
pub mod game;
pub mod io;
pub mod quiz;
mod timing;
mod util;
