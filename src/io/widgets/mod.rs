//! Output-only widgets for the quiz chrome.
//!
//! These are all built from a [`Screen`][super::screen::Screen] method, configured with chained setters, and do the
//! actual writing when they're dropped (or when `render` is called explicitly, for the ones that report something
//! back).

mod card;
pub use card::*;

mod dialog;
pub use dialog::*;

mod header;
pub use header::*;

mod textbox;
pub use textbox::*;
