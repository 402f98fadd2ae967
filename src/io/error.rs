//! The one error type the io backends share.

use std::borrow::Cow;

#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// An `io::Error` occurred, e.g. while writing to the terminal.
    Io(std::io::Error),
    /// Just directly contains an error message.
    Bare(Cow<'static, str>),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<&'static str> for Error {
    fn from(value: &'static str) -> Self {
        Self::Bare(Cow::Borrowed(value))
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Bare(Cow::Owned(value))
    }
}

pub type Result<T> = core::result::Result<T, Error>;
