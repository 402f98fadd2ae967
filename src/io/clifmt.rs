//! The CLI formatting system shared by the widgets and the backends:
//!
//! - [`Format`], the common ANSI-ish formatting options
//! - [`Text`] and [`Cell`], which apply a `Format` to a string and a `char` respectively
//! - [`text!`](crate::text!), [`text1!`](crate::text1!) and [`cell!`](crate::cell!), which build them tersely

/// The color of a piece of formatted text. Meant to be used through `Text` / `text!`. The numeric values are the ANSI
/// color codes for each color; that's also where the actual colors are from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    Default = 9,
    BrightBlack = 60,
    BrightRed = 61,
    BrightGreen = 62,
    BrightYellow = 63,
    BrightBlue = 64,
    BrightMagenta = 65,
    BrightCyan = 66,
    BrightWhite = 67,
}

impl Default for Color {
    fn default() -> Self {
        Self::Default
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Format {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub underline: bool,
}

impl Format {
    pub const NONE: Self = Format {
        fg: Color::Default,
        bg: Color::Default,
        bold: false,
        underline: false,
    };
}

macro_rules! fmt_fn {
    ( $(
        $name:ident
        $(( $( $arg:ident: $type:ty ),* $(,)? ))?
        =>
        $field:ident = $val:expr
    ),* $(,)? ) => { $(
        #[must_use]
        fn $name(mut self $($(, $arg: $type )*)? ) -> Self {
            self.get_fmt_mut().$field = $val;
            self
        }
    )* };
}

pub trait Formatted {
    fn get_fmt(&self) -> &Format;
    fn get_fmt_mut(&mut self) -> &mut Format;
}

pub trait FormattedExt: Formatted + Sized {
    #[must_use]
    fn fmt_of(mut self, rhs: &dyn Formatted) -> Self {
        *self.get_fmt_mut() = rhs.get_fmt().clone();
        self
    }
    fmt_fn! {
        fg(c: Color) => fg = c,                     bg(c: Color) => bg = c,
        black => fg = Color::Black,                 on_black => bg = Color::Black,
        red => fg = Color::Red,                     on_red => bg = Color::Red,
        green => fg = Color::Green,                 on_green => bg = Color::Green,
        yellow => fg = Color::Yellow,               on_yellow => bg = Color::Yellow,
        blue => fg = Color::Blue,                   on_blue => bg = Color::Blue,
        cyan => fg = Color::Cyan,                   on_cyan => bg = Color::Cyan,
        white => fg = Color::White,                 on_white => bg = Color::White,
        bright_white => fg = Color::BrightWhite,    on_bright_white => bg = Color::BrightWhite,
        default => fg = Color::Default,             on_default => bg = Color::Default,
        underline => underline = true,
        bold => bold = true,
    }
}

impl<F: Formatted> FormattedExt for F {}

macro_rules! fmt_type {
    (
        $( #[$($attr:meta),* $(,)?] )*
        $svis:vis struct $name:ident { $( $fvis:vis $field:ident: $type:ty ),* $(,)? }
    ) => {
        $( #[$($attr),*] )*
        $svis struct $name {
            $( $fvis $field: $type, )*
            _fmt: $crate::io::clifmt::Format,
        }
        impl $crate::io::clifmt::Formatted for $name {
            fn get_fmt(&self) -> &$crate::io::clifmt::Format {
                &self._fmt
            }
            fn get_fmt_mut(&mut self) -> &mut $crate::io::clifmt::Format {
                &mut self._fmt
            }
        }
        impl $name {
            pub const fn of( $($field: $type),* ) -> Self {
                Self {
                    $( $field, )*
                    _fmt: $crate::io::clifmt::Format::NONE,
                }
            }
        }
    };
}

fmt_type!(
    /// A single run of formatted text. The API is designed to be used through `text!`; to discourage direct use, the
    /// internals aren't documented.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Text {
        pub text: String,
    }
);

impl Text {
    pub fn plain(s: &str) -> Text {
        Text::of(s.into())
    }

    pub(super) fn with_text(&self, new_text: String) -> Text {
        let mut res = self.clone();
        res.text = new_text;
        res
    }

    /// On-screen width, in cells.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

#[macro_export]
macro_rules! text1 {
    (
        $( $name:ident )*
        $text:literal
        $( ( $( $arg:expr ),* $(,)? ) )?
    ) => {
        $crate::io::clifmt::Text::of(
            format!( $text $(, $( $arg ),* )? )
        ) $( . $name () )*
    };
}

#[macro_export]
macro_rules! text {
    ( $(
        $( $name:ident )*
        $text:literal
        $( ( $( $arg:expr ),* $(,)? ) )?
    ),+ $(,)? ) => {
        {
            #[allow(unused_imports)]
            use $crate::io::clifmt::FormattedExt as _;
            vec![
                $(
                    $crate::io::clifmt::Text::of(
                        format!( $text $(, $( $arg ),* )? )
                    ) $( . $name () )*
                ),+
            ]
        }
    };
}

fmt_type! {
    /// A single character that's been formatted. This is really only meant to be used in `Screen`.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Cell { pub ch: char }
}

#[macro_export]
macro_rules! cell {
    ( $( $name:ident )* $( $char:literal )? ) => {
        {
            #[allow(unused_imports)]
            use $crate::io::clifmt::FormattedExt as _;
            $crate::io::clifmt::Cell::of($($char)?) $( .$name() )*
        }
    };
}

impl Cell {
    pub const BLANK: Cell = Cell::of(' ');
}
