//! The crossterm-based terminal backend: raw mode + alternate screen, mouse capture on, ANSI rendering.

use std::{
    io::Write,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{self, TryRecvError},
        Arc,
    },
    time::Duration,
};

use crossterm::{
    cursor::{Hide, MoveDown, MoveTo, MoveToColumn, Show},
    event::{self as ct, DisableMouseCapture, EnableMouseCapture},
    execute,
    style::{
        Attribute, Color as CtColor, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use crate::io::{
    clifmt::{Cell, Color, Formatted},
    input::{Action, Key, MouseButton},
    screen::Screen,
    Result, XY,
};

use super::{IoRunner, IoSystem};

fn btn4ct(ct: ct::MouseButton) -> MouseButton {
    match ct {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Middle => MouseButton::Middle,
        ct::MouseButton::Right => MouseButton::Right,
    }
}

fn key4ct(code: ct::KeyCode) -> Option<Key> {
    match code {
        ct::KeyCode::Char(c) => Some(Key::Char(c)),
        ct::KeyCode::F(n) => Some(Key::F(n as usize)),
        ct::KeyCode::Enter => Some(Key::Enter),
        ct::KeyCode::Esc => Some(Key::Escape),
        ct::KeyCode::Tab => Some(Key::Tab),
        ct::KeyCode::Backspace => Some(Key::Backspace),
        ct::KeyCode::Up => Some(Key::Up),
        ct::KeyCode::Down => Some(Key::Down),
        ct::KeyCode::Left => Some(Key::Left),
        ct::KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}

/// Pumps crossterm events into the [`CtSystem`]'s queue. Must run on the main thread, like every [`IoRunner`].
pub struct CtRunner {
    actions: mpsc::Sender<Action>,
    stop: Arc<AtomicBool>,
}

impl CtRunner {
    fn init_term() -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            std::io::stdout(),
            EnableMouseCapture,
            EnterAlternateScreen,
            DisableLineWrap,
            Hide,
            Clear(ClearType::All),
        )?;
        Ok(())
    }

    fn clean_term() -> Result<()> {
        execute!(
            std::io::stdout(),
            Clear(ClearType::All),
            Show,
            EnableLineWrap,
            LeaveAlternateScreen,
            DisableMouseCapture,
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn new(actions: mpsc::Sender<Action>, stop: Arc<AtomicBool>) -> Result<Self> {
        Self::init_term()?;
        std::panic::set_hook(Box::new(|i| {
            let _ = Self::clean_term();
            println!("{}", i);
            // set back up in preparation for drop
            #[cfg(panic = "unwind")]
            let _ = Self::init_term();
        }));
        Ok(Self { actions, stop })
    }
}

impl Drop for CtRunner {
    fn drop(&mut self) {
        let _ = Self::clean_term();
    }
}

impl IoRunner for CtRunner {
    fn step(&mut self) -> bool {
        if self.stop.load(Ordering::Relaxed) {
            return true;
        }

        macro_rules! try_send {
            ( $type:ident $( ($nt:expr) )? $( { $($br:tt)* } )? ) => {
                match self.actions.send(Action::$type $(($nt))? $({$($br)*})? ) {
                    Ok(_) => (),
                    Err(_) => return true,
                }
            }
        }
        macro_rules! mods {
            ( $mods:ident, $action:ident ) => {
                if $mods.contains(ct::KeyModifiers::SHIFT) {
                    try_send!($action { key: Key::Shift });
                }
                if $mods.contains(ct::KeyModifiers::CONTROL) {
                    try_send!($action { key: Key::Ctrl });
                }
                if $mods.contains(ct::KeyModifiers::ALT) {
                    try_send!($action { key: Key::Alt });
                }
            };
        }

        // zero timeout to avoid blocking in `step`
        match crossterm::event::poll(Duration::ZERO) {
            Ok(false) => return false,
            Ok(true) => (),
            Err(e) => {
                try_send!(Error(format!("polling: {}", e)));
                return true;
            }
        }
        let ev = match crossterm::event::read() {
            Ok(ev) => ev,
            Err(e) => {
                try_send!(Error(format!("reading: {}", e)));
                return true;
            }
        };
        match ev {
            ct::Event::Key(ct::KeyEvent {
                code, modifiers, ..
            }) => {
                mods!(modifiers, KeyPress);
                match key4ct(code) {
                    Some(key) => {
                        try_send!(KeyPress { key });
                        try_send!(KeyRelease { key });
                    }
                    None => try_send!(Unknown(format!("unhandled key {:?}", code))),
                }
                mods!(modifiers, KeyRelease);
            }
            ct::Event::Resize(..) => try_send!(Redraw),
            ct::Event::Mouse(ct::MouseEvent {
                row,
                column: col,
                kind,
                modifiers,
            }) => {
                mods!(modifiers, KeyPress);
                let pos = XY(col as usize, row as usize);
                match kind {
                    ct::MouseEventKind::Down(btn) => try_send!(MousePress {
                        pos,
                        button: btn4ct(btn)
                    }),
                    ct::MouseEventKind::Up(btn) => try_send!(MouseRelease {
                        pos,
                        button: btn4ct(btn)
                    }),
                    ct::MouseEventKind::Drag(_) | ct::MouseEventKind::Moved => {
                        try_send!(MouseMove { pos })
                    }
                    ct::MouseEventKind::ScrollUp => try_send!(MousePress {
                        pos,
                        button: MouseButton::ScrollUp
                    }),
                    ct::MouseEventKind::ScrollDown => try_send!(MousePress {
                        pos,
                        button: MouseButton::ScrollDown
                    }),
                }
                mods!(modifiers, KeyRelease);
            }
            ct::Event::FocusGained => try_send!(Redraw),
            // focus loss, bracketed paste, and whatever else crossterm grows: nothing for us in them
            _ => (),
        };

        false
    }

    fn run(&mut self) {
        // `step` itself never blocks, so wait for events here rather than spinning a whole core
        while !self.step() {
            let _ = crossterm::event::poll(Duration::from_millis(50));
        }
    }
}

/// crossterm color for our colors
fn ct4color(color: Color) -> CtColor {
    match color {
        Color::Black => CtColor::Black,
        Color::BrightBlack => CtColor::DarkGrey,
        Color::Red => CtColor::DarkRed,
        Color::BrightRed => CtColor::Red,
        Color::Green => CtColor::DarkGreen,
        Color::BrightGreen => CtColor::Green,
        Color::Yellow => CtColor::DarkYellow,
        Color::BrightYellow => CtColor::Yellow,
        Color::Blue => CtColor::DarkBlue,
        Color::BrightBlue => CtColor::Blue,
        Color::Magenta => CtColor::DarkMagenta,
        Color::BrightMagenta => CtColor::Magenta,
        Color::Cyan => CtColor::DarkCyan,
        Color::BrightCyan => CtColor::Cyan,
        Color::White => CtColor::Grey,
        Color::BrightWhite => CtColor::White,
        Color::Default => CtColor::Reset,
    }
}

/// Render a single row of cells into the byte queue, changing attributes only when a cell differs from the last.
fn render_row(row: &[Cell], out: &mut Vec<u8>) {
    // `unwrap` is safe throughout because we're queueing into a `Vec`, which is an infallible destination for bytes

    let mut ch_b = [0u8; 4];

    let mut fmt = row[0].get_fmt().clone();
    let mut attrs = [Attribute::NormalIntensity, Attribute::NoUnderline];
    if fmt.bold {
        attrs[0] = Attribute::Bold;
    }
    if fmt.underline {
        attrs[1] = Attribute::Underlined;
    }
    crossterm::queue!(
        out,
        ResetColor,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(ct4color(fmt.fg)),
        SetBackgroundColor(ct4color(fmt.bg)),
        SetAttribute(attrs[0]),
        SetAttribute(attrs[1]),
    )
    .unwrap();
    out.extend_from_slice(row[0].ch.encode_utf8(&mut ch_b).as_bytes());

    for cell in &row[1..] {
        let cf = cell.get_fmt();
        if cf.fg != fmt.fg {
            crossterm::queue!(out, SetForegroundColor(ct4color(cf.fg))).unwrap();
        }
        if cf.bg != fmt.bg {
            crossterm::queue!(out, SetBackgroundColor(ct4color(cf.bg))).unwrap();
        }
        if cf.bold != fmt.bold {
            let attr = if cf.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            crossterm::queue!(out, SetAttribute(attr)).unwrap();
        }
        if cf.underline != fmt.underline {
            let attr = if cf.underline {
                Attribute::Underlined
            } else {
                Attribute::NoUnderline
            };
            crossterm::queue!(out, SetAttribute(attr)).unwrap();
        }
        fmt = cf.clone();
        out.extend_from_slice(cell.ch.encode_utf8(&mut ch_b).as_bytes());
    }
    crossterm::queue!(out, MoveDown(1), MoveToColumn(0)).unwrap();
}

pub struct CtSystem {
    queue: mpsc::Receiver<Action>,
    stop: Arc<AtomicBool>,
}

impl CtSystem {
    pub fn new() -> Result<(Self, CtRunner)> {
        let (queue_s, queue_r) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let runner = CtRunner::new(queue_s, stop.clone())?;
        Ok((
            Self {
                queue: queue_r,
                stop,
            },
            runner,
        ))
    }
}

impl IoSystem for CtSystem {
    fn size(&self) -> XY {
        let (x, y) = terminal::size().unwrap();
        XY(x as usize, y as usize)
    }

    fn draw(&mut self, screen: &Screen) -> Result<()> {
        let mut out = vec![];
        crossterm::queue!(&mut out, MoveTo(0, 0), Clear(ClearType::All))?;
        for row in screen.rows() {
            render_row(row, &mut out);
        }
        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();
        stdout.write_all(&out)?;
        stdout.flush()?;
        Ok(())
    }

    fn input(&mut self) -> Result<Action> {
        Ok(self.queue.recv().expect("unexpected queue closure"))
    }

    fn poll_input(&mut self) -> Result<Option<Action>> {
        match self.queue.try_recv() {
            Ok(res) => Ok(Some(res)),
            Err(TryRecvError::Disconnected) => panic!("unexpected queue closure"),
            Err(TryRecvError::Empty) => Ok(None),
        }
    }

    fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        // flush anything that arrived after the last read; the runner sees the flag and stops sending
        while let Ok(_) = self.queue.try_recv() {}
    }
}
