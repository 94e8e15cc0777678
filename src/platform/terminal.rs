//! Terminal host built on crossterm
//!
//! Runs the frame pump: poll input until the frame deadline, call the
//! handler, present the canvas. Two canvas rows share one terminal row
//! using half-block glyphs, so a 160x100 playfield needs 160x50 characters.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use super::{FrameHandler, Key, KeyState};
use crate::consts::MAX_FRAME_DT;
use crate::error::{Error, Result};
use crate::renderer::{Canvas, Cell, Color, SOLID, Surface};
use crate::settings::Settings;
use crate::sim::Playfield;

const UPPER_HALF: char = '\u{2580}';

/// What the input pump wants the frame loop to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Frame pump that draws into the terminal
pub struct TerminalHost {
    canvas: Canvas,
    playfield: Playfield,
    keys: KeyState,
    frame_period: Duration,
    held_grace: Duration,
}

impl TerminalHost {
    pub fn new(settings: &Settings) -> Self {
        Self {
            canvas: Canvas::new(settings.width, settings.height),
            playfield: settings.playfield(),
            keys: KeyState::new(),
            frame_period: settings.frame_period(),
            held_grace: settings.held_grace(),
        }
    }

    /// Run until the player quits or the handler returns `false`
    pub fn run<H: FrameHandler>(&mut self, handler: &mut H) -> Result<()> {
        let playfield = self.playfield;
        if !handler.on_init(playfield) {
            return Err(Error::InitRejected {
                width: playfield.width as u16,
                height: playfield.height as u16,
            });
        }

        let guard = TerminalGuard::enter()?;
        self.keys = if guard.enhanced {
            KeyState::new()
        } else {
            log::warn!(
                "Terminal does not report key releases, holding keys for {:?} after last repeat",
                self.held_grace
            );
            KeyState::with_grace(self.held_grace)
        };
        check_terminal_size(&self.canvas);

        let mut out = io::BufWriter::new(io::stdout());
        let mut last = Instant::now();
        let mut frames: u64 = 0;

        loop {
            if self.pump_input(last + self.frame_period)? == Flow::Quit {
                log::info!("Quit requested after {frames} frames");
                break;
            }

            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f32().min(MAX_FRAME_DT);
            last = now;

            if !handler.on_frame(dt, &self.keys, &mut self.canvas) {
                log::info!("Frame handler stopped after {frames} frames");
                break;
            }
            self.keys.end_frame(now);
            present(&mut out, &self.canvas)?;
            frames += 1;
        }

        drop(guard);
        Ok(())
    }

    /// Read input until `deadline`
    fn pump_input(&mut self, deadline: Instant) -> Result<Flow> {
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                return Ok(Flow::Continue);
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key, Instant::now()) == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                Event::Resize(cols, rows) => {
                    log::debug!("Terminal resized to {cols}x{rows}");
                    execute!(io::stdout(), Clear(ClearType::All))?;
                }
                Event::FocusLost => self.keys.release_all(),
                _ => {}
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
        if is_quit(&key) {
            return Flow::Quit;
        }
        let Some(game_key) = bind(key.code) else {
            return Flow::Continue;
        };
        match key.kind {
            KeyEventKind::Press => self.keys.press(game_key, now),
            KeyEventKind::Repeat => self.keys.repeat(game_key, now),
            KeyEventKind::Release => self.keys.release(game_key),
        }
        Flow::Continue
    }
}

/// Default key bindings: arrows or WASD, space to fire
fn bind(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::TurnLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::TurnRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Thrust),
        KeyCode::Char(' ') => Some(Key::Fire),
        _ => None,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn check_terminal_size(canvas: &Canvas) {
    let need_cols = canvas.width();
    let need_rows = (canvas.height() + 1) / 2;
    match terminal::size() {
        Ok((cols, rows)) if (cols as i32) < need_cols || (rows as i32) < need_rows => {
            log::warn!(
                "Terminal is {cols}x{rows}, the playfield needs {need_cols}x{need_rows}; output will be cut off"
            );
        }
        Ok(_) => {}
        Err(e) => log::warn!("Could not read terminal size: {e}"),
    }
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Black => TermColor::Black,
        Color::White => TermColor::White,
        Color::Yellow => TermColor::Yellow,
    }
}

/// A glyph that must be printed as-is rather than as a colour block
fn is_text(cell: &Cell) -> bool {
    cell.glyph != SOLID && !cell.is_blank()
}

fn ink(cell: &Cell) -> TermColor {
    if cell.is_blank() {
        TermColor::Black
    } else {
        term_color(cell.color)
    }
}

/// Write the canvas, two cell rows per terminal row
fn present<W: Write>(out: &mut W, canvas: &Canvas) -> io::Result<()> {
    let (width, height) = (canvas.width(), canvas.height());
    let mut fg: Option<TermColor> = None;
    let mut bg: Option<TermColor> = None;

    for row in 0..(height + 1) / 2 {
        queue!(out, MoveTo(0, row as u16))?;
        for x in 0..width {
            let top = canvas.get(x, row * 2).unwrap_or(Cell::BLANK);
            let bottom = canvas.get(x, row * 2 + 1).unwrap_or(Cell::BLANK);

            let (glyph, want_fg, want_bg) = if is_text(&top) {
                (top.glyph, term_color(top.color), TermColor::Black)
            } else if is_text(&bottom) {
                (bottom.glyph, term_color(bottom.color), TermColor::Black)
            } else {
                (UPPER_HALF, ink(&top), ink(&bottom))
            };

            if fg != Some(want_fg) {
                queue!(out, SetForegroundColor(want_fg))?;
                fg = Some(want_fg);
            }
            if bg != Some(want_bg) {
                queue!(out, SetBackgroundColor(want_bg))?;
                bg = Some(want_bg);
            }
            queue!(out, Print(glyph))?;
        }
    }

    out.flush()
}

/// Raw mode + alternate screen for the lifetime of the guard
struct TerminalGuard {
    enhanced: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;

        let enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true));
        if enhanced {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )?;
        }
        Ok(Self { enhanced })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.enhanced {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(stdout, ResetColor, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
