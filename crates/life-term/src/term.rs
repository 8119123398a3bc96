//! Crossterm terminal output and key input.
//!
//! Each board cell is drawn as two terminal columns so cells come out
//! roughly square. Drawing is clipped to the terminal size.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use life_core::{Cell, Grid, Point};

use crate::session::Session;

/// Terminal columns per board cell.
const CELL_WIDTH: u16 = 2;

const ALIVE_COLOR: CtColor = CtColor::Rgb {
    r: 128,
    g: 0,
    b: 128,
};
const DEAD_COLOR: CtColor = CtColor::Rgb {
    r: 230,
    g: 210,
    b: 40,
};

/// Maps a board cell to its background colour.
fn cell_color(c: Cell) -> CtColor {
    match c {
        Cell::Alive => ALIVE_COLOR,
        Cell::Dead => DEAD_COLOR,
    }
}

/// A user request read from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    TogglePause,
    Reset,
    Quit,
}

/// Something the event loop has to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Resize,
}

/// Maps a key press to a [`Command`].
pub fn to_command(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('s') | KeyCode::Enter => Some(Command::Start),
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(Command::TogglePause),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// The status line shown under the board.
pub fn status_line(session: &Session) -> String {
    let state = if !session.is_started() {
        "ready"
    } else if session.is_finished() {
        "simulation finished"
    } else if session.is_paused() {
        "paused"
    } else {
        "running"
    };
    format!(
        "gen {}/{}  pop {}  [{state}]  s:start  space:pause  r:reset  q:quit",
        session.steps(),
        session.step_limit(),
        session.grid().population(),
    )
}

/// Raw-mode, alternate-screen terminal.
pub struct Terminal {
    out: Stdout,
    size: (u16, u16),
}

impl Terminal {
    /// A driver on stdout. Nothing is touched until [`Terminal::init`].
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            size: (0, 0),
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        queue!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.out.flush()?;
        self.size = terminal::size()?;
        Ok(())
    }

    /// Restore the terminal. Errors are ignored: this runs on the way out,
    /// including after a failure.
    pub fn close(&mut self) {
        let _ = queue!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = self.out.flush();
        let _ = terminal::disable_raw_mode();
    }

    /// Wait up to `timeout` for an input we care about.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => Ok(to_command(code, modifiers).map(Input::Command)),
            Event::Resize(w, h) => {
                self.size = (w, h);
                Ok(Some(Input::Resize))
            }
            _ => Ok(None),
        }
    }

    /// Clear the screen and draw every cell.
    pub fn draw_full(&mut self, grid: &Grid) -> io::Result<()> {
        queue!(self.out, ResetColor, terminal::Clear(ClearType::All))?;
        for item in grid.iter() {
            self.queue_cell(item)?;
        }
        Ok(())
    }

    /// Draw only the given cells.
    pub fn draw_changes(&mut self, changes: &[(Point, Cell)]) -> io::Result<()> {
        for &item in changes {
            self.queue_cell(item)?;
        }
        Ok(())
    }

    fn queue_cell(&mut self, (p, cell): (Point, Cell)) -> io::Result<()> {
        let (w, h) = self.size;
        // The last row is kept for the status line.
        let col = p.x as u64 * u64::from(CELL_WIDTH);
        if col + u64::from(CELL_WIDTH) > u64::from(w) || p.y as u64 + 1 >= u64::from(h) {
            return Ok(());
        }
        queue!(
            self.out,
            cursor::MoveTo(col as u16, p.y as u16),
            SetBackgroundColor(cell_color(cell)),
            Print("  ")
        )
    }

    /// Draw the status line under the board (or on the last row) and flush.
    pub fn draw_status(&mut self, session: &Session) -> io::Result<()> {
        let (w, h) = self.size;
        let rows = u16::try_from(session.grid().rows()).unwrap_or(u16::MAX);
        let row = rows.min(h.saturating_sub(1));
        let mut line = status_line(session);
        line.truncate(usize::from(w));
        queue!(
            self.out,
            ResetColor,
            cursor::MoveTo(0, row),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(CtColor::Reset),
            Print(line)
        )?;
        self.out.flush()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_bindings() {
        let none = KeyModifiers::NONE;
        assert_eq!(to_command(KeyCode::Char('s'), none), Some(Command::Start));
        assert_eq!(to_command(KeyCode::Enter, none), Some(Command::Start));
        assert_eq!(to_command(KeyCode::Char(' '), none), Some(Command::TogglePause));
        assert_eq!(to_command(KeyCode::Char('p'), none), Some(Command::TogglePause));
        assert_eq!(to_command(KeyCode::Char('r'), none), Some(Command::Reset));
        assert_eq!(to_command(KeyCode::Esc, none), Some(Command::Quit));
        assert_eq!(
            to_command(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Command::Quit)
        );
        assert_eq!(to_command(KeyCode::Char('x'), none), None);
    }

    #[test]
    fn status_reflects_session() {
        let g = Grid::dead(3, 3).unwrap();
        let mut s = Session::new(g, 2);
        assert!(status_line(&s).contains("[ready]"));
        s.start();
        assert!(status_line(&s).contains("gen 0/2"));
        assert!(status_line(&s).contains("[running]"));
        s.toggle_pause();
        assert!(status_line(&s).contains("[paused]"));
        s.toggle_pause();
        s.tick();
        s.tick();
        assert!(status_line(&s).contains("[simulation finished]"));
    }

    #[test]
    fn colours_differ() {
        assert_ne!(cell_color(Cell::Alive), cell_color(Cell::Dead));
    }
}
