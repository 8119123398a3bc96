//! The interactive loop: poll keys → tick when due → redraw.

use std::time::{Duration, Instant};

use life_core::Grid;

use crate::session::{Cadence, Session, Tick};
use crate::term::{Command, Input, Terminal};

/// How long to block on input when no generation is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Run the session in the terminal until the user quits.
///
/// The terminal is restored before returning, whether the loop ended
/// normally or with an error.
pub fn run(session: &mut Session, delay: Duration) -> Result<(), Box<dyn std::error::Error>> {
    let mut term = Terminal::new();
    term.init()?;
    let result = event_loop(&mut term, session, delay);
    term.close();
    result
}

fn event_loop(
    term: &mut Terminal,
    session: &mut Session,
    delay: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cadence = Cadence::new(delay, Instant::now());
    session.start();

    // What is currently on screen, for incremental redraws.
    let mut shown: Grid = session.grid().clone();
    term.draw_full(&shown)?;
    term.draw_status(session)?;

    loop {
        let timeout = if session.is_running() {
            cadence.remaining(Instant::now())
        } else {
            IDLE_POLL
        };

        let mut full_redraw = false;
        match term.poll(timeout)? {
            Some(Input::Command(Command::Quit)) => return Ok(()),
            Some(Input::Command(Command::Start)) => {
                session.start();
                cadence.restart(Instant::now());
                full_redraw = true;
            }
            Some(Input::Command(Command::TogglePause)) => {
                session.toggle_pause();
                cadence.restart(Instant::now());
            }
            Some(Input::Command(Command::Reset)) => {
                session.reset();
                full_redraw = true;
            }
            Some(Input::Resize) => full_redraw = true,
            None => {}
        }

        let now = Instant::now();
        if session.is_running() && cadence.is_due(now) {
            if session.tick() == Tick::Advanced && !full_redraw {
                let changes = session.grid().changes_from(&shown);
                term.draw_changes(&changes)?;
                shown.clone_from(session.grid());
            }
            cadence.schedule(now);
        }

        if full_redraw {
            shown.clone_from(session.grid());
            term.draw_full(&shown)?;
        }
        term.draw_status(session)?;
    }
}
