//! Caller-owned simulation state: the starting board, the running engine,
//! the pause flag and the step counter.
//!
//! The engine itself knows nothing about any of this. A [`Session`] decides
//! *whether* to call [`Engine::advance`] on each tick; a [`Cadence`] decides
//! *when* a tick is due.

use std::time::{Duration, Instant};

use life_core::{Engine, Grid};

/// Upper bound on the step limit.
pub const MAX_STEPS: usize = 10_000;
/// Step limit used when none is given.
pub const DEFAULT_STEPS: usize = 100;
/// Delay between generations used when none is given.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// What a call to [`Session::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not started, or reset.
    Idle,
    /// Started but paused; the board was left alone.
    Paused,
    /// The step limit has been reached.
    Finished,
    /// One generation was computed.
    Advanced,
}

/// One simulation run.
#[derive(Debug, Clone)]
pub struct Session {
    source: Grid,
    engine: Option<Engine>,
    paused: bool,
    steps: usize,
    step_limit: usize,
}

impl Session {
    /// A new, not yet started session. `step_limit` is clamped to
    /// `1..=MAX_STEPS`.
    pub fn new(source: Grid, step_limit: usize) -> Self {
        Self {
            source,
            engine: None,
            paused: false,
            steps: 0,
            step_limit: step_limit.clamp(1, MAX_STEPS),
        }
    }

    /// Start (or restart) from the starting board.
    pub fn start(&mut self) {
        log::info!(
            "session: start {}x{}, limit {}",
            self.source.rows(),
            self.source.cols(),
            self.step_limit
        );
        self.engine = Some(Engine::new(self.source.clone()));
        self.paused = false;
        self.steps = 0;
    }

    /// Flip the pause flag. Has no effect before [`start`](Self::start).
    pub fn toggle_pause(&mut self) {
        if self.engine.is_some() {
            self.paused = !self.paused;
            log::debug!("session: paused = {}", self.paused);
        }
    }

    /// Drop the running engine and clear the counters.
    pub fn reset(&mut self) {
        log::info!("session: reset after {} steps", self.steps);
        self.engine = None;
        self.paused = false;
        self.steps = 0;
    }

    /// Advance one generation if the session is running.
    pub fn tick(&mut self) -> Tick {
        let Some(engine) = self.engine.as_mut() else {
            return Tick::Idle;
        };
        if self.steps >= self.step_limit {
            return Tick::Finished;
        }
        if self.paused {
            return Tick::Paused;
        }
        engine.advance();
        self.steps += 1;
        if self.steps == self.step_limit {
            log::info!("session: finished after {} steps", self.steps);
        }
        Tick::Advanced
    }

    /// Start if needed, unpause, and advance until the step limit.
    pub fn run_to_end(&mut self) -> &Grid {
        if self.engine.is_none() {
            self.start();
        }
        self.paused = false;
        while self.tick() == Tick::Advanced {}
        self.grid()
    }

    /// The board to show: the current generation, or the starting board
    /// when nothing is running.
    pub fn grid(&self) -> &Grid {
        self.engine.as_ref().map_or(&self.source, Engine::current)
    }

    /// The starting board.
    pub fn source(&self) -> &Grid {
        &self.source
    }

    /// Whether an engine is loaded.
    pub fn is_started(&self) -> bool {
        self.engine.is_some()
    }

    /// Started, not paused, not finished.
    pub fn is_running(&self) -> bool {
        self.is_started() && !self.paused && !self.is_finished()
    }

    /// Whether the run is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the step limit has been reached since the last start.
    pub fn is_finished(&self) -> bool {
        self.is_started() && self.steps >= self.step_limit
    }

    /// Generations computed since the last start.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Generations per run.
    pub fn step_limit(&self) -> usize {
        self.step_limit
    }
}

// ---------------------------------------------------------------------------
// Cadence
// ---------------------------------------------------------------------------

/// Fixed delay between generations.
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    delay: Duration,
    next_due: Instant,
}

impl Cadence {
    /// A cadence whose first tick is due at `now`.
    pub fn new(delay: Duration, now: Instant) -> Self {
        Self {
            delay,
            next_due: now,
        }
    }

    /// Time between generations.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a tick is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Record a tick at `now`; the next one is due one delay later.
    pub fn schedule(&mut self, now: Instant) {
        self.next_due = now + self.delay;
    }

    /// Make the next tick due immediately.
    pub fn restart(&mut self, now: Instant) {
        self.next_due = now;
    }

    /// Time left until the next tick, zero if already due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::Cell;

    fn blinker() -> Grid {
        let mut g = Grid::dead(5, 5).unwrap();
        for x in 1..4 {
            g.set(2, x, Cell::Alive);
        }
        g
    }

    #[test]
    fn idle_until_started() {
        let mut s = Session::new(blinker(), 10);
        assert_eq!(s.tick(), Tick::Idle);
        assert!(!s.is_started());
        assert_eq!(s.grid(), &blinker());
        s.toggle_pause();
        assert!(!s.is_paused());
    }

    #[test]
    fn advances_and_counts() {
        let mut s = Session::new(blinker(), 10);
        s.start();
        assert!(s.is_running());
        assert_eq!(s.tick(), Tick::Advanced);
        assert_eq!(s.steps(), 1);
        assert!(s.grid().is_alive(1, 2));
        assert_eq!(s.tick(), Tick::Advanced);
        assert_eq!(s.grid(), &blinker());
    }

    #[test]
    fn pause_skips_advance() {
        let mut s = Session::new(blinker(), 10);
        s.start();
        s.toggle_pause();
        assert!(!s.is_running());
        assert_eq!(s.tick(), Tick::Paused);
        assert_eq!(s.steps(), 0);
        assert_eq!(s.grid(), &blinker());
        s.toggle_pause();
        assert_eq!(s.tick(), Tick::Advanced);
    }

    #[test]
    fn stops_at_limit() {
        let mut s = Session::new(blinker(), 3);
        s.start();
        for _ in 0..3 {
            assert_eq!(s.tick(), Tick::Advanced);
        }
        assert!(s.is_finished());
        assert_eq!(s.tick(), Tick::Finished);
        assert_eq!(s.steps(), 3);
    }

    #[test]
    fn reset_clears_state() {
        let mut s = Session::new(blinker(), 5);
        s.start();
        s.tick();
        s.toggle_pause();
        s.reset();
        assert!(!s.is_started());
        assert!(!s.is_paused());
        assert_eq!(s.steps(), 0);
        assert_eq!(s.grid(), s.source());
        assert_eq!(s.tick(), Tick::Idle);
    }

    #[test]
    fn restart_begins_from_source() {
        let mut s = Session::new(blinker(), 5);
        s.start();
        s.tick();
        s.start();
        assert_eq!(s.steps(), 0);
        assert_eq!(s.grid(), &blinker());
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(Session::new(blinker(), 0).step_limit(), 1);
        assert_eq!(Session::new(blinker(), 50_000).step_limit(), MAX_STEPS);
    }

    #[test]
    fn run_to_end_matches_engine() {
        let mut s = Session::new(blinker(), 7);
        s.start();
        s.toggle_pause();
        let end = s.run_to_end().clone();
        let mut e = Engine::new(blinker());
        assert_eq!(&end, e.advance_by(7));
        assert_eq!(s.steps(), 7);
    }

    #[test]
    fn cadence_timing() {
        let t0 = Instant::now();
        let mut c = Cadence::new(Duration::from_millis(100), t0);
        assert!(c.is_due(t0));
        c.schedule(t0);
        assert!(!c.is_due(t0 + Duration::from_millis(50)));
        assert_eq!(
            c.remaining(t0 + Duration::from_millis(40)),
            Duration::from_millis(60)
        );
        assert!(c.is_due(t0 + Duration::from_millis(100)));
        assert_eq!(c.remaining(t0 + Duration::from_secs(1)), Duration::ZERO);
        c.restart(t0);
        assert!(c.is_due(t0));
    }
}
