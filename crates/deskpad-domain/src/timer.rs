//! Timer / countdown / clock state machine.
//!
//! Three mutually exclusive modes share one 1000ms tick source owned by
//! the caller. Switching modes always stops the machine; the countdown
//! target lives outside as text input and is re-parsed on demand.

use chrono::{DateTime, Local, Timelike};

/// Milliseconds advanced per tick.
pub const TICK_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerMode {
    Timer { elapsed_ms: u64 },
    Countdown { remaining_ms: u64, target_ms: u64 },
    Clock,
}

#[derive(Debug, Clone)]
pub struct TimerMachine {
    mode: TimerMode,
    running: bool,
}

impl TimerMachine {
    pub fn new() -> Self {
        Self {
            mode: TimerMode::Timer { elapsed_ms: 0 },
            running: false,
        }
    }

    pub fn mode(&self) -> &TimerMode {
        &self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Switch to stopwatch mode. Any prior progress in another mode is
    /// discarded and the machine stops.
    pub fn switch_to_timer(&mut self) {
        if !matches!(self.mode, TimerMode::Timer { .. }) {
            self.mode = TimerMode::Timer { elapsed_ms: 0 };
        }
        self.running = false;
    }

    /// Switch to countdown mode, loading a freshly parsed target.
    pub fn switch_to_countdown(&mut self, target_ms: u64) {
        self.mode = TimerMode::Countdown {
            remaining_ms: target_ms,
            target_ms,
        };
        self.running = false;
    }

    /// Switch to wall-clock mode. The clock ignores `running`.
    pub fn switch_to_clock(&mut self) {
        self.mode = TimerMode::Clock;
        self.running = false;
    }

    /// Apply a re-parsed countdown target. "Set" and losing focus on the
    /// input are equivalent triggers and both land here.
    pub fn set_countdown(&mut self, target_ms: u64) {
        self.mode = TimerMode::Countdown {
            remaining_ms: target_ms,
            target_ms,
        };
        self.running = false;
    }

    pub fn start(&mut self) {
        if !matches!(self.mode, TimerMode::Clock) {
            self.running = true;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop and restore the mode's initial value: zero for the stopwatch,
    /// the configured target for the countdown.
    pub fn reset(&mut self) {
        self.running = false;
        match &mut self.mode {
            TimerMode::Timer { elapsed_ms } => *elapsed_ms = 0,
            TimerMode::Countdown {
                remaining_ms,
                target_ms,
            } => *remaining_ms = *target_ms,
            TimerMode::Clock => {}
        }
    }

    /// Advance one tick of wall time.
    ///
    /// The countdown clamps at zero and auto-stops exactly on the tick
    /// that reaches it; it never goes negative and never ticks past zero.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        match &mut self.mode {
            TimerMode::Timer { elapsed_ms } => *elapsed_ms += TICK_MS,
            TimerMode::Countdown { remaining_ms, .. } => {
                *remaining_ms = remaining_ms.saturating_sub(TICK_MS);
                if *remaining_ms == 0 {
                    self.running = false;
                }
            }
            TimerMode::Clock => {}
        }
    }

    /// Main display string for the current mode.
    pub fn display(&self, now: DateTime<Local>) -> String {
        match &self.mode {
            TimerMode::Timer { elapsed_ms } => format_hms(*elapsed_ms),
            TimerMode::Countdown { remaining_ms, .. } => format_hms(*remaining_ms),
            TimerMode::Clock => format_clock(now),
        }
    }
}

impl Default for TimerMachine {
    fn default() -> Self {
        Self::new()
    }
}

fn pad2(n: u64) -> String {
    format!("{:02}", n)
}

/// Format a millisecond duration as `HH:MM:SS` with zero-padded fields.
/// Hours are unbounded: 36 hours renders as `36:00:00`.
pub fn format_hms(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{}:{}:{}", pad2(hours), pad2(minutes), pad2(seconds))
}

/// Local wall-clock time, zero-padded `HH:MM:SS`.
pub fn format_clock(now: DateTime<Local>) -> String {
    format!(
        "{}:{}:{}",
        pad2(now.hour() as u64),
        pad2(now.minute() as u64),
        pad2(now.second() as u64)
    )
}

/// Parse an `hh:mm:ss` input into milliseconds. Each field is a
/// non-negative integer; malformed or missing fields count as zero.
pub fn parse_hms(input: &str) -> u64 {
    let mut fields = input.split(':');
    let mut field = |scale: u64| {
        fields
            .next()
            .and_then(|f| f.trim().parse::<u64>().ok())
            .unwrap_or(0)
            * scale
    };
    let seconds = field(3600) + field(60) + field(1);
    seconds * 1000
}
