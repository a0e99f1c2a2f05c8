//! telemetry/timers.rs
//! Stage timers for codec calls.
//!
//! A codec call has at most five stages, so times live in a fixed slot per
//! stage rather than a map. An empty slot means the stage never ran.

use std::fmt;
use std::time::{Duration, Instant};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Preprocess,
    Encode,
    Frame,
    Unframe,
    Decode,
}

impl Stage {
    pub const ALL: [Stage; 5] = [Stage::Preprocess, Stage::Encode, Stage::Frame, Stage::Unframe, Stage::Decode];

    #[inline]
    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Preprocess => "preprocess",
            Stage::Encode     => "encode",
            Stage::Frame      => "frame",
            Stage::Unframe    => "unframe",
            Stage::Decode     => "decode",
        };
        f.write_str(name)
    }
}

/// Accumulated wall time per stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTimes {
    slots: [Option<Duration>; 5],
}

impl StageTimes {
    /// Accumulates into the stage's slot.
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        let slot = &mut self.slots[stage.slot()];
        *slot = Some(slot.unwrap_or(Duration::ZERO) + dur);
    }

    /// Run `f`, charging its wall time to `stage`.
    pub fn measure<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.add(stage, start.elapsed());
        out
    }

    pub fn get(&self, stage: Stage) -> Duration {
        self.slots[stage.slot()].unwrap_or(Duration::ZERO)
    }

    pub fn get_us(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1_000_000.0
    }

    /// Whether `stage` ran at least once (even if it took no measurable time).
    pub fn contains(&self, stage: Stage) -> bool {
        self.slots[stage.slot()].is_some()
    }

    pub fn total(&self) -> Duration {
        self.slots.iter().flatten().sum()
    }

    pub fn merge(&mut self, other: &StageTimes) {
        for (stage, dur) in other.iter() {
            self.add(stage, dur);
        }
    }

    /// Stages that ran, in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, Duration)> + '_ {
        Stage::ALL
            .into_iter()
            .filter_map(|stage| self.slots[stage.slot()].map(|dur| (stage, dur)))
    }
}

/// Wall clock for a whole batch plus the summed stage breakdown.
#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    pub start_time: Instant,
    pub end_time: Option<Instant>,
    pub stage_times: StageTimes,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self { start_time: Instant::now(), end_time: None, stage_times: StageTimes::default() }
    }

    /// Freeze `elapsed`.
    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    pub fn add_stage_times(&mut self, times: &StageTimes) {
        self.stage_times.merge(times);
    }

    pub fn elapsed(&self) -> Duration {
        self.end_time.unwrap_or_else(Instant::now).duration_since(self.start_time)
    }
}
