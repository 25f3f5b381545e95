use indicatif::HumanDuration;
use std::time::{Duration, Instant};

/// Wall-clock timer for a run. Kept out of the engine so the pruning itself never
/// touches the clock.
#[derive(Debug, Clone)]
pub struct StatsTimer {
    start_time: Instant,
    duration: Option<Duration>,
}

impl Default for StatsTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsTimer {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            duration: None,
        }
    }

    pub fn finish(&mut self) -> Duration {
        let duration = self.start_time.elapsed();
        self.duration = Some(duration);
        duration
    }

    /// Time until [`finish`](Self::finish), or so far if still running.
    pub fn get_duration(&self) -> Duration {
        self.duration.unwrap_or_else(|| self.start_time.elapsed())
    }

    pub fn get_duration_secs(&self) -> f64 {
        self.get_duration().as_secs_f64()
    }

    pub fn get_duration_human(&self) -> String {
        HumanDuration(self.get_duration()).to_string()
    }
}
