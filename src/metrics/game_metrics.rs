use std::time::{Duration, Instant};

pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_length: usize,
    pub runs: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_length: 1,
            runs: 1,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Record the snake's length after a tick
    pub fn observe_length(&mut self, length: usize) {
        if length > self.best_length {
            self.best_length = length;
        }
    }

    /// A run ended (self-collision or manual restart); the next one starts
    /// immediately
    pub fn on_reset(&mut self) {
        self.runs += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_length_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.observe_length(4);
        assert_eq!(metrics.best_length, 4);

        metrics.observe_length(2);
        assert_eq!(metrics.best_length, 4); // Should not decrease

        metrics.observe_length(9);
        assert_eq!(metrics.best_length, 9); // Should update
    }

    #[test]
    fn test_run_counting() {
        let mut metrics = GameMetrics::new();
        assert_eq!(metrics.runs, 1);

        metrics.on_reset();
        metrics.on_reset();
        assert_eq!(metrics.runs, 3);
    }

    #[test]
    fn test_elapsed_time_advances() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);
    }
}
