use std::time::{Duration, Instant};

/// Scope guard that logs how long it lived.
///
/// ```rust
/// use festim_core::util::Timer;
///
/// let sum = Timer::time("sum", || (0..1000u64).sum::<u64>());
/// assert_eq!(sum, 499500);
///
/// {
///     let _t = Timer::new("block");
///     // ... work ...
/// } // logs "block took ... seconds"
/// ```
#[derive(Debug)]
pub struct Timer {
    name: String,
    start: Instant,
}

impl Timer {
    pub fn new(name: impl Into<String>) -> Self {
        Timer {
            name: name.into(),
            start: Instant::now(),
        }
    }

    /// Runs `f` under a timer named `name` and returns its result.
    pub fn time<R>(name: &str, f: impl FnOnce() -> R) -> R {
        let _timer = Timer::new(name);
        f()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new("Task")
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        log::info!("{} took {} seconds", self.name, self.elapsed().as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name_and_elapsed() {
        let t = Timer::default();
        assert_eq!(t.name(), "Task");
        std::thread::sleep(Duration::from_millis(2));
        assert!(t.elapsed() >= Duration::from_millis(2));
    }

    #[test]
    fn test_time_returns_closure_result() {
        assert_eq!(Timer::time("answer", || 42), 42);
    }
}
