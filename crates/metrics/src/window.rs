use std::collections::VecDeque;

/// Rolling history of CPU utilization samples — drives the trend chart and
/// the running average.
///
/// Fixed-capacity FIFO: once the window is full, pushing a sample evicts the
/// oldest one. Owned exclusively by the polling task, like [`CpuSampler`].
///
/// [`CpuSampler`]: crate::sampler::CpuSampler
#[derive(Debug, Clone)]
pub struct RollingWindow {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl RollingWindow {
    /// Create an empty window. A requested capacity of 0 is clamped to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new sample, evicting the oldest if at capacity.
    pub fn push(&mut self, value: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    /// All held samples in chronological order (oldest first).
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }

    /// Average of all samples in the window; 0.0 when empty.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// The most recently pushed sample, or `None` while empty.
    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change capacity at runtime (values below 1 clamp to 1). Shrinking
    /// truncates from the front immediately so the invariant `len <= capacity`
    /// holds before the next push.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }
}

impl Default for RollingWindow {
    /// Default window size matches the 20-point trend chart.
    fn default() -> Self {
        Self::new(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_exceeds_capacity() {
        let mut window = RollingWindow::new(4);
        for i in 0..50 {
            window.push(i as f64);
            assert!(window.len() <= 4);
        }
    }

    #[test]
    fn eviction_is_fifo_and_order_preserved() {
        let mut window = RollingWindow::new(3);
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            window.push(v);
        }
        assert_eq!(window.values(), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn average_of_empty_window_is_zero() {
        let window = RollingWindow::new(20);
        assert_eq!(window.average(), 0.0);
    }

    #[test]
    fn average_of_extremes() {
        let mut window = RollingWindow::new(20);
        window.push(100.0);
        window.push(0.0);
        assert_eq!(window.average(), 50.0);
    }

    #[test]
    fn latest_tracks_last_push() {
        let mut window = RollingWindow::new(2);
        assert_eq!(window.latest(), None);
        window.push(10.0);
        window.push(20.0);
        window.push(30.0);
        assert_eq!(window.latest(), Some(30.0));
    }

    #[test]
    fn shrinking_capacity_truncates_from_front() {
        let mut window = RollingWindow::new(20);
        for i in 1..=20 {
            window.push(i as f64);
        }
        window.set_capacity(5);
        assert_eq!(window.values(), vec![16.0, 17.0, 18.0, 19.0, 20.0]);
    }

    #[test]
    fn zero_capacity_clamps_to_one() {
        let mut window = RollingWindow::new(0);
        assert_eq!(window.capacity(), 1);
        window.push(1.0);
        window.push(2.0);
        assert_eq!(window.values(), vec![2.0]);

        window.set_capacity(0);
        assert_eq!(window.capacity(), 1);
        assert_eq!(window.values(), vec![2.0]);
    }

    #[test]
    fn growing_capacity_keeps_existing_samples() {
        let mut window = RollingWindow::new(2);
        window.push(1.0);
        window.push(2.0);
        window.set_capacity(4);
        window.push(3.0);
        window.push(4.0);
        assert_eq!(window.values(), vec![1.0, 2.0, 3.0, 4.0]);
    }
}
