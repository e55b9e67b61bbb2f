//! Auto-advancing slide viewer.

/// Tracks which slide is active. Exactly one slide is active whenever
/// `count > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideViewer {
    count: usize,
    current: usize,
    /// Bumped on every manual navigation so that a pending auto-advance tick
    /// armed before it is discarded and the interval starts over.
    epoch: u64,
}

impl SlideViewer {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current: 0,
            epoch: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.count > 0 && index == self.current
    }

    pub fn next(&mut self) {
        self.step_forward();
        self.epoch += 1;
    }

    pub fn previous(&mut self) {
        if self.count == 0 {
            return;
        }
        self.current = (self.current + self.count - 1) % self.count;
        self.epoch += 1;
    }

    /// Jump to `index`; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.count {
            self.current = index;
            self.epoch += 1;
        }
    }

    /// Timer tick armed at `armed_epoch`. Advances only when no manual
    /// navigation happened since; returns whether it advanced.
    pub fn auto_advance(&mut self, armed_epoch: u64) -> bool {
        if armed_epoch != self.epoch || self.count == 0 {
            return false;
        }
        self.step_forward();
        true
    }

    fn step_forward(&mut self) {
        if self.count > 0 {
            self.current = (self.current + 1) % self.count;
        }
    }
}
