/// Dead-zone step filter for pointer drags.
///
/// Each axis keeps the coordinate it last fired at. Once the cursor has
/// moved at least `threshold` pixels from it on that axis, the filter
/// reports one step (its sign is the direction of travel) and re-samples
/// that axis only. Sub-threshold jitter never accumulates into motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragStepFilter {
    sampled: (f32, f32),
    threshold: f32,
}

/// Steps produced by one cursor sample: `-1`, `0` or `+1` per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct DragSteps {
    pub(crate) x: i8,
    pub(crate) y: i8,
}

impl DragStepFilter {
    pub(crate) fn new(threshold: f32) -> Self {
        Self {
            sampled: (0.0, 0.0),
            threshold,
        }
    }

    pub(crate) fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    /// Start a drag at the press position.
    pub(crate) fn reset(&mut self, x: f32, y: f32) {
        self.sampled = (x, y);
    }

    /// Feed a cursor sample.
    pub(crate) fn sample(&mut self, x: f32, y: f32) -> DragSteps {
        let mut steps = DragSteps::default();
        if (x - self.sampled.0).abs() >= self.threshold {
            steps.x = if x > self.sampled.0 { 1 } else { -1 };
            self.sampled.0 = x;
        }
        if (y - self.sampled.1).abs() >= self.threshold {
            steps.y = if y > self.sampled.1 { 1 } else { -1 };
            self.sampled.1 = y;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_below_threshold_is_ignored() {
        let mut f = DragStepFilter::new(3.0);
        f.reset(100.0, 100.0);
        assert_eq!(f.sample(101.0, 98.0), DragSteps::default());
        assert_eq!(f.sample(102.9, 97.1), DragSteps::default());
    }

    #[test]
    fn axes_fire_and_resample_independently() {
        let mut f = DragStepFilter::new(3.0);
        f.reset(100.0, 100.0);

        assert_eq!(f.sample(103.0, 101.0), DragSteps { x: 1, y: 0 });
        // x re-sampled at 103, y still anchored at 100.
        assert_eq!(f.sample(104.0, 103.0), DragSteps { x: 0, y: 1 });
        assert_eq!(f.sample(99.0, 103.0), DragSteps { x: -1, y: 0 });
        assert_eq!(f.sample(99.0, 90.0), DragSteps { x: 0, y: -1 });
    }

    #[test]
    fn a_large_jump_is_still_one_step() {
        let mut f = DragStepFilter::new(3.0);
        f.reset(0.0, 0.0);
        assert_eq!(f.sample(50.0, -50.0), DragSteps { x: 1, y: -1 });
        assert_eq!(f.sample(50.0, -50.0), DragSteps::default());
    }
}
