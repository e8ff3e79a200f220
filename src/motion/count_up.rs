use super::phase::{Generation, Phase};

/// `1 - (1 - p)^4`, with `p` clamped to `[0, 1]`.
pub fn ease_out_quart(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Counts a number up from zero over a fixed duration, once.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_ms: f64,
    started_at: Option<f64>,
    value: u32,
    phase: Phase,
    generation: Generation,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            started_at: None,
            value: 0,
            phase: Phase::Idle,
            generation: 0,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Value `elapsed_ms` into the run. The last frame is pinned to `target`
    /// rather than trusting the floor of the eased curve.
    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        if self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms {
            return self.target;
        }
        let p = (elapsed_ms / self.duration_ms).max(0.0);
        let eased = (ease_out_quart(p) * f64::from(self.target)).floor() as u32;
        eased.min(self.target)
    }

    /// Applies one animation frame. The first frame after a (re)start anchors
    /// the clock, so it always shows 0.
    pub fn frame(&mut self, timestamp_ms: f64) {
        if self.phase.is_complete() {
            return;
        }
        let started_at = *self.started_at.get_or_insert(timestamp_ms);
        let elapsed = timestamp_ms - started_at;

        self.value = self.value.max(self.value_at(elapsed));
        self.phase = if elapsed >= self.duration_ms {
            self.value = self.target;
            Phase::Complete
        } else {
            Phase::Running
        };
    }

    /// Drops progress and counts towards a new target from zero.
    pub fn retarget(&mut self, target: u32) {
        self.target = target;
        self.restart();
    }

    pub fn restart(&mut self) {
        self.started_at = None;
        self.value = 0;
        self.phase = Phase::Idle;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn finish(&mut self) {
        self.value = self.target;
        self.phase = Phase::Complete;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const D: f64 = 2_500.0;

    #[test]
    fn easing_hits_both_ends() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(-3.0), 0.0);
        assert_eq!(ease_out_quart(7.0), 1.0);
    }

    #[test]
    fn starts_at_zero_and_lands_exactly_on_target() {
        let meter = CountUp::new(130, D);
        assert_eq!(meter.value_at(0.0), 0);
        assert_eq!(meter.value_at(D), 130);
        assert_eq!(meter.value_at(D * 4.0), 130);
    }

    #[test]
    fn frames_run_to_completion_and_stop() {
        let mut meter = CountUp::new(130, D);
        assert_eq!(meter.phase(), Phase::Idle);

        meter.frame(1_000.0);
        assert_eq!(meter.value(), 0);
        assert_eq!(meter.phase(), Phase::Running);

        meter.frame(1_000.0 + D / 2.0);
        assert!(meter.value() > 65, "ease-out is ahead of linear at the midpoint");

        meter.frame(1_000.0 + D);
        assert_eq!(meter.value(), 130);
        assert_eq!(meter.phase(), Phase::Complete);

        meter.frame(1_000.0 + D * 2.0);
        assert_eq!(meter.value(), 130);
    }

    #[test]
    fn retarget_mid_flight_restarts_from_zero() {
        let mut meter = CountUp::new(130, D);
        meter.frame(0.0);
        meter.frame(D / 3.0);
        assert!(meter.value() > 0);
        let gen = meter.generation();

        meter.retarget(40);
        assert_eq!(meter.value(), 0);
        assert_eq!(meter.phase(), Phase::Idle);
        assert_eq!(meter.generation(), gen + 1);

        meter.frame(10_000.0);
        meter.frame(10_000.0 + D);
        assert_eq!(meter.value(), 40);
    }

    #[test]
    fn zero_target_completes_at_zero() {
        let mut meter = CountUp::new(0, D);
        meter.frame(0.0);
        meter.frame(D);
        assert_eq!(meter.value(), 0);
        assert!(meter.phase().is_complete());
    }

    #[test]
    fn finish_skips_the_animation() {
        let mut meter = CountUp::new(130, D);
        meter.finish();
        assert_eq!(meter.value(), 130);
        assert!(meter.phase().is_complete());
    }

    proptest! {
        #[test]
        fn value_never_decreases(
            target in 0u32..100_000,
            samples in proptest::collection::vec(0.0f64..3_000.0, 1..60)
        ) {
            let mut samples = samples;
            samples.sort_by(|a, b| a.total_cmp(b));
            let meter = CountUp::new(target, D);
            let mut last = 0;
            for t in samples {
                let v = meter.value_at(t);
                prop_assert!(v >= last);
                prop_assert!(v <= target);
                last = v;
            }
        }
    }
}
