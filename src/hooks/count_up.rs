use std::rc::Rc;

use gloo_render::request_animation_frame;
use log::debug;
use yew::prelude::*;

use crate::motion::count_up::CountUp;
use crate::motion::phase::Generation;

#[derive(Clone, Debug, PartialEq)]
pub struct CountUpState {
    meter: CountUp,
    // Bumped on every applied frame so the driver effect re-arms even when
    // the displayed number did not change.
    frames: u64,
}

pub enum CountUpAction {
    Frame { generation: Generation, timestamp: f64 },
    Retarget(u32),
    Finish,
}

impl Reducible for CountUpState {
    type Action = CountUpAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CountUpAction::Frame { generation, timestamp }
                if generation == self.meter.generation() && !self.meter.phase().is_complete() =>
            {
                next.meter.frame(timestamp);
                next.frames += 1;
            }
            CountUpAction::Frame { .. } => return self,
            CountUpAction::Retarget(target) => next.meter.retarget(target),
            CountUpAction::Finish if !self.meter.phase().is_complete() => next.meter.finish(),
            CountUpAction::Finish => return self,
        }
        Rc::new(next)
    }
}

/// Counts from 0 to `target` over `duration_ms` once `active` turns true.
/// `instant` shows the final number straight away.
#[hook]
pub fn use_count_up(target: u32, duration_ms: f64, active: bool, instant: bool) -> u32 {
    let state = use_reducer(move || CountUpState {
        meter: CountUp::new(target, duration_ms),
        frames: 0,
    });

    {
        let state = state.clone();
        let deps = (target, state.meter.generation(), state.frames, active, instant);
        use_effect_with_deps(
            move |&(target, generation, _, active, instant)| {
                let mut frame = None;
                if state.meter.target() != target {
                    state.dispatch(CountUpAction::Retarget(target));
                } else if instant {
                    state.dispatch(CountUpAction::Finish);
                } else if active && !state.meter.phase().is_complete() {
                    let handle = state.clone();
                    frame = Some(request_animation_frame(move |timestamp| {
                        handle.dispatch(CountUpAction::Frame { generation, timestamp });
                    }));
                } else if state.meter.phase().is_complete() {
                    debug!("Count-up settled at {}", state.meter.value());
                }
                move || drop(frame)
            },
            deps,
        );
    }

    state.meter.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Rc<CountUpState> {
        Rc::new(CountUpState {
            meter: CountUp::new(130, 2_500.0),
            frames: 0,
        })
    }

    #[test]
    fn frames_advance_and_rearm() {
        let state = fresh().reduce(CountUpAction::Frame { generation: 0, timestamp: 100.0 });
        assert_eq!(state.frames, 1);
        assert_eq!(state.meter.value(), 0);

        let state = state.reduce(CountUpAction::Frame { generation: 0, timestamp: 2_600.0 });
        assert_eq!(state.meter.value(), 130);
        assert!(state.meter.phase().is_complete());

        let done = state.clone().reduce(CountUpAction::Frame { generation: 0, timestamp: 9_000.0 });
        assert!(Rc::ptr_eq(&state, &done));
    }

    #[test]
    fn frames_from_before_a_retarget_are_ignored() {
        let state = fresh()
            .reduce(CountUpAction::Frame { generation: 0, timestamp: 0.0 })
            .reduce(CountUpAction::Retarget(40));
        let before = state.clone();
        let state = state.reduce(CountUpAction::Frame { generation: 0, timestamp: 1_000.0 });
        assert!(Rc::ptr_eq(&before, &state));
        assert_eq!(state.meter.value(), 0);
        assert_eq!(state.meter.target(), 40);
    }

    #[test]
    fn finish_jumps_to_target() {
        let state = fresh().reduce(CountUpAction::Finish);
        assert_eq!(state.meter.value(), 130);
    }
}
