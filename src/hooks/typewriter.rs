use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::motion::phase::Generation;
use crate::motion::typewriter::Typewriter;

pub enum TypewriterAction {
    Tick { generation: Generation },
    Reset(String),
    Finish,
}

impl Reducible for Typewriter {
    type Action = TypewriterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            // A tick queued before the last reset belongs to a dead run.
            TypewriterAction::Tick { generation } if generation == self.generation() => {
                if !next.tick() {
                    return self;
                }
            }
            TypewriterAction::Tick { .. } => return self,
            TypewriterAction::Reset(target) => {
                debug!("Typewriter reset to {:?}", target);
                next.reset(target);
            }
            TypewriterAction::Finish if !self.is_complete() => next.finish(),
            TypewriterAction::Finish => return self,
        }
        Rc::new(next)
    }
}

/// Types `target` out one character every `tick_ms`. A new target restarts
/// from the empty string; `instant` skips straight to the full text.
#[hook]
pub fn use_typewriter(target: &str, tick_ms: u32, instant: bool) -> String {
    let typewriter = use_reducer({
        let target = target.to_string();
        move || Typewriter::new(target)
    });

    {
        let typewriter = typewriter.clone();
        let deps = (
            target.to_string(),
            typewriter.generation(),
            typewriter.cursor(),
            instant,
        );
        use_effect_with_deps(
            move |(target, generation, _, instant)| {
                let mut pending = None;
                if typewriter.target() != target.as_str() {
                    typewriter.dispatch(TypewriterAction::Reset(target.clone()));
                } else if *instant {
                    typewriter.dispatch(TypewriterAction::Finish);
                } else if !typewriter.is_complete() {
                    let generation = *generation;
                    let handle = typewriter.clone();
                    pending = Some(Timeout::new(tick_ms, move || {
                        handle.dispatch(TypewriterAction::Tick { generation });
                    }));
                } else {
                    debug!("Typewriter finished {:?}", target);
                }
                move || drop(pending)
            },
            deps,
        );
    }

    shown_text(&typewriter, target)
}

/// Text to render for `target`. Empty while the effect has not caught up
/// with a new target yet.
fn shown_text(typewriter: &Typewriter, target: &str) -> String {
    if typewriter.target() != target {
        return String::new();
    }
    typewriter.visible().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_ticks_are_dropped_after_reset() {
        let tw = Rc::new(Typewriter::new("Ökologie"));
        let old_generation = tw.generation();
        let tw = tw.reduce(TypewriterAction::Tick { generation: old_generation });
        assert_eq!(tw.visible(), "Ö");

        let tw = tw.reduce(TypewriterAction::Reset("Ecology".into()));
        let before = tw.clone();
        let tw = tw.reduce(TypewriterAction::Tick { generation: old_generation });
        assert!(Rc::ptr_eq(&before, &tw));
        assert_eq!(tw.visible(), "");

        let generation = tw.generation();
        let tw = tw.reduce(TypewriterAction::Tick { generation });
        assert_eq!(tw.visible(), "E");
    }

    #[test]
    fn ticks_past_the_end_keep_the_same_state() {
        let mut tw = Rc::new(Typewriter::new("ab"));
        for _ in 0..2 {
            let generation = tw.generation();
            tw = tw.reduce(TypewriterAction::Tick { generation });
        }
        assert!(tw.is_complete());
        let generation = tw.generation();
        let after = tw.clone().reduce(TypewriterAction::Tick { generation });
        assert!(Rc::ptr_eq(&tw, &after));
    }

    #[test]
    fn stale_target_renders_nothing() {
        let tw = Rc::new(Typewriter::new("Handlese")).reduce(TypewriterAction::Finish);
        assert_eq!(shown_text(&tw, "Handlese"), "Handlese");
        assert_eq!(shown_text(&tw, "Hand harvest"), "");
    }

    #[test]
    fn matching_target_renders_the_typed_prefix() {
        let tw = Rc::new(Typewriter::new("Mosel"));
        let generation = tw.generation();
        let tw = tw.reduce(TypewriterAction::Tick { generation });
        let generation = tw.generation();
        let tw = tw.reduce(TypewriterAction::Tick { generation });
        assert_eq!(shown_text(&tw, "Mosel"), "Mo");
    }

    #[test]
    fn finish_reveals_everything() {
        let tw = Rc::new(Typewriter::new("Weinberg")).reduce(TypewriterAction::Finish);
        assert_eq!(tw.visible(), "Weinberg");
        let again = tw.clone().reduce(TypewriterAction::Finish);
        assert!(Rc::ptr_eq(&tw, &again));
    }
}
