use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::motion::phase::Generation;
use crate::motion::shuffler::Shuffler;

/// The shuffler plus the list it was last reset from, so a new list coming in
/// through props can be told apart from the rotated copy.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleState {
    source: Vec<String>,
    shuffler: Shuffler,
}

impl ShuffleState {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            shuffler: Shuffler::new(items.clone()),
            source: items,
        }
    }
}

pub enum ShuffleAction {
    Rotate { generation: Generation },
    Reset(Vec<String>),
}

impl Reducible for ShuffleState {
    type Action = ShuffleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ShuffleAction::Rotate { generation }
                if generation == self.shuffler.generation() && self.shuffler.items().len() > 1 =>
            {
                let mut next = (*self).clone();
                next.shuffler.rotate();
                Rc::new(next)
            }
            ShuffleAction::Rotate { .. } => self,
            ShuffleAction::Reset(items) => {
                let mut next = (*self).clone();
                next.shuffler.reset(items.clone());
                next.source = items;
                Rc::new(next)
            }
        }
    }
}

/// Cycles `items` every `interval_ms`, last card to the front. Returns the
/// current order; a new `items` list replaces the stack wholesale.
#[hook]
pub fn use_shuffler(items: &[String], interval_ms: u32, paused: bool) -> Vec<String> {
    let state = use_reducer({
        let items = items.to_vec();
        move || ShuffleState::new(items)
    });

    {
        let state = state.clone();
        use_effect_with_deps(
            move |items: &Vec<String>| {
                if state.source != *items {
                    debug!("Shuffler reset with {} cards", items.len());
                    state.dispatch(ShuffleAction::Reset(items.clone()));
                }
                || ()
            },
            items.to_vec(),
        );
    }

    {
        let state = state.clone();
        let generation = state.shuffler.generation();
        let len = state.shuffler.items().len();
        use_effect_with_deps(
            move |&(generation, len, paused)| {
                let interval = (!paused && len > 1).then(|| {
                    Interval::new(interval_ms, move || {
                        state.dispatch(ShuffleAction::Rotate { generation });
                    })
                });
                move || drop(interval)
            },
            (generation, len, paused),
        );
    }

    shown_cards(&state, items)
}

/// Card order to render for `items`. A list the reducer has not been reset
/// to yet is shown as given.
fn shown_cards(state: &ShuffleState, items: &[String]) -> Vec<String> {
    if state.source.as_slice() != items {
        return items.to_vec();
    }
    state.shuffler.items().to_vec()
}
