use gloo_render::request_animation_frame;
use yew::prelude::*;

use crate::hooks::scroll::use_reveal;
use crate::hooks::visibility::use_reduced_motion;
use crate::motion::scroll::{presets, Tween};

fn tween_style(tween: &Tween, shown: bool, duration_ms: u32, delay_ms: u32, animate: bool) -> String {
    let state = tween.sample(if shown { 1.0 } else { 0.0 });
    if !animate {
        return state.to_style();
    }
    let timing = tween.ease.css_timing();
    format!(
        "{} transition: opacity {duration_ms}ms {timing} {delay_ms}ms, transform {duration_ms}ms {timing} {delay_ms}ms;",
        state.to_style()
    )
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades its children in once they scroll past the reveal line.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let (anchor, tween) = presets::reveal();
    let passed = use_reveal(&node, anchor);
    let reduced = use_reduced_motion();

    let style = tween_style(&tween, passed || reduced, 1_200, 0, !reduced);

    html! {
        <div class={props.class.clone()} ref={node} {style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EntranceProps {
    /// Position in the stagger sequence.
    pub order: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Rises into place right after mount, staggered by `order`.
#[function_component(Entrance)]
pub fn entrance(props: &EntranceProps) -> Html {
    let mounted = use_state_eq(|| false);
    let reduced = use_reduced_motion();

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                // Wait one frame so the hidden state is painted before the transition.
                let frame = request_animation_frame(move |_| mounted.set(true));
                move || drop(frame)
            },
            (),
        );
    }

    let tween = presets::hero_entrance();
    let style = tween_style(&tween, *mounted || reduced, 1_400, 200 + 100 * props.order, !reduced);

    html! {
        <div class={props.class.clone()} {style}>
            { for props.children.iter() }
        </div>
    }
}
