use yew::prelude::*;

use crate::hooks::scroll::use_scroll_progress;
use crate::i18n::{use_locale, ProtocolStep};
use crate::motion::scroll::presets;

#[derive(Properties, PartialEq)]
struct ProtocolCardProps {
    index: usize,
    step: ProtocolStep,
    tag: String,
    node_ref: NodeRef,
    /// The card that slides over this one; `None` for the last card.
    next: Option<NodeRef>,
}

#[function_component(ProtocolCard)]
fn protocol_card(props: &ProtocolCardProps) -> Html {
    let (region, tween) = presets::stacking_card();
    let trigger = props.next.clone().unwrap_or_default();
    let progress = use_scroll_progress(&trigger, region);

    let style = match props.next {
        Some(_) => tween.sample(progress).to_style(),
        None => String::new(),
    };

    html! {
        <div class="protocol-card" ref={props.node_ref.clone()}>
            <div class="protocol-inner" {style}>
                <div class="protocol-copy">
                    <div class="protocol-art">{ decoration(props.index) }</div>
                    <div>
                        <span class="protocol-step">
                            { format!("{} / {}", props.step.step, props.tag) }
                        </span>
                        <h3>{ &props.step.title }</h3>
                        <p>{ &props.step.desc }</p>
                    </div>
                </div>
                <div class="protocol-image">
                    <img src={props.step.img.clone()} alt={props.step.title.clone()} loading="lazy" />
                </div>
            </div>
        </div>
    }
}

fn decoration(index: usize) -> Html {
    match index {
        0 => html! {
            <svg width="240" height="240" viewBox="0 0 100 100" class="deco deco-sun">
                <circle cx="50" cy="50" r="40" stroke="currentColor" stroke-width="0.5"
                    fill="none" stroke-dasharray="4 8" class="deco-breathe" />
                { for (0..12).map(|i| html! {
                    <path d="M 50 10 L 50 15" stroke="currentColor" stroke-width="1"
                        stroke-linecap="round" transform={format!("rotate({} 50 50)", i * 30)} />
                }) }
            </svg>
        },
        1 => html! {
            <svg width="200" height="200" viewBox="0 0 100 100" class="deco deco-grapes">
                <path d="M20,20 Q40,10 60,30 T80,60" fill="none" stroke="currentColor"
                    stroke-width="1" pathLength="1" class="deco-draw" />
                <circle cx="30" cy="30" r="8" fill="currentColor" opacity="0.6" class="deco-breathe" />
                <circle cx="50" cy="40" r="10" fill="currentColor" opacity="0.8" class="deco-breathe" />
                <circle cx="45" cy="60" r="9" fill="currentColor" opacity="0.7" class="deco-breathe" />
                <circle cx="70" cy="50" r="7" fill="currentColor" opacity="0.5" class="deco-breathe" />
            </svg>
        },
        _ => html! {
            <svg width="240" height="100" viewBox="0 0 240 100" class="deco deco-slope">
                <path d="M0 60 Q 40 40, 80 80 T 160 30 T 240 70" fill="none" stroke="currentColor"
                    stroke-width="1.5" pathLength="1" class="deco-draw" />
                <path d="M0 80 Q 50 60, 90 90 T 170 50 T 240 90" fill="none" stroke="currentColor"
                    stroke-width="0.5" opacity="0.5" pathLength="1" class="deco-draw late" />
            </svg>
        },
    }
}

/// Sticky full-height cards; each one recedes as the next slides over it.
#[function_component(Protocol)]
pub fn protocol() -> Html {
    let locale = use_locale();
    let bundle = locale.bundle();
    let steps = &bundle.protocol;
    let refs = use_memo(
        |count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        steps.len(),
    );

    html! {
        <section class="protocol">
            { for steps.iter().enumerate().map(|(i, step)| html! {
                <ProtocolCard
                    key={i}
                    index={i}
                    step={step.clone()}
                    tag={bundle.protocol_tag.clone()}
                    node_ref={refs[i].clone()}
                    next={refs.get(i + 1).cloned()}
                />
            }) }
            <style>
                {r#"
                .protocol-card {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                }
                .protocol-inner {
                    width: 100%;
                    max-width: 1200px;
                    height: 80vh;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    border-radius: 3rem;
                    overflow: hidden;
                    background: #f3efe6;
                    box-shadow: 0 24px 64px rgba(0, 0, 0, 0.12);
                    will-change: transform, opacity, filter;
                }
                .protocol-copy {
                    padding: 4rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                }
                .protocol-art {
                    color: #c0714f;
                }
                .protocol-step {
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.7rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #c0714f;
                }
                .protocol-copy h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 3rem;
                    margin: 1rem 0;
                }
                .protocol-copy p {
                    line-height: 1.7;
                    color: rgba(31, 42, 28, 0.7);
                }
                .protocol-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .deco-sun {
                    animation: dial-spin 60s linear infinite;
                }
                .deco-breathe {
                    transform-box: fill-box;
                    transform-origin: center;
                    animation: deco-breathe 2.5s ease-in-out infinite;
                }
                .deco-draw {
                    stroke-dasharray: 1;
                    stroke-dashoffset: 1;
                    animation: deco-draw 4s ease-in-out infinite alternate;
                }
                .deco-draw.late {
                    animation-delay: 0.5s;
                }
                @keyframes deco-breathe {
                    50% { transform: scale(1.15); }
                }
                @keyframes deco-draw {
                    to { stroke-dashoffset: 0; }
                }
                @media (max-width: 960px) {
                    .protocol-inner {
                        grid-template-columns: 1fr;
                    }
                    .protocol-image {
                        display: none;
                    }
                }
                @media (prefers-reduced-motion: reduce) {
                    .deco-sun,
                    .deco-breathe,
                    .deco-draw {
                        animation: none;
                        stroke-dashoffset: 0;
                    }
                }
                "#}
            </style>
        </section>
    }
}
