use yew::prelude::*;

use crate::config;
use crate::hooks::count_up::use_count_up;
use crate::hooks::shuffler::use_shuffler;
use crate::hooks::typewriter::use_typewriter;
use crate::hooks::visibility::{use_in_view, use_reduced_motion};
use crate::i18n::use_locale;
use crate::motion::shuffler::card_transform;

/// "Winzer in 7 Tagen": the week's activities cycling through a card stack.
#[function_component(ShufflerCard)]
pub fn shuffler_card() -> Html {
    let locale = use_locale();
    let t = &locale.bundle().features;
    let reduced = use_reduced_motion();
    let cards = use_shuffler(&t.f1_cards, config::SHUFFLE_INTERVAL_MS, reduced);

    html! {
        <div class="feature-card shuffler-card">
            <div class="feature-head">
                <h3>{ &t.f1_title }</h3>
                <p>{ &t.f1_sub }</p>
            </div>
            <div class="shuffle-stack">
                { for cards.iter().enumerate().map(|(i, text)| html! {
                    <div key={text.clone()} class="shuffle-item" style={card_transform(i).to_style()}>
                        <p>
                            <span>{ text }</span>
                            <span class="arrow">{"→"}</span>
                        </p>
                    </div>
                }) }
            </div>
        </div>
    }
}

/// The vineyard journal line, typed out one character at a time.
#[function_component(TypewriterCard)]
pub fn typewriter_card() -> Html {
    let locale = use_locale();
    let t = &locale.bundle().features;
    let reduced = use_reduced_motion();
    let text = use_typewriter(&t.f2_log, config::TYPEWRITER_TICK_MS, reduced);

    html! {
        <div class="feature-card typewriter-card">
            <div class="feature-head">
                <h3>{ &t.f2_title }</h3>
                <div class="live-tag">
                    <span class="live-dot"></span>
                    <span>{ format!("{} - Log", t.f2_title) }</span>
                </div>
            </div>
            <div class="typewriter-body">
                <p aria-live="polite">
                    { text }
                    <span class="caret"></span>
                </p>
            </div>
        </div>
    }
}

/// Tree sponsorship meter. Starts counting the first time it is seen.
#[function_component(CounterCard)]
pub fn counter_card() -> Html {
    let locale = use_locale();
    let t = &locale.bundle().features;
    let reduced = use_reduced_motion();
    let meter_ref = use_node_ref();
    let seen = use_in_view(&meter_ref);
    let count = use_count_up(
        config::TREE_COUNT_TARGET,
        config::COUNT_UP_DURATION_MS,
        seen,
        reduced,
    );

    html! {
        <div class="feature-card counter-card">
            <div class="feature-head">
                <h3>{ &t.f3_title }</h3>
                <p>{ &t.f3_sub }</p>
            </div>
            <div class="counter-row">
                <div class="counter-dial" ref={meter_ref}>
                    <svg width="150" height="150" viewBox="0 0 100 100" class="dial-ring">
                        <circle cx="50" cy="50" r="48" fill="none" stroke="currentColor"
                            stroke-width="0.5" stroke-dasharray="2 4" />
                    </svg>
                    <span class={classes!("counter-value", seen.then_some("visible"))}>
                        { count }
                    </span>
                </div>
                <div class="counter-label">
                    <p>{ &t.f3_counter }</p>
                    <p class="muted">{ &t.f3_counter_sub }</p>
                </div>
            </div>
            <div class="counter-foot">
                <p>{ &t.f3_desc1 }<br />{ &t.f3_desc2 }</p>
                <a href="#kollektion" class="pill-link">
                    <span>{ &t.f3_cta }</span>
                    <span class="arrow">{"→"}</span>
                </a>
            </div>
        </div>
    }
}

#[function_component(FeatureCards)]
pub fn feature_cards() -> Html {
    html! {
        <section id="features" class="features">
            <div class="features-grid">
                <ShufflerCard />
                <TypewriterCard />
                <CounterCard />
            </div>
            <style>
                {r#"
                .features {
                    padding: 8rem 2rem;
                    background: #f3efe6;
                }
                .features-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .feature-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 2rem;
                    padding: 2.5rem;
                    min-height: 28rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    background: #fff;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.06);
                }
                .feature-head h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.75rem;
                    margin: 0 0 0.5rem;
                }
                .feature-head p,
                .muted {
                    color: rgba(31, 42, 28, 0.6);
                    font-size: 0.9rem;
                }
                .shuffle-stack {
                    position: relative;
                    height: 12rem;
                    margin-top: 4rem;
                }
                .shuffle-item {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    border-radius: 1rem;
                    background: #fff;
                    border: 1px solid rgba(31, 42, 28, 0.08);
                    padding: 1.25rem 1.5rem;
                    transition: all 0.7s cubic-bezier(0.34, 1.56, 0.64, 1);
                }
                .shuffle-item p {
                    display: flex;
                    justify-content: space-between;
                    margin: 0;
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.8rem;
                }
                .typewriter-card {
                    background: #1f2a1c;
                    color: #f3efe6;
                }
                .live-tag {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.65rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .live-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: #c0714f;
                    animation: badge-pulse 1.5s ease-in-out infinite;
                }
                .typewriter-body p {
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.85rem;
                    line-height: 1.8;
                    min-height: 8rem;
                }
                .caret {
                    display: inline-block;
                    width: 0.5em;
                    height: 1em;
                    margin-left: 2px;
                    vertical-align: text-bottom;
                    background: #c0714f;
                    animation: caret-blink 1s steps(1) infinite;
                }
                .counter-row {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .counter-dial {
                    position: relative;
                    width: 150px;
                    height: 150px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .dial-ring {
                    position: absolute;
                    inset: 0;
                    color: #c0714f;
                    animation: dial-spin 30s linear infinite;
                }
                .counter-value {
                    font-family: 'Playfair Display', serif;
                    font-size: 3.5rem;
                    font-style: italic;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.8s ease 0.2s, transform 0.8s ease 0.2s;
                }
                .counter-value.visible {
                    opacity: 1;
                    transform: none;
                }
                .counter-foot p {
                    font-size: 0.85rem;
                    line-height: 1.6;
                }
                .pill-link {
                    display: inline-flex;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 999px;
                    background: #1f2a1c;
                    color: #f3efe6;
                    text-decoration: none;
                    font-size: 0.8rem;
                }
                @keyframes caret-blink {
                    50% { opacity: 0; }
                }
                @keyframes dial-spin {
                    to { transform: rotate(360deg); }
                }
                @media (max-width: 960px) {
                    .features-grid {
                        grid-template-columns: 1fr;
                    }
                }
                @media (prefers-reduced-motion: reduce) {
                    .shuffle-item,
                    .counter-value {
                        transition: none;
                    }
                    .dial-ring,
                    .caret,
                    .live-dot {
                        animation: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
