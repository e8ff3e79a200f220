use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::feature_cards::FeatureCards;
use crate::components::protocol::Protocol;
use crate::components::reveal::{Entrance, Reveal};
use crate::hooks::scroll::use_scroll_progress;
use crate::i18n::use_locale;
use crate::motion::scroll::presets;
use crate::Route;

const HERO_IMAGE: &str =
    "https://images.pexels.com/photos/1277181/pexels-photo-1277181.jpeg?auto=compress&cs=tinysrgb&w=3840";
const PHILOSOPHY_IMAGE: &str =
    "https://images.pexels.com/photos/298694/pexels-photo-298694.jpeg?auto=compress&cs=tinysrgb&w=3840";

#[function_component(Hero)]
fn hero() -> Html {
    let locale = use_locale();
    let t = &locale.bundle().hero;

    html! {
        <section class="hero">
            <img class="hero-bg" src={HERO_IMAGE} alt="" />
            <div class="hero-shade"></div>
            <div class="hero-content">
                <Entrance order={0}>
                    <p class="hero-subtitle">{ &t.subtitle }</p>
                </Entrance>
                <Entrance order={1}>
                    <h1 class="hero-title-top">{ &t.title_top }</h1>
                </Entrance>
                <Entrance order={2}>
                    <h1 class="hero-title-bottom">{ &t.title_bottom }</h1>
                </Entrance>
                <Entrance order={3}>
                    <a class="hero-cta" href="#kollektion">
                        <span>{ &t.cta }</span>
                        <span class="arrow">{"→"}</span>
                    </a>
                </Entrance>
            </div>
        </section>
    }
}

#[function_component(TrustBar)]
fn trust_bar() -> Html {
    let locale = use_locale();
    let t = &locale.bundle().trust;

    html! {
        <div class="trust-bar">
            { for [&t.bio, &t.award, &t.hotel].into_iter().map(|label| html! {
                <div class="trust-item">
                    <span class="trust-dot"></span>
                    { label }
                </div>
            }) }
        </div>
    }
}

#[function_component(Philosophy)]
fn philosophy() -> Html {
    let locale = use_locale();
    let t = &locale.bundle().philosophy;
    let section = use_node_ref();
    let (region, tween) = presets::parallax();
    let progress = use_scroll_progress(&section, region);

    html! {
        <section id="philosophie" class="philosophy" ref={section}>
            <div class="philosophy-bg" style={tween.sample(progress).to_style()}>
                <img src={PHILOSOPHY_IMAGE} alt="" />
            </div>
            <div class="philosophy-content">
                <Reveal>
                    <p class="philosophy-pre">{ &t.pre }</p>
                </Reveal>
                <Reveal>
                    <h2 class="philosophy-top">{ &t.top }</h2>
                </Reveal>
                <Reveal>
                    <h2 class="philosophy-bottom">
                        { &t.bottom1 }<br />
                        <span class="accent">{ &t.bottom2 }</span>
                    </h2>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Collection)]
fn collection() -> Html {
    let locale = use_locale();
    let t = &locale.bundle().collection;

    let tiers = [
        (&t.c1_top, &t.c1_title, &t.c1_desc, &t.c1_price, false),
        (&t.c2_top, &t.c2_title, &t.c2_desc, &t.c2_price, true),
        (&t.c3_top, &t.c3_title, &t.c3_desc, &t.c3_price, false),
    ];

    html! {
        <section id="kollektion" class="collection">
            <div class="collection-head">
                <h2>{ &t.title }</h2>
                <p>{ &t.sub }</p>
            </div>
            <div class="collection-grid">
                { for tiers.into_iter().map(|(top, title, desc, price, featured)| html! {
                    <div class={classes!("collection-card", featured.then_some("featured"))}>
                        <p class="collection-top">{ top }</p>
                        <h3>{ title }</h3>
                        <p class="collection-desc">{ desc }</p>
                        <div class="collection-foot">
                            <p class="collection-price">{ price }</p>
                            <Link<Route> to={Route::Shop} classes="collection-cta">
                                { &t.cta }
                            </Link<Route>>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        |_| {
            info!("Home mounted");
            || ()
        },
        (),
    );

    html! {
        <div class="home">
            <Hero />
            <TrustBar />
            <FeatureCards />
            <Philosophy />
            <Protocol />
            <Collection />
            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100dvh;
                    display: flex;
                    align-items: flex-end;
                    overflow: hidden;
                    background: #111;
                }
                .hero-bg {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.6;
                }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #1f2a1c 0%, rgba(31, 42, 28, 0.4) 50%, transparent 100%);
                }
                .hero-content {
                    position: relative;
                    padding: 0 2rem 6rem;
                    max-width: 1400px;
                    width: 100%;
                    margin: 0 auto;
                }
                .hero-subtitle {
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.75rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: #c0714f;
                    margin-bottom: 1.5rem;
                }
                .hero-title-top {
                    font-family: 'Inter', sans-serif;
                    font-size: clamp(1.5rem, 3vw, 2.5rem);
                    text-transform: uppercase;
                    color: #f3efe6;
                    margin: 0 0 0.5rem;
                }
                .hero-title-bottom {
                    font-family: 'Playfair Display', serif;
                    font-style: italic;
                    font-size: clamp(4.5rem, 14vw, 14rem);
                    line-height: 0.9;
                    color: #f3efe6;
                    margin: 0 0 3rem;
                }
                .hero-cta {
                    display: inline-flex;
                    gap: 0.75rem;
                    padding: 1.1rem 2.25rem;
                    border-radius: 999px;
                    background: #c0714f;
                    color: #fff;
                    text-decoration: none;
                    transition: transform 0.3s ease;
                }
                .hero-cta:hover {
                    transform: scale(1.03);
                }
                .trust-bar {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 3rem;
                    padding: 1.5rem 2rem;
                    background: #1f2a1c;
                    color: rgba(243, 239, 230, 0.8);
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.7rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .trust-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .trust-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: #c0714f;
                }
                .philosophy {
                    position: relative;
                    overflow: hidden;
                    padding: 12rem 2rem;
                    background: #1f2a1c;
                    color: #f3efe6;
                }
                .philosophy-bg {
                    position: absolute;
                    inset: -30% 0 0 0;
                    opacity: 0.15;
                    will-change: transform;
                }
                .philosophy-bg img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .philosophy-content {
                    position: relative;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .philosophy-pre {
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.75rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: rgba(243, 239, 230, 0.5);
                }
                .philosophy-top {
                    font-size: clamp(1.5rem, 3vw, 2.5rem);
                    color: rgba(243, 239, 230, 0.6);
                }
                .philosophy-bottom {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(3rem, 7vw, 6rem);
                    line-height: 1.05;
                }
                .philosophy-bottom .accent {
                    font-style: italic;
                    color: #c0714f;
                }
                .collection {
                    padding: 8rem 2rem;
                    background: #f3efe6;
                }
                .collection-head {
                    max-width: 1200px;
                    margin: 0 auto 4rem;
                    text-align: center;
                }
                .collection-head h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(2.5rem, 5vw, 4rem);
                    margin: 0 0 1rem;
                }
                .collection-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    align-items: center;
                }
                .collection-card {
                    border-radius: 2rem;
                    padding: 3rem 2.5rem;
                    background: #fff;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.06);
                }
                .collection-card.featured {
                    background: #1f2a1c;
                    color: #f3efe6;
                    transform: scale(1.05);
                }
                .collection-top {
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.7rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #c0714f;
                }
                .collection-card h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 2rem;
                }
                .collection-desc {
                    line-height: 1.6;
                    opacity: 0.7;
                    min-height: 6rem;
                }
                .collection-foot {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-top: 2rem;
                }
                .collection-price {
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.85rem;
                }
                .collection-cta {
                    padding: 0.75rem 1.5rem;
                    border-radius: 999px;
                    background: #c0714f;
                    color: #fff;
                    text-decoration: none;
                    font-size: 0.8rem;
                }
                @media (max-width: 960px) {
                    .collection-grid {
                        grid-template-columns: 1fr;
                    }
                    .collection-card.featured {
                        transform: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
