use log::{error, info};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod i18n;
mod motion {
    pub mod count_up;
    pub mod phase;
    pub mod scroll;
    pub mod shuffler;
    pub mod typewriter;
}
mod hooks {
    pub mod count_up;
    pub mod scroll;
    pub mod shuffler;
    pub mod typewriter;
    pub mod visibility;
}
mod components {
    pub mod feature_cards;
    pub mod footer;
    pub mod protocol;
    pub mod reveal;
}
mod pages {
    pub mod home;
    pub mod shop;
}

use components::footer::Footer;
use hooks::visibility::use_active_section;
use i18n::{use_locale, Catalog, Language, LocaleAction, LocaleProvider};
use pages::{home::Home, shop::Shop};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/shop")]
    Shop,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Shop => {
            info!("Rendering Shop page");
            html! { <Shop /> }
        }
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let locale = use_locale();
    let t = &locale.bundle().nav;
    let lang = locale.lang();
    let route = use_route::<Route>();
    let is_shop = route == Some(Route::Shop);
    let (_, scroll_y) = use_window_scroll();
    let solid = is_shop || scroll_y > config::NAV_SCROLL_THRESHOLD;
    let active = use_active_section(!is_shop);
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let set_lang = |target: Language| {
        let locale = locale.clone();
        Callback::from(move |_: MouseEvent| locale.dispatch(LocaleAction::Set(target)))
    };
    let toggle_lang = {
        let locale = locale.clone();
        Callback::from(move |_: MouseEvent| locale.dispatch(LocaleAction::Toggle))
    };

    let labels = [&t.collection, &t.experience, &t.manifesto];
    let section_links = |class: &'static str, on_click: Option<Callback<MouseEvent>>| -> Html {
        if is_shop {
            html! {
                <span onclick={on_click}>
                    <Link<Route> to={Route::Home} classes={class}>{ &t.home }</Link<Route>>
                </span>
            }
        } else {
            config::TRACKED_SECTIONS
                .iter()
                .zip(labels)
                .map(|(id, label)| {
                    let current = active.as_deref() == Some(*id);
                    html! {
                        <a href={format!("#{id}")}
                            class={classes!(class, current.then_some("active"))}
                            onclick={on_click.clone()}>
                            { label }
                        </a>
                    }
                })
                .collect::<Html>()
        }
    };

    html! {
        <>
            <nav class={classes!("top-nav", solid.then_some("solid"))}>
                <div class="nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">{"ENGELMANN."}</Link<Route>>
                    <div class="nav-links">
                        { section_links("nav-link", None) }
                        <Link<Route> to={Route::Shop} classes="nav-link nav-shop">{ &t.shop }</Link<Route>>
                        <div class="lang-switch">
                            { for Language::ALL.iter().map(|&option| html! {
                                <button
                                    class={classes!("lang-button", (option == lang).then_some("active"))}
                                    onclick={set_lang(option)}>
                                    { option.code() }
                                </button>
                            }) }
                        </div>
                    </div>
                    <div class="nav-mobile">
                        <button class="lang-button" onclick={toggle_lang}
                            aria-label={format!("{} {}", t.switch_language, lang.other())}>
                            { lang.other().code() }
                        </button>
                        <button class={classes!("burger-menu", (*menu_open).then_some("open"))}
                            onclick={toggle_menu}
                            aria-label={if *menu_open { t.close_menu.clone() } else { t.open_menu.clone() }}
                            aria-expanded={(*menu_open).to_string()}>
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    </div>
                </div>
            </nav>
            <div class={classes!("mobile-menu", (*menu_open).then_some("open"))}
                role="dialog" aria-modal="true">
                { section_links("mobile-link", Some(close_menu.clone())) }
                <span onclick={close_menu}>
                    <Link<Route> to={Route::Shop} classes="mobile-link nav-shop">{ &t.shop }</Link<Route>>
                </span>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 50;
                    width: 95%;
                    max-width: 1100px;
                    padding: 1.5rem 1rem;
                    border-radius: 999px;
                    border: 1px solid transparent;
                    color: #fff;
                    transition: all 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94);
                }
                .top-nav.solid {
                    padding: 1rem 2rem;
                    color: #1f2a1c;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(24px);
                    border-color: rgba(255, 255, 255, 0.4);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 4rem;
                }
                .nav-logo {
                    font-family: 'Inter', sans-serif;
                    font-size: 1.5rem;
                    letter-spacing: -0.02em;
                    color: inherit;
                    text-decoration: none;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.65rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .nav-link {
                    color: inherit;
                    opacity: 0.7;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .nav-link:hover {
                    opacity: 1;
                    transform: translateY(-1px);
                }
                .nav-link.active {
                    opacity: 1;
                    font-weight: 700;
                }
                .top-nav.solid .nav-link.active,
                .nav-shop {
                    color: #c0714f;
                    opacity: 1;
                    font-weight: 700;
                }
                .lang-switch {
                    display: flex;
                    gap: 0.5rem;
                    margin-left: 1rem;
                }
                .lang-button {
                    background: none;
                    border: none;
                    color: inherit;
                    font: inherit;
                    opacity: 0.6;
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.4rem;
                    cursor: pointer;
                }
                .lang-button.active {
                    opacity: 1;
                    font-weight: 700;
                    background: rgba(127, 127, 127, 0.12);
                }
                .nav-mobile {
                    display: none;
                    align-items: center;
                    gap: 1rem;
                }
                .burger-menu {
                    background: none;
                    border: none;
                    display: flex;
                    flex-direction: column;
                    gap: 5px;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: currentColor;
                    color: inherit;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .burger-menu.open span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }
                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }
                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    padding: 8rem 2rem 2rem;
                    background: #2e4a2b;
                    color: #f3efe6;
                    opacity: 0;
                    transform: translateY(-1rem);
                    pointer-events: none;
                    transition: all 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94);
                }
                .mobile-menu.open {
                    opacity: 1;
                    transform: none;
                    pointer-events: auto;
                }
                .mobile-link {
                    font-family: 'Inter', sans-serif;
                    font-size: 2.25rem;
                    color: inherit;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .nav-mobile {
                        display: flex;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub catalog: &'static Catalog,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <LocaleProvider catalog={props.catalog}>
            <BrowserRouter>
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </BrowserRouter>
        </LocaleProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {e}").into());
    }

    info!("Starting application");
    match i18n::init() {
        Ok(catalog) => {
            yew::Renderer::<App>::with_props(AppProps { catalog }).render();
        }
        Err(e) => error!("Not mounting, content failed to load: {e}"),
    }
}
