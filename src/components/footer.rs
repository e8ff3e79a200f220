use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::use_locale;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let locale = use_locale();
    let t = &locale.bundle().footer;

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h2>{ &t.brand }</h2>
                    <p>{ &t.desc }</p>
                </div>
                <div>
                    <p class="footer-title">{ &t.nav_title }</p>
                    <ul>
                        <li><a href="/#kollektion">{ &t.nav1 }</a></li>
                        <li><a href="/#philosophie">{ &t.nav2 }</a></li>
                        <li>
                            <Link<Route> to={Route::Shop}>{ &t.nav3 }</Link<Route>>
                        </li>
                    </ul>
                </div>
                <div>
                    <p class="footer-title">{ &t.contact_title }</p>
                    <ul>
                        <li>{ &t.contact1 }</li>
                        <li>{ &t.contact2 }</li>
                        <li>{ &t.contact3 }</li>
                        <li><a href={format!("mailto:{}", t.email)}>{ &t.email }</a></li>
                    </ul>
                </div>
                <div>
                    <p class="footer-title">{ &t.hours_title }</p>
                    <ul>
                        <li>{ &t.hours1 }</li>
                        <li>{ &t.hours2 }</li>
                        <li>{ &t.hours3 }</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <div class="footer-badge">
                    <span class="badge-dot"></span>
                    <span>{ &t.bio }</span>
                </div>
                <div class="footer-legal">
                    <a href="#">{ &t.imprint }</a>
                    <a href="#">{ &t.privacy }</a>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #1f2a1c;
                    color: #f3efe6;
                    border-radius: 3rem 3rem 0 0;
                    padding: 5rem 2rem 2.5rem;
                    margin-top: 4rem;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 3rem;
                }
                .footer-brand h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: 2.5rem;
                    margin: 0 0 1rem;
                }
                .footer-brand p {
                    color: rgba(243, 239, 230, 0.6);
                    max-width: 28rem;
                    line-height: 1.6;
                }
                .footer-title {
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.7rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #c0714f;
                    margin-bottom: 1.25rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    font-size: 0.9rem;
                }
                .site-footer a {
                    color: inherit;
                    text-decoration: none;
                    opacity: 0.75;
                    transition: opacity 0.3s ease;
                }
                .site-footer a:hover {
                    opacity: 1;
                }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 4rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(243, 239, 230, 0.1);
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    font-size: 0.75rem;
                }
                .footer-badge {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-family: 'IBM Plex Mono', monospace;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                }
                .badge-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #7fb069;
                    animation: badge-pulse 2s ease-in-out infinite;
                }
                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                }
                @keyframes badge-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                    .footer-bottom {
                        flex-direction: column;
                        align-items: flex-start;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
