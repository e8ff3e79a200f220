use log::debug;
use yew::prelude::*;

use crate::catalog::{self, CategoryFilter, Product, CATEGORIES, PRODUCTS};
use crate::i18n::{use_locale, Language};

const PLACEHOLDER_TEXTURE: &str =
    "https://images.pexels.com/photos/298694/pexels-photo-298694.jpeg?auto=compress&cs=tinysrgb&w=800";

#[derive(Properties, PartialEq)]
struct ProductCardProps {
    product: &'static Product,
    lang: Language,
    add_to_cart: String,
}

#[function_component(ProductCard)]
fn product_card(props: &ProductCardProps) -> Html {
    let product = props.product;
    let name = product.name.get(props.lang);
    let category = catalog::category_name(product.category_id, props.lang).unwrap_or_default();

    let image = match product.image {
        Some(src) => html! { <img class="product-image" src={src} alt={name} loading="lazy" /> },
        None => html! {
            <>
                <img class="product-texture" src={PLACEHOLDER_TEXTURE} alt="" />
                <svg class="product-grape" width="80" height="80" viewBox="0 0 24 24" fill="none"
                    stroke="currentColor" stroke-width="1">
                    <path d="M22 5V2l-5.89 5.89" />
                    <circle cx="16.6" cy="15.89" r="3" />
                    <circle cx="8.11" cy="7.4" r="3" />
                    <circle cx="12.35" cy="11.65" r="3" />
                    <circle cx="13.91" cy="5.85" r="3" />
                    <circle cx="18.15" cy="10.09" r="3" />
                    <circle cx="6.56" cy="13.2" r="3" />
                    <circle cx="10.8" cy="17.44" r="3" />
                    <circle cx="5" cy="19" r="3" />
                </svg>
            </>
        },
    };

    html! {
        <div class="product-card">
            <div class="product-media">{ image }</div>
            <div class="product-body">
                <p class="product-category">{ category }</p>
                <h3>{ name }</h3>
                <a class="product-link" href={product.url()} target="_blank" rel="noopener noreferrer">
                    { &props.add_to_cart }
                </a>
            </div>
        </div>
    }
}

fn pill_class(selected: CategoryFilter, value: CategoryFilter) -> Classes {
    classes!("pill", (selected == value).then_some("active"))
}

#[function_component(Shop)]
pub fn shop() -> Html {
    let locale = use_locale();
    let lang = locale.lang();
    let t = &locale.bundle().shop;
    let filter = use_state(CategoryFilter::default);

    let visible = catalog::filter_products(&PRODUCTS, *filter);

    let pill = |label: &'static str, value: CategoryFilter| {
        let class = pill_class(*filter, value);
        let filter = filter.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            debug!("Shop filter -> {:?}", value);
            filter.set(value);
        });
        html! {
            <button {class} {onclick}>
                { label }
            </button>
        }
    };

    html! {
        <div class="shop">
            <div class="shop-head">
                <p class="shop-sub">{ &t.sub }</p>
                <h1>{ &t.title }</h1>
            </div>
            <div class="pill-bar">
                { pill(&t.filter_all, CategoryFilter::All) }
                { for CATEGORIES.iter().map(|c| pill(c.name.get(lang), CategoryFilter::Category(c.id))) }
            </div>
            if visible.is_empty() {
                <p class="shop-empty">{ &t.empty_state }</p>
            } else {
                <div class="product-grid">
                    { for visible.into_iter().map(|product| html! {
                        <ProductCard
                            key={product.id}
                            {product}
                            {lang}
                            add_to_cart={t.add_to_cart.clone()}
                        />
                    }) }
                </div>
            }
            <style>
                {r#"
                .shop {
                    min-height: 100vh;
                    padding: 10rem 2rem 6rem;
                    background: #f3efe6;
                }
                .shop-head {
                    max-width: 1200px;
                    margin: 0 auto 3rem;
                }
                .shop-sub {
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.7rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: #c0714f;
                }
                .shop-head h1 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(3rem, 8vw, 6rem);
                    margin: 0.5rem 0 0;
                }
                .pill-bar {
                    max-width: 1200px;
                    margin: 0 auto 3rem;
                    display: flex;
                    gap: 0.75rem;
                    overflow-x: auto;
                    padding-bottom: 0.5rem;
                }
                .pill {
                    white-space: nowrap;
                    border-radius: 999px;
                    padding: 0.75rem 1.5rem;
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.65rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    background: #fff;
                    color: rgba(31, 42, 28, 0.6);
                    border: 1px solid rgba(31, 42, 28, 0.1);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .pill:hover {
                    border-color: rgba(31, 42, 28, 0.3);
                    color: #1f2a1c;
                }
                .pill.active {
                    background: #2e4a2b;
                    border-color: #2e4a2b;
                    color: #fff;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
                }
                .product-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 2rem;
                }
                .product-card {
                    border-radius: 2rem;
                    overflow: hidden;
                    background: #fff;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.06);
                    animation: product-in 0.4s cubic-bezier(0.25, 0.46, 0.45, 0.94);
                }
                .product-media {
                    position: relative;
                    aspect-ratio: 4 / 5;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #ebe5d8;
                    overflow: hidden;
                }
                .product-image {
                    height: 85%;
                    object-fit: contain;
                    transition: transform 0.7s ease;
                }
                .product-card:hover .product-image {
                    transform: scale(1.05);
                }
                .product-texture {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.2;
                }
                .product-grape {
                    position: relative;
                    color: #2e4a2b;
                }
                .product-body {
                    padding: 1.5rem;
                }
                .product-category {
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.6rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #c0714f;
                }
                .product-body h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.25rem;
                    min-height: 3.5rem;
                }
                .product-link {
                    display: block;
                    text-align: center;
                    padding: 0.85rem;
                    border-radius: 999px;
                    background: #1f2a1c;
                    color: #f3efe6;
                    text-decoration: none;
                    font-size: 0.8rem;
                }
                .shop-empty {
                    max-width: 1200px;
                    margin: 4rem auto;
                    text-align: center;
                    color: rgba(31, 42, 28, 0.6);
                }
                @keyframes product-in {
                    from { opacity: 0; transform: translateY(20px) scale(0.95); }
                }
                @media (prefers-reduced-motion: reduce) {
                    .product-card {
                        animation: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_selected_pill_is_active() {
        let selected = CategoryFilter::Category("c6");
        assert!(pill_class(selected, CategoryFilter::Category("c6")).contains("active"));
        assert!(!pill_class(selected, CategoryFilter::Category("c1")).contains("active"));
        assert!(!pill_class(selected, CategoryFilter::All).contains("active"));
        assert!(pill_class(CategoryFilter::All, CategoryFilter::All).contains("active"));
    }

    #[test]
    fn every_pill_keeps_its_base_class() {
        for value in [CategoryFilter::All, CategoryFilter::Category("c3")] {
            assert!(pill_class(CategoryFilter::All, value).contains("pill"));
        }
    }
}
