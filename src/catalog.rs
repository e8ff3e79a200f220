use crate::config;
use crate::i18n::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalizedText {
    pub de: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    pub const fn new(de: &'static str, en: &'static str) -> Self {
        Self { de, en }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::De => self.de,
            Language::En => self.en,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: LocalizedText,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: LocalizedText,
    pub category_id: &'static str,
    pub image: Option<&'static str>,
    /// Product page path on the external shop.
    pub path: &'static str,
}

impl Product {
    /// Absolute product page URL, opened in a new tab.
    pub fn url(&self) -> String {
        format!("{}{}", config::SHOP_BASE_URL, self.path)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(&'static str),
}

impl CategoryFilter {
    pub fn matches(self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => product.category_id == id,
        }
    }
}

/// Products matching `filter`, in catalog order.
pub fn filter_products(products: &[Product], filter: CategoryFilter) -> Vec<&Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

pub fn category_name(id: &str, lang: Language) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.get(lang))
}

pub static CATEGORIES: [Category; 9] = [
    Category { id: "c1", name: LocalizedText::new("Riesling trocken & weiße Exoten", "Dry Riesling & White Exotics") },
    Category { id: "c2", name: LocalizedText::new("Riesling Classic & halbtrocken", "Classic & Semi-Dry Riesling") },
    Category { id: "c3", name: LocalizedText::new("Riesling restsüß", "Sweet Riesling") },
    Category { id: "c4", name: LocalizedText::new("Rosé & Blanc de Noir", "Rosé & Blanc de Noir") },
    Category { id: "c5", name: LocalizedText::new("Rotweine", "Red Wines") },
    Category { id: "c6", name: LocalizedText::new("Sekt, Secco, Saft & alkoholfrei", "Sparkling, Juice & Non-Alcoholic") },
    Category { id: "c7", name: LocalizedText::new("Probierpakete", "Tasting Packages") },
    Category { id: "c8", name: LocalizedText::new("Geschenk-Kartons", "Gift Boxes") },
    Category { id: "c9", name: LocalizedText::new("Baum-Patenschaften", "Tree Sponsorships") },
];

pub static PRODUCTS: [Product; 12] = [
    Product {
        id: "p1",
        name: LocalizedText::new("2023 Spätburgunder Rosé trocken 0,75L.", "2023 Pinot Noir Rosé Dry 0.75L."),
        category_id: "c4",
        image: Some("/images/rose_bottle.png"),
        path: "/ros-and-blanc-de-noir/2023-sptburgunder-ros-trocken-075-l",
    },
    Product {
        id: "p2",
        name: LocalizedText::new("2022 Riesling Sekt brut 0,75L.", "2022 Riesling Sparkling Brut 0.75L."),
        category_id: "c6",
        image: Some("/images/riesling_bottle.png"),
        path: "/sekt-secco-saft-and-alkoholfrei/2022-riesling-sekt-brut-075-l",
    },
    Product {
        id: "p3",
        name: LocalizedText::new("2023 Mythos/Blau Rotwein trocken 0,75L.", "2023 Mythos/Blue Red Wine Dry 0.75L."),
        category_id: "c5",
        image: Some("/images/red_bottle.png"),
        path: "/rotweine/2023-mythos-blau-rotwein-trocken-075-l",
    },
    Product {
        id: "p4",
        name: LocalizedText::new("6er \"Neue Entdeckungen\"", "6-pack \"New Discoveries\""),
        category_id: "c7",
        image: Some("/images/riesling_bottle.png"),
        path: "/probierpakete/6er-neue-entdeckungen",
    },
    Product {
        id: "p5",
        name: LocalizedText::new("6er \"Conny's Favorites\"", "6-pack \"Conny's Favorites\""),
        category_id: "c7",
        image: Some("/images/riesling_bottle.png"),
        path: "/probierpakete/6er-connys-favorites",
    },
    Product {
        id: "p6",
        name: LocalizedText::new("2024 Riesling Kabinett trocken 0,75L.", "2024 Riesling Kabinett Dry 0.75L."),
        category_id: "c1",
        image: Some("/images/riesling_bottle.png"),
        path: "/riesling-trocken-and-weie-exoten/2024-riesling-kabinett-trocken-075-l",
    },
    Product {
        id: "p7",
        name: LocalizedText::new("2024 Riesling CLASSIC 0,75L.", "2024 Riesling CLASSIC 0.75L."),
        category_id: "c2",
        image: Some("/images/riesling_bottle.png"),
        path: "/riesling-classic-and-halbtrocken/2024-riesling-classic-075-l",
    },
    Product {
        id: "p8",
        name: LocalizedText::new("2024 Riesling >Steillage< trocken 0,75L.", "2024 Riesling >Steep Slope< Dry 0.75L."),
        category_id: "c1",
        image: Some("/images/riesling_bottle.png"),
        path: "/riesling-trocken-and-weie-exoten/2024-riesling-steillage-trocken-075-l",
    },
    Product {
        id: "p9",
        name: LocalizedText::new("2023 Riesling >S< trocken 0,75L.", "2023 Riesling >S< Dry 0.75L."),
        category_id: "c1",
        image: Some("/images/riesling_bottle.png"),
        path: "/riesling-trocken-and-weie-exoten/2023-riesling-s-trocken-075-l",
    },
    Product {
        id: "p10",
        name: LocalizedText::new("2023 Rosa Chardonnay >Steillage< trocken 0,75L.", "2023 Pink Chardonnay >Steep Slope< Dry 0.75L."),
        category_id: "c1",
        image: Some("/images/riesling_bottle.png"),
        path: "/riesling-trocken-and-weie-exoten/2023-rosa-chardonnay-steillage-trocken-075-l",
    },
    Product {
        id: "p11",
        name: LocalizedText::new("2024 \"Elinor's VIRGIN Wildsau\" 0,75L.", "2024 \"Elinor's VIRGIN Wildsau\" 0.75L."),
        category_id: "c6",
        image: Some("/images/rose_bottle.png"),
        path: "/sekt-secco-saft-and-alkoholfrei/2024-elinors-virgin-wildsau-075-l",
    },
    Product {
        id: "p12",
        name: LocalizedText::new("2024 Riesling TRAUBENSAFT 0,75L.", "2024 Riesling GRAPE JUICE 0.75L."),
        category_id: "c6",
        image: Some("/images/riesling_bottle.png"),
        path: "/sekt-secco-saft-and-alkoholfrei/2024-riesling-traubensaft-075-l",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<&'static str> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn all_returns_everything_in_order() {
        let all = filter_products(&PRODUCTS, CategoryFilter::All);
        assert_eq!(all.len(), PRODUCTS.len());
        assert_eq!(ids(&all), PRODUCTS.iter().map(|p| p.id).collect::<Vec<_>>());
    }

    #[test]
    fn category_returns_exact_subset_in_order() {
        let dry = filter_products(&PRODUCTS, CategoryFilter::Category("c1"));
        assert_eq!(ids(&dry), vec!["p6", "p8", "p9", "p10"]);

        let sparkling = filter_products(&PRODUCTS, CategoryFilter::Category("c6"));
        assert_eq!(ids(&sparkling), vec!["p2", "p11", "p12"]);
    }

    #[test]
    fn every_category_filter_is_an_exact_partition() {
        let expected: [(&str, &[&str]); 9] = [
            ("c1", &["p6", "p8", "p9", "p10"]),
            ("c2", &["p7"]),
            ("c3", &[]),
            ("c4", &["p1"]),
            ("c5", &["p3"]),
            ("c6", &["p2", "p11", "p12"]),
            ("c7", &["p4", "p5"]),
            ("c8", &[]),
            ("c9", &[]),
        ];
        let mut total = 0;
        for (id, products) in expected {
            let hits = filter_products(&PRODUCTS, CategoryFilter::Category(id));
            assert_eq!(ids(&hits), products, "{}", id);
            total += hits.len();
        }
        assert_eq!(total, PRODUCTS.len());
    }

    #[test]
    fn empty_categories_yield_nothing() {
        assert!(filter_products(&PRODUCTS, CategoryFilter::Category("c3")).is_empty());
        assert!(filter_products(&PRODUCTS, CategoryFilter::Category("nope")).is_empty());
    }

    #[test]
    fn products_reference_known_categories() {
        for product in PRODUCTS {
            assert!(category_name(product.category_id, Language::De).is_some(), "{}", product.id);
        }
        assert_eq!(category_name("c5", Language::En), Some("Red Wines"));
        assert_eq!(category_name("c5", Language::De), Some("Rotweine"));
    }

    #[test]
    fn urls_are_built_on_the_shop_host() {
        for product in PRODUCTS {
            assert!(product.path.starts_with('/'), "{}", product.id);
            assert_eq!(product.url(), format!("{}{}", config::SHOP_BASE_URL, product.path));
        }
        let rose = PRODUCTS.iter().find(|p| p.id == "p1").map(Product::url);
        assert_eq!(
            rose.as_deref(),
            Some("https://www.engelmann-schlepper.de/ros-and-blanc-de-noir/2023-sptburgunder-ros-trocken-075-l")
        );
    }
}
