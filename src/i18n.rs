//! Locale bundles and the language selector.
//!
//! Copy for both languages ships inside the binary as JSON and is parsed once
//! at startup. Both bundles must have the exact same shape; a key that exists
//! in only one of them is a load error, never an empty string at runtime.

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use log::info;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use yew::prelude::*;

const DE_JSON: &str = include_str!("../assets/i18n/de.json");
const EN_JSON: &str = include_str!("../assets/i18n/en.json");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::De, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::De => "DE",
            Language::En => "EN",
        }
    }

    pub fn other(self) -> Language {
        match self {
            Language::De => Language::En,
            Language::En => Language::De,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse the {lang} bundle: {source}")]
    Parse {
        lang: Language,
        #[source]
        source: serde_json::Error,
    },
    #[error("locale bundles disagree on `{path}`")]
    Shape { path: String },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavCopy {
    pub collection: String,
    pub experience: String,
    pub manifesto: String,
    pub shop: String,
    pub home: String,
    pub open_menu: String,
    pub close_menu: String,
    pub switch_language: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroCopy {
    pub subtitle: String,
    pub title_top: String,
    pub title_bottom: String,
    pub cta: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrustCopy {
    pub bio: String,
    pub award: String,
    pub hotel: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureCopy {
    pub f1_title: String,
    pub f1_sub: String,
    /// Shuffler stack, front card first.
    pub f1_cards: Vec<String>,
    pub f2_title: String,
    /// Typewriter line.
    pub f2_log: String,
    pub f3_title: String,
    pub f3_sub: String,
    pub f3_counter: String,
    pub f3_counter_sub: String,
    pub f3_desc1: String,
    pub f3_desc2: String,
    pub f3_cta: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhilosophyCopy {
    pub pre: String,
    pub top: String,
    pub bottom1: String,
    pub bottom2: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProtocolStep {
    pub step: String,
    pub title: String,
    pub desc: String,
    pub img: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionCopy {
    pub title: String,
    pub sub: String,
    pub c1_top: String,
    pub c1_title: String,
    pub c1_desc: String,
    pub c1_price: String,
    pub c2_top: String,
    pub c2_title: String,
    pub c2_desc: String,
    pub c2_price: String,
    pub c3_top: String,
    pub c3_title: String,
    pub c3_desc: String,
    pub c3_price: String,
    pub cta: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterCopy {
    pub brand: String,
    pub desc: String,
    pub nav_title: String,
    pub nav1: String,
    pub nav2: String,
    pub nav3: String,
    pub contact_title: String,
    pub contact1: String,
    pub contact2: String,
    pub contact3: String,
    pub email: String,
    pub hours_title: String,
    pub hours1: String,
    pub hours2: String,
    pub hours3: String,
    pub bio: String,
    pub imprint: String,
    pub privacy: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShopCopy {
    pub title: String,
    pub sub: String,
    pub filter_all: String,
    pub add_to_cart: String,
    pub empty_state: String,
}

/// Every string the site shows, for one language.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalizedBundle {
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub trust: TrustCopy,
    pub features: FeatureCopy,
    pub philosophy: PhilosophyCopy,
    pub protocol_tag: String,
    pub protocol: Vec<ProtocolStep>,
    pub collection: CollectionCopy,
    pub footer: FooterCopy,
    pub shop: ShopCopy,
}

#[derive(Debug, PartialEq)]
pub struct Catalog {
    de: LocalizedBundle,
    en: LocalizedBundle,
}

impl Catalog {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_sources(DE_JSON, EN_JSON)
    }

    pub fn from_sources(de: &str, en: &str) -> Result<Self, ContentError> {
        let de_tree = parse_tree(Language::De, de)?;
        let en_tree = parse_tree(Language::En, en)?;

        let de_paths = field_paths(&de_tree);
        let en_paths = field_paths(&en_tree);
        if let Some(path) = de_paths.symmetric_difference(&en_paths).next() {
            return Err(ContentError::Shape { path: path.clone() });
        }

        Ok(Self {
            de: into_bundle(Language::De, de_tree)?,
            en: into_bundle(Language::En, en_tree)?,
        })
    }

    pub fn bundle(&self, lang: Language) -> &LocalizedBundle {
        match lang {
            Language::De => &self.de,
            Language::En => &self.en,
        }
    }
}

fn parse_tree(lang: Language, source: &str) -> Result<Value, ContentError> {
    serde_json::from_str(source).map_err(|source| ContentError::Parse { lang, source })
}

fn into_bundle(lang: Language, tree: Value) -> Result<LocalizedBundle, ContentError> {
    serde_json::from_value(tree).map_err(|source| ContentError::Parse { lang, source })
}

/// Every key path in a JSON tree. Array elements collapse into `[]` so lists
/// of different lengths still compare equal.
pub fn field_paths(tree: &Value) -> BTreeSet<String> {
    fn walk(node: &Value, prefix: &str, out: &mut BTreeSet<String>) {
        match node {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    out.insert(path.clone());
                    walk(child, &path, out);
                }
            }
            Value::Array(items) => {
                let path = format!("{prefix}[]");
                for item in items {
                    walk(item, &path, out);
                }
            }
            _ => {}
        }
    }

    let mut out = BTreeSet::new();
    walk(tree, "", &mut out);
    out
}

static CATALOG: OnceCell<Catalog> = OnceCell::new();

/// Parses the embedded bundles on first call and hands out the same catalog afterwards.
pub fn init() -> Result<&'static Catalog, ContentError> {
    CATALOG.get_or_try_init(Catalog::load)
}

/// Current language plus the bundle that goes with it.
#[derive(Debug, PartialEq)]
pub struct LocaleState {
    lang: Language,
    catalog: &'static Catalog,
}

impl LocaleState {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            lang: Language::default(),
            catalog,
        }
    }

    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn bundle(&self) -> &'static LocalizedBundle {
        self.catalog.bundle(self.lang)
    }
}

pub enum LocaleAction {
    Set(Language),
    Toggle,
}

impl Reducible for LocaleState {
    type Action = LocaleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            LocaleAction::Set(lang) => lang,
            LocaleAction::Toggle => self.lang.other(),
        };
        if next == self.lang {
            return self;
        }
        info!("Switching locale {} -> {}", self.lang, next);
        Rc::new(Self {
            lang: next,
            catalog: self.catalog,
        })
    }
}

pub type LocaleContext = UseReducerHandle<LocaleState>;

#[derive(Properties, PartialEq)]
pub struct LocaleProviderProps {
    pub catalog: &'static Catalog,
    pub children: Children,
}

#[function_component(LocaleProvider)]
pub fn locale_provider(props: &LocaleProviderProps) -> Html {
    let catalog = props.catalog;
    let locale = use_reducer(move || LocaleState::new(catalog));

    html! {
        <ContextProvider<LocaleContext> context={locale}>
            { for props.children.iter() }
        </ContextProvider<LocaleContext>>
    }
}

#[hook]
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().expect("use_locale called outside <LocaleProvider>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        match init() {
            Ok(catalog) => catalog,
            Err(e) => panic!("embedded bundles should load: {e}"),
        }
    }

    #[test]
    fn embedded_bundles_load() {
        let catalog = catalog();
        assert_eq!(catalog.bundle(Language::De).features.f2_title, "Ökologie");
        assert_eq!(catalog.bundle(Language::En).features.f2_title, "Ecology");
    }

    #[test]
    fn both_locales_have_identical_key_structure() {
        let de: Value = serde_json::from_str(DE_JSON).expect("de.json is valid json");
        let en: Value = serde_json::from_str(EN_JSON).expect("en.json is valid json");
        let de_paths = field_paths(&de);
        let en_paths = field_paths(&en);

        let only_de: Vec<_> = de_paths.difference(&en_paths).collect();
        let only_en: Vec<_> = en_paths.difference(&de_paths).collect();
        assert!(only_de.is_empty(), "missing in en: {only_de:?}");
        assert!(only_en.is_empty(), "missing in de: {only_en:?}");
        assert!(de_paths.contains("features.f1_cards"));
        assert!(de_paths.contains("protocol[].title"));
    }

    #[test]
    fn shuffler_and_protocol_lists_line_up() {
        let catalog = catalog();
        let de = catalog.bundle(Language::De);
        let en = catalog.bundle(Language::En);
        assert_eq!(de.features.f1_cards.len(), en.features.f1_cards.len());
        assert_eq!(de.protocol.len(), en.protocol.len());
        assert!(!de.features.f1_cards.is_empty());
    }

    #[test]
    fn missing_key_is_a_shape_error() {
        let mut en: Value = serde_json::from_str(EN_JSON).expect("en.json is valid json");
        if let Some(hero) = en.get_mut("hero").and_then(Value::as_object_mut) {
            hero.remove("cta");
        }
        let err = Catalog::from_sources(DE_JSON, &en.to_string()).unwrap_err();
        match err {
            ContentError::Shape { path } => assert_eq!(path, "hero.cta"),
            other => panic!("expected a shape error, got {other}"),
        }
    }

    #[test]
    fn key_present_in_both_but_unknown_to_the_site_is_rejected() {
        let mut de: Value = serde_json::from_str(DE_JSON).expect("de.json is valid json");
        let mut en: Value = serde_json::from_str(EN_JSON).expect("en.json is valid json");
        for tree in [&mut de, &mut en] {
            if let Some(trust) = tree.get_mut("trust").and_then(Value::as_object_mut) {
                trust.insert("extra".into(), Value::String("x".into()));
            }
        }
        let err = Catalog::from_sources(&de.to_string(), &en.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Parse { lang: Language::De, .. }));
    }

    #[test]
    fn broken_json_names_the_language() {
        let err = Catalog::from_sources(DE_JSON, "{").unwrap_err();
        assert!(matches!(err, ContentError::Parse { lang: Language::En, .. }));
    }

    #[test]
    fn set_locale_is_idempotent() {
        let state = Rc::new(LocaleState::new(catalog()));
        let same = state.clone().reduce(LocaleAction::Set(Language::De));
        assert!(Rc::ptr_eq(&state, &same));

        let switched = state.clone().reduce(LocaleAction::Set(Language::En));
        assert_eq!(switched.lang(), Language::En);
        assert_eq!(switched.bundle().hero.cta, "Book Tasting");

        let again = switched.clone().reduce(LocaleAction::Set(Language::En));
        assert!(Rc::ptr_eq(&switched, &again));
    }

    #[test]
    fn toggle_flips_between_the_two_languages() {
        let state = Rc::new(LocaleState::new(catalog()));
        let en = state.reduce(LocaleAction::Toggle);
        assert_eq!(en.lang(), Language::En);
        let de = en.reduce(LocaleAction::Toggle);
        assert_eq!(de.lang(), Language::De);
    }
}
