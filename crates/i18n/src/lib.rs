//! `zagros-i18n` — UI string dictionaries and lookup.
//!
//! Two flat JSON dictionaries (one per locale) ship inside the binary.
//! Lookup is a dot-path traversal (`"nav.products"`); a missing key or a
//! non-string leaf degrades gracefully by returning the key itself, so a
//! broken translation renders as its key instead of breaking the page.

use std::sync::OnceLock;

use serde_json::Value;
use zagros_core::Locale;

const EN_RAW: &str = include_str!("../locales/en.json");
const FA_RAW: &str = include_str!("../locales/fa.json");

/// A parsed locale dictionary.
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    fn parse(raw: &str) -> Self {
        // A dictionary that fails to parse behaves like an empty one:
        // every lookup misses and falls back to the key.
        let root = serde_json::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "locale dictionary failed to parse");
            Value::Null
        });
        Self { root }
    }

    /// Resolve a dot-path key to its string leaf.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut node = &self.root;
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        node.as_str()
    }

    /// All dot-path keys with string leaves, in traversal order. Used by
    /// the parity tests to compare the two dictionaries.
    pub fn string_keys(&self) -> Vec<String> {
        fn walk(node: &Value, prefix: &str, out: &mut Vec<String>) {
            match node {
                Value::Object(map) => {
                    for (k, v) in map {
                        let path = if prefix.is_empty() {
                            k.clone()
                        } else {
                            format!("{prefix}.{k}")
                        };
                        walk(v, &path, out);
                    }
                }
                Value::String(_) => out.push(prefix.to_string()),
                _ => {}
            }
        }

        let mut out = Vec::new();
        walk(&self.root, "", &mut out);
        out
    }
}

/// The dictionary for a locale, parsed once per process.
pub fn dictionary(locale: Locale) -> &'static Dictionary {
    static EN: OnceLock<Dictionary> = OnceLock::new();
    static FA: OnceLock<Dictionary> = OnceLock::new();

    match locale {
        Locale::En => EN.get_or_init(|| Dictionary::parse(EN_RAW)),
        Locale::Fa => FA.get_or_init(|| Dictionary::parse(FA_RAW)),
    }
}

/// Locale-bound lookup handle handed to UI components.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Translate a dot-path key, falling back to the key itself.
    pub fn t(&self, key: &str) -> String {
        match dictionary(self.locale).lookup(key) {
            Some(s) => s.to_string(),
            None => {
                tracing::warn!(locale = %self.locale, key, "missing translation key");
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn lookup_resolves_nested_keys() {
        let t = Translator::new(Locale::En);
        assert_eq!(t.t("nav.products"), "Products");
        assert_eq!(Translator::new(Locale::Fa).t("nav.products"), "محصولات");
    }

    #[test]
    fn missing_key_falls_back_to_the_key_itself() {
        let t = Translator::new(Locale::En);
        assert_eq!(t.t("nav.does_not_exist"), "nav.does_not_exist");
        assert_eq!(t.t("totally.unknown.path"), "totally.unknown.path");
    }

    #[test]
    fn non_string_leaf_falls_back_to_the_key() {
        // "nav" resolves to an object, not a string.
        let t = Translator::new(Locale::En);
        assert_eq!(t.t("nav"), "nav");
    }

    #[test]
    fn dictionaries_carry_the_same_key_set() {
        let en: BTreeSet<_> = dictionary(Locale::En).string_keys().into_iter().collect();
        let fa: BTreeSet<_> = dictionary(Locale::Fa).string_keys().into_iter().collect();

        let only_en: Vec<_> = en.difference(&fa).collect();
        let only_fa: Vec<_> = fa.difference(&en).collect();
        assert!(
            only_en.is_empty() && only_fa.is_empty(),
            "dictionary key mismatch: en-only {only_en:?}, fa-only {only_fa:?}"
        );
    }

    #[test]
    fn no_translation_is_blank() {
        for locale in [Locale::En, Locale::Fa] {
            let dict = dictionary(locale);
            for key in dict.string_keys() {
                let value = dict.lookup(&key).unwrap();
                assert!(!value.trim().is_empty(), "{locale}:{key} is blank");
            }
        }
    }
}
