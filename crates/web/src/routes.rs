//! Locale-prefixed paths.
//!
//! Every route on the site lives under a locale segment. These helpers
//! build hrefs for the active locale and rewrite the current path when
//! the language switcher fires.

use zagros_core::Locale;

/// Absolute href for a locale-relative route suffix (`""` is the home
/// page, `"products/3"` a product detail page).
pub fn href(locale: Locale, suffix: &str) -> String {
    let suffix = suffix.trim_matches('/');
    if suffix.is_empty() {
        format!("/{}", locale.as_str())
    } else {
        format!("/{}/{}", locale.as_str(), suffix)
    }
}

/// Rewrite a pathname to the target locale, preserving the rest of the
/// path. Paths without a locale segment just gain the prefix.
pub fn switch_locale_path(pathname: &str, target: Locale) -> String {
    let trimmed = pathname.trim_start_matches('/');
    let (first, rest) = match trimmed.split_once('/') {
        Some((first, rest)) => (first, rest),
        None => (trimmed, ""),
    };

    let remainder = if Locale::from_segment(first).is_some() {
        rest
    } else {
        trimmed
    };

    href(target, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_builds_locale_prefixed_paths() {
        assert_eq!(href(Locale::En, ""), "/en");
        assert_eq!(href(Locale::Fa, "products"), "/fa/products");
        assert_eq!(href(Locale::En, "careers/2/apply"), "/en/careers/2/apply");
        assert_eq!(href(Locale::En, "/faq/"), "/en/faq");
    }

    #[test]
    fn switching_locale_preserves_the_rest_of_the_path() {
        assert_eq!(switch_locale_path("/en/products/3", Locale::Fa), "/fa/products/3");
        assert_eq!(switch_locale_path("/fa", Locale::En), "/en");
        assert_eq!(switch_locale_path("/fa/", Locale::En), "/en");
    }

    #[test]
    fn paths_without_a_locale_segment_gain_the_prefix() {
        assert_eq!(switch_locale_path("/", Locale::Fa), "/fa");
        assert_eq!(switch_locale_path("/contact", Locale::Fa), "/fa/contact");
    }
}
