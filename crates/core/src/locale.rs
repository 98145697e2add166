//! Display locales and text direction.

use serde::{Deserialize, Serialize};

/// The two locales the site ships in.
///
/// The locale is selected by the leading URL path segment (`/en/...`,
/// `/fa/...`) and drives both string lookup and text direction.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fa,
}

/// Document text direction derived from the locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Locale {
    /// URL path segment / `lang` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fa => "fa",
        }
    }

    /// Parse a URL path segment. Anything but the two known segments is
    /// rejected so the router can redirect to the default locale.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "en" => Some(Locale::En),
            "fa" => Some(Locale::Fa),
            _ => None,
        }
    }

    /// The locale the language switcher toggles to.
    pub fn other(self) -> Self {
        match self {
            Locale::En => Locale::Fa,
            Locale::Fa => Locale::En,
        }
    }

    pub fn text_direction(self) -> TextDirection {
        match self {
            Locale::En => TextDirection::Ltr,
            Locale::Fa => TextDirection::Rtl,
        }
    }

    /// Pick the initial locale from a BCP 47 language tag list, e.g. the
    /// browser's `navigator.languages`. First Persian tag wins, otherwise
    /// the default locale.
    pub fn from_preferred_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        for tag in tags {
            let primary = tag.split(['-', '_']).next().unwrap_or("");
            if primary.eq_ignore_ascii_case("fa") {
                return Locale::Fa;
            }
            if primary.eq_ignore_ascii_case("en") {
                return Locale::En;
            }
        }
        Locale::default()
    }
}

impl TextDirection {
    /// `dir` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_segment_accepts_known_locales_only() {
        assert_eq!(Locale::from_segment("en"), Some(Locale::En));
        assert_eq!(Locale::from_segment("fa"), Some(Locale::Fa));
        assert_eq!(Locale::from_segment("de"), None);
        assert_eq!(Locale::from_segment(""), None);
        assert_eq!(Locale::from_segment("EN"), None);
    }

    #[test]
    fn persian_is_rtl() {
        assert_eq!(Locale::Fa.text_direction().as_str(), "rtl");
        assert_eq!(Locale::En.text_direction().as_str(), "ltr");
    }

    #[test]
    fn preferred_tags_pick_first_known_primary_subtag() {
        assert_eq!(Locale::from_preferred_tags(["fa-IR", "en-US"]), Locale::Fa);
        assert_eq!(Locale::from_preferred_tags(["en-GB"]), Locale::En);
        assert_eq!(Locale::from_preferred_tags(["de-DE", "fr"]), Locale::En);
        assert_eq!(Locale::from_preferred_tags([]), Locale::En);
    }

    #[test]
    fn other_toggles_between_the_two_locales() {
        assert_eq!(Locale::En.other(), Locale::Fa);
        assert_eq!(Locale::Fa.other(), Locale::En);
    }
}
