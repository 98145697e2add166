//! Catalog products.

use serde::{Deserialize, Serialize};

use zagros_core::{LocalizedText, ProductId};

/// Product category tag. Closed set; drives the catalog filter and the
/// products dropdown in the header.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Saffron,
    Nuts,
    DriedFruit,
    Herbal,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::Saffron,
        ProductCategory::Nuts,
        ProductCategory::DriedFruit,
        ProductCategory::Herbal,
    ];

    /// Stable value for `<select>` options and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Saffron => "saffron",
            ProductCategory::Nuts => "nuts",
            ProductCategory::DriedFruit => "dried_fruit",
            ProductCategory::Herbal => "herbal",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    /// Dictionary key of the localized category label.
    pub fn label_key(self) -> &'static str {
        match self {
            ProductCategory::Saffron => "products.cat_saffron",
            ProductCategory::Nuts => "products.cat_nuts",
            ProductCategory::DriedFruit => "products.cat_dried_fruit",
            ProductCategory::Herbal => "products.cat_herbal",
        }
    }
}

/// Certification labels attached to products. These are proper names and
/// render identically in both locales.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Certification {
    Iso22000,
    Haccp,
    Organic,
    Halal,
    Fda,
}

impl Certification {
    pub const ALL: [Certification; 5] = [
        Certification::Iso22000,
        Certification::Haccp,
        Certification::Organic,
        Certification::Halal,
        Certification::Fda,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Certification::Iso22000 => "ISO 22000",
            Certification::Haccp => "HACCP",
            Certification::Organic => "Organic",
            Certification::Halal => "Halal",
            Certification::Fda => "FDA Registered",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Certification::Iso22000 => "iso22000",
            Certification::Haccp => "haccp",
            Certification::Organic => "organic",
            Certification::Halal => "halal",
            Certification::Fda => "fda",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// A catalog product. Defined in the static dataset, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub origin: LocalizedText,
    pub grade: LocalizedText,
    pub shelf_life: LocalizedText,
    pub min_order: LocalizedText,
    pub category: ProductCategory,
    pub certifications: Vec<Certification>,
    pub packaging: Vec<LocalizedText>,
    pub image: String,
    pub gallery: Vec<String>,
    pub available: bool,
}

impl Product {
    /// Locale-relative route suffix of the detail page.
    pub fn route(&self) -> String {
        format!("products/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_values_round_trip() {
        for category in ProductCategory::ALL {
            assert_eq!(ProductCategory::from_value(category.as_str()), Some(category));
        }
        assert_eq!(ProductCategory::from_value("fish"), None);
    }

    #[test]
    fn certification_values_round_trip() {
        for cert in Certification::ALL {
            assert_eq!(Certification::from_value(cert.as_str()), Some(cert));
        }
        assert_eq!(Certification::from_value(""), None);
    }
}
