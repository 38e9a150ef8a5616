//! Core types for item-api

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Long-form description attached to user items unless `short` is requested.
pub const LONG_DESCRIPTION: &str = "This is an amazing item that has a long description";

/// Request body describing an item. Never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct Item {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub tax: Option<f64>,
}

impl Item {
    /// `price + tax`, only when a non-zero tax was supplied.
    pub fn price_with_tax(&self) -> Option<f64> {
        match self.tax {
            Some(tax) if tax != 0.0 => Some(self.price + tax),
            _ => None,
        }
    }
}

/// Closed set of model names served by `/models/{model_name}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    pub const ALL: [ModelName; 3] = [ModelName::Alexnet, ModelName::Resnet, ModelName::Lenet];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelName::Alexnet => "alexnet",
            ModelName::Resnet => "resnet",
            ModelName::Lenet => "lenet",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ModelName::Alexnet => "Deep Learning FTW!",
            ModelName::Lenet => "LeCNN all the images",
            ModelName::Resnet => "Have some residuals",
        }
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record of the read-only catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub item_name: String,
}

/// The fixed catalog: `Foo`, `Bar`, `Baz`, in that order.
pub fn default_catalog() -> Vec<CatalogEntry> {
    ["Foo", "Bar", "Baz"]
        .into_iter()
        .map(|name| CatalogEntry {
            item_name: name.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(tax: Option<f64>) -> Item {
        Item {
            name: "x".to_string(),
            description: None,
            price: 10.0,
            tax,
        }
    }

    #[test]
    fn price_with_tax_requires_non_zero_tax() {
        assert_eq!(item(Some(2.0)).price_with_tax(), Some(12.0));
        assert_eq!(item(Some(0.0)).price_with_tax(), None);
        assert_eq!(item(None).price_with_tax(), None);
    }

    #[test]
    fn empty_name_fails_validation() {
        let mut bad = item(None);
        bad.name.clear();
        assert!(bad.validate().is_err());
        assert!(item(None).validate().is_ok());
    }

    #[test]
    fn model_names_round_trip_through_serde() {
        for model in ModelName::ALL {
            let encoded = serde_json::to_string(&model).unwrap();
            assert_eq!(encoded, format!("\"{}\"", model.as_str()));
        }
        assert!(serde_json::from_str::<ModelName>("\"vgg\"").is_err());
    }

    #[test]
    fn catalog_is_foo_bar_baz() {
        let names: Vec<_> = default_catalog()
            .into_iter()
            .map(|entry| entry.item_name)
            .collect();
        assert_eq!(names, ["Foo", "Bar", "Baz"]);
    }
}
