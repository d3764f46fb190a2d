//! Food model
//!
//! A catalog food with per-100g nutritional information and a diet category.

use serde::{Deserialize, Serialize};

use super::Nutrition;

/// Diet category used to filter meal suggestion candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    #[default]
    Normal,
    Healthy,
    Carnivore,
}

impl FoodCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Normal => "Normal",
            FoodCategory::Healthy => "Healthy",
            FoodCategory::Carnivore => "Carnivore",
        }
    }

    /// Parse a category name; unknown strings fall back to Normal
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "healthy" => FoodCategory::Healthy,
            "carnivore" => FoodCategory::Carnivore,
            _ => FoodCategory::Normal,
        }
    }
}

/// A food in the catalog, with nutrition per 100 grams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub name: String,
    pub category: FoodCategory,
    pub per_100g: Nutrition,
}

impl Food {
    pub fn new(name: impl Into<String>, category: FoodCategory, per_100g: Nutrition) -> Self {
        Self {
            name: name.into(),
            category,
            per_100g,
        }
    }
}

/// Find foods whose name contains `query`, case-insensitively.
///
/// Returns indices into the catalog, preserving insertion order. Duplicate
/// names are allowed in the catalog and all of them match.
pub fn find_matches(catalog: &[Food], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .enumerate()
        .filter(|(_, f)| f.name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<Food> {
        vec![
            Food::new("Chicken Breast", FoodCategory::Carnivore, Nutrition::new(165.0, 31.0, 0.0, 3.6)),
            Food::new("Brown Rice", FoodCategory::Healthy, Nutrition::new(111.0, 2.6, 23.0, 0.9)),
            Food::new("Chicken Thigh", FoodCategory::Carnivore, Nutrition::new(209.0, 26.0, 0.0, 10.9)),
        ]
    }

    #[test]
    fn test_find_matches_case_insensitive_substring() {
        let catalog = sample_catalog();
        assert_eq!(find_matches(&catalog, "chicken"), vec![0, 2]);
        assert_eq!(find_matches(&catalog, "RICE"), vec![1]);
        assert!(find_matches(&catalog, "tofu").is_empty());
    }

    #[test]
    fn test_category_from_str_fallback() {
        assert_eq!(FoodCategory::from_str("Carnivore"), FoodCategory::Carnivore);
        assert_eq!(FoodCategory::from_str("healthy"), FoodCategory::Healthy);
        assert_eq!(FoodCategory::from_str("whatever"), FoodCategory::Normal);
    }
}
