//! Shared nutrition data structure
//!
//! Used as a per-100g reference on foods and as an absolute amount on log
//! entries and daily totals.

use serde::{Deserialize, Serialize};

/// Nutritional information: calories plus the three macros
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl Nutrition {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        let n = Nutrition::new(200.0, 10.0, 30.0, 5.0);
        assert_eq!(n.scale(2.0), Nutrition::new(400.0, 20.0, 60.0, 10.0));
        assert_eq!(n.scale(0.0), Nutrition::zero());
    }

    #[test]
    fn test_sum() {
        let total: Nutrition = vec![
            Nutrition::new(100.0, 5.0, 10.0, 2.0),
            Nutrition::new(50.0, 1.0, 2.0, 3.0),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, Nutrition::new(150.0, 6.0, 12.0, 5.0));
    }
}
