//! Portion scaling
//!
//! Converts a per-100g nutrient reference into an absolute amount for a given
//! gram quantity. Arithmetic stays full-precision; rounding for display is the
//! presentation layer's job so aggregation never compounds rounding error.

use crate::models::Nutrition;

use super::{NutritionError, NutritionResult};

/// Scale a per-100g profile to `grams`.
///
/// Zero grams is permitted and yields a zero profile; negative grams is an
/// error.
pub fn scale_per_100g(per_100g: &Nutrition, grams: f64) -> NutritionResult<Nutrition> {
    if grams < 0.0 {
        return Err(NutritionError::InvalidInput(format!(
            "grams must not be negative, got {grams}"
        )));
    }
    Ok(per_100g.scale(grams / 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Nutrition {
        Nutrition::new(165.0, 31.0, 0.0, 3.6)
    }

    #[test]
    fn test_identity_at_100g() {
        assert_eq!(scale_per_100g(&profile(), 100.0).unwrap(), profile());
    }

    #[test]
    fn test_zero_grams_yields_zero_profile() {
        assert_eq!(scale_per_100g(&profile(), 0.0).unwrap(), Nutrition::zero());
    }

    #[test]
    fn test_linearity() {
        let p = profile();
        for g in [25.0, 50.0, 130.0, 400.0] {
            let single = scale_per_100g(&p, g).unwrap();
            let double = scale_per_100g(&p, 2.0 * g).unwrap();
            assert_eq!(double, single.scale(2.0));
        }
    }

    #[test]
    fn test_negative_grams_rejected() {
        assert!(matches!(
            scale_per_100g(&profile(), -1.0),
            Err(NutritionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_no_clamping_of_values() {
        // Scaling is linear even for very large portions
        let big = scale_per_100g(&profile(), 1000.0).unwrap();
        assert_eq!(big.calories, 1650.0);
    }
}
