//! Biometric calculations
//!
//! BMI, BMI category, and the suggested daily calorie goal. Pure functions of
//! their inputs.

use serde::{Deserialize, Serialize};

use super::{NutritionError, NutritionResult};

/// BMI category, thresholds left-closed on the lower bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Compute BMI from weight in kilograms and height in centimeters.
///
/// Rounded to one decimal. Errors if height is not positive.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> NutritionResult<f64> {
    if height_cm <= 0.0 {
        return Err(NutritionError::InvalidInput(format!(
            "height must be positive, got {height_cm} cm"
        )));
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok((bmi * 10.0).round() / 10.0)
}

/// Categorize a BMI value. Boundary values belong to the upper bucket:
/// a BMI of exactly 18.5 is normal weight, 25 is overweight, 30 is obese.
pub fn categorize(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Suggested daily calorie goal for a BMI, as a step function over the same
/// category thresholds. No interpolation between steps.
pub fn suggested_calories(bmi: f64) -> f64 {
    match categorize(bmi) {
        BmiCategory::Underweight => 2500.0,
        BmiCategory::NormalWeight => 2000.0,
        BmiCategory::Overweight => 1800.0,
        BmiCategory::Obese => 1600.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_rounds_to_one_decimal() {
        // 60 / 1.7^2 = 20.761...
        assert_eq!(compute_bmi(60.0, 170.0).unwrap(), 20.8);
        assert_eq!(compute_bmi(80.0, 180.0).unwrap(), 24.7);
    }

    #[test]
    fn test_bmi_rejects_nonpositive_height() {
        assert!(matches!(
            compute_bmi(60.0, 0.0),
            Err(NutritionError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_bmi(60.0, -170.0),
            Err(NutritionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_bmi_monotonic_in_weight() {
        let mut last = 0.0;
        for w in [40.0, 55.0, 70.0, 85.0, 100.0] {
            let bmi = compute_bmi(w, 175.0).unwrap();
            assert!(bmi > last);
            last = bmi;
        }
    }

    #[test]
    fn test_bmi_monotonic_decreasing_in_height() {
        let mut last = f64::MAX;
        for h in [150.0, 160.0, 170.0, 180.0, 190.0] {
            let bmi = compute_bmi(70.0, h).unwrap();
            assert!(bmi < last);
            last = bmi;
        }
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(categorize(17.0), BmiCategory::Underweight);
        assert_eq!(categorize(18.5), BmiCategory::NormalWeight);
        assert_eq!(categorize(24.9), BmiCategory::NormalWeight);
        assert_eq!(categorize(25.0), BmiCategory::Overweight);
        assert_eq!(categorize(29.9), BmiCategory::Overweight);
        assert_eq!(categorize(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_suggested_calories_steps() {
        assert_eq!(suggested_calories(17.0), 2500.0);
        assert_eq!(suggested_calories(18.5), 2000.0);
        assert_eq!(suggested_calories(25.0), 1800.0);
        assert_eq!(suggested_calories(30.0), 1600.0);
        assert_eq!(suggested_calories(42.0), 1600.0);
    }
}
