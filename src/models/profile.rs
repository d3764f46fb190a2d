//! User profile model
//!
//! The single current profile: biometrics plus the daily calorie goal.

use serde::{Deserialize, Serialize};

/// Gender marker used on the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Gender {
    #[default]
    M,
    F,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::M => "M",
            Gender::F => "F",
        }
    }
}

/// The user's biometrics and calorie goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub gender: Gender,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub daily_calorie_goal: f64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            gender: Gender::M,
            age: 18,
            weight_kg: 60.0,
            height_cm: 170.0,
            daily_calorie_goal: 2000.0,
        }
    }
}

impl UserProfile {
    /// A profile is usable once age, weight, and height are all positive.
    /// Gender and the goal are not structurally validated.
    pub fn is_valid(&self) -> bool {
        self.age > 0 && self.weight_kg > 0.0 && self.height_cm > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        assert!(UserProfile::default().is_valid());
    }

    #[test]
    fn test_zeroed_biometrics_invalidate() {
        let mut p = UserProfile::default();
        p.weight_kg = 0.0;
        assert!(!p.is_valid());

        let mut p = UserProfile::default();
        p.height_cm = 0.0;
        assert!(!p.is_valid());

        let mut p = UserProfile::default();
        p.age = 0;
        assert!(!p.is_valid());
    }
}
