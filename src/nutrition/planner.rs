//! Meal planning
//!
//! Randomized meal suggestions: draw distinct foods from the filtered catalog
//! and size each portion so the meal approximates a calorie target. Portions
//! are clamped to a sensible range, so totals deviate from the target whenever
//! the clamp triggers; that is expected behavior, not an error.

use chrono::Local;
use rand::seq::index::sample;
use rand::Rng;

use crate::models::{Food, FoodCategory, LogEntry, Nutrition};

use super::portion::scale_per_100g;
use super::{NutritionError, NutritionResult};

/// Portion bounds in grams
pub const MIN_PORTION_GRAMS: f64 = 50.0;
pub const MAX_PORTION_GRAMS: f64 = 250.0;

/// Foods drawn per meal unless the caller asks otherwise
pub const DEFAULT_MEAL_ITEMS: usize = 3;

/// Candidate filter for meal suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealFilter {
    /// Every food qualifies
    All,
    /// Healthy and Carnivore foods qualify
    Healthy,
    /// Only Carnivore foods qualify
    Carnivore,
}

impl MealFilter {
    pub fn matches(&self, category: FoodCategory) -> bool {
        match self {
            MealFilter::All => true,
            MealFilter::Healthy => {
                category == FoodCategory::Healthy || category == FoodCategory::Carnivore
            }
            MealFilter::Carnivore => category == FoodCategory::Carnivore,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealFilter::All => "Normal",
            MealFilter::Healthy => "Healthy",
            MealFilter::Carnivore => "Carnivore",
        }
    }
}

/// Breakfast, lunch, and dinner suggestions for one day
#[derive(Debug, Clone)]
pub struct DailyPlan {
    pub breakfast: Vec<LogEntry>,
    pub lunch: Vec<LogEntry>,
    pub dinner: Vec<LogEntry>,
}

impl DailyPlan {
    pub fn meals(&self) -> [(&'static str, &[LogEntry]); 3] {
        [
            ("Breakfast", self.breakfast.as_slice()),
            ("Lunch", self.lunch.as_slice()),
            ("Dinner", self.dinner.as_slice()),
        ]
    }

    pub fn total_calories(&self) -> f64 {
        self.meals()
            .iter()
            .flat_map(|(_, meal)| meal.iter())
            .map(|e| e.nutrition.calories)
            .sum()
    }
}

/// Generate one meal approximating `target_calories`.
///
/// Draws up to `item_count` distinct foods uniformly without replacement from
/// the filtered catalog; a catalog smaller than `item_count` yields a shorter
/// meal rather than repeating foods. The meal target is split evenly across
/// the items actually drawn, and each portion is clamped to
/// [`MIN_PORTION_GRAMS`, `MAX_PORTION_GRAMS`].
///
/// Zero-calorie foods cannot be back-solved for a portion and are dropped from
/// the draw pool; if nothing drawable remains the call fails.
pub fn generate_meal<R: Rng + ?Sized>(
    catalog: &[Food],
    filter: MealFilter,
    target_calories: f64,
    item_count: usize,
    rng: &mut R,
) -> NutritionResult<Vec<LogEntry>> {
    if item_count == 0 {
        return Err(NutritionError::InvalidInput(
            "item count must be at least 1".to_string(),
        ));
    }

    let candidates: Vec<&Food> = catalog.iter().filter(|f| filter.matches(f.category)).collect();
    if candidates.is_empty() {
        return Err(NutritionError::EmptyCandidateSet);
    }

    let drawable: Vec<&Food> = candidates
        .iter()
        .copied()
        .filter(|f| {
            if f.per_100g.calories > 0.0 {
                true
            } else {
                tracing::warn!(food = %f.name, "skipping zero-calorie food in meal draw");
                false
            }
        })
        .collect();
    if drawable.is_empty() {
        return Err(NutritionError::DivisionUndefined);
    }

    // Split the meal target across the items actually drawn, so a short draw
    // still aims at the full meal target.
    let draw_count = item_count.min(drawable.len());
    let per_item_calories = target_calories / draw_count as f64;

    let now = Local::now();
    let mut meal = Vec::with_capacity(draw_count);
    for idx in sample(rng, drawable.len(), draw_count) {
        let food = drawable[idx];
        let grams = (per_item_calories / food.per_100g.calories) * 100.0;
        let grams = grams.clamp(MIN_PORTION_GRAMS, MAX_PORTION_GRAMS);
        let nutrition = scale_per_100g(&food.per_100g, grams)?;
        meal.push(LogEntry::from_portion(food, grams, nutrition, now));
    }

    Ok(meal)
}

/// Generate breakfast, lunch, and dinner, each targeting a third of
/// `daily_goal`. The three draws are independent; foods may repeat across
/// meals.
pub fn generate_daily_plan<R: Rng + ?Sized>(
    catalog: &[Food],
    filter: MealFilter,
    daily_goal: f64,
    rng: &mut R,
) -> NutritionResult<DailyPlan> {
    let per_meal = daily_goal / 3.0;
    Ok(DailyPlan {
        breakfast: generate_meal(catalog, filter, per_meal, DEFAULT_MEAL_ITEMS, rng)?,
        lunch: generate_meal(catalog, filter, per_meal, DEFAULT_MEAL_ITEMS, rng)?,
        dinner: generate_meal(catalog, filter, per_meal, DEFAULT_MEAL_ITEMS, rng)?,
    })
}

/// Total calories of one meal
pub fn meal_calories(meal: &[LogEntry]) -> f64 {
    meal.iter().map(|e| e.nutrition.calories).sum()
}

/// Total nutrition of one meal
pub fn meal_nutrition(meal: &[LogEntry]) -> Nutrition {
    meal.iter().map(|e| e.nutrition).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn food(name: &str, category: FoodCategory, calories: f64) -> Food {
        Food::new(name, category, Nutrition::new(calories, 10.0, 5.0, 2.0))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_filter_matching() {
        assert!(MealFilter::All.matches(FoodCategory::Normal));
        assert!(MealFilter::Healthy.matches(FoodCategory::Healthy));
        assert!(MealFilter::Healthy.matches(FoodCategory::Carnivore));
        assert!(!MealFilter::Healthy.matches(FoodCategory::Normal));
        assert!(MealFilter::Carnivore.matches(FoodCategory::Carnivore));
        assert!(!MealFilter::Carnivore.matches(FoodCategory::Healthy));
    }

    #[test]
    fn test_empty_candidate_set() {
        let catalog = vec![food("Bread", FoodCategory::Normal, 265.0)];
        let err = generate_meal(&catalog, MealFilter::Carnivore, 600.0, 3, &mut rng());
        assert_eq!(err.unwrap_err(), NutritionError::EmptyCandidateSet);
    }

    #[test]
    fn test_short_draw_when_catalog_is_small() {
        // Two carnivore foods, three requested: the meal has exactly two items
        // rather than repeating a food.
        let catalog = vec![
            food("Beef", FoodCategory::Carnivore, 250.0),
            food("Eggs", FoodCategory::Carnivore, 155.0),
        ];
        let meal = generate_meal(&catalog, MealFilter::Carnivore, 600.0, 3, &mut rng()).unwrap();
        assert_eq!(meal.len(), 2);
        let names: Vec<&str> = meal.iter().map(|e| e.food_name.as_str()).collect();
        assert!(names.contains(&"Beef"));
        assert!(names.contains(&"Eggs"));
    }

    #[test]
    fn test_portion_math_without_clamping() {
        // 1000 kcal/100g food, 3000 kcal meal target, 3 items: each item
        // targets 1000 kcal, which is exactly 100g — inside the clamp range.
        let catalog = vec![
            food("Dense A", FoodCategory::Normal, 1000.0),
            food("Dense B", FoodCategory::Normal, 1000.0),
            food("Dense C", FoodCategory::Normal, 1000.0),
        ];
        let meal = generate_meal(&catalog, MealFilter::All, 3000.0, 3, &mut rng()).unwrap();
        assert_eq!(meal.len(), 3);
        for entry in &meal {
            assert!((entry.quantity_grams - 100.0).abs() < 1e-9);
            assert!((entry.nutrition.calories - 1000.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_large_portion_clamped_to_ceiling() {
        // 100 kcal/100g food with a 1000 kcal per-item target asks for 1000g;
        // clamped down to 250g.
        let catalog = vec![food("Light", FoodCategory::Normal, 100.0)];
        let meal = generate_meal(&catalog, MealFilter::All, 1000.0, 1, &mut rng()).unwrap();
        assert_eq!(meal.len(), 1);
        assert_eq!(meal[0].quantity_grams, 250.0);
        assert_eq!(meal[0].nutrition.calories, 250.0);
    }

    #[test]
    fn test_small_portion_clamped_to_floor() {
        // 900 kcal/100g food with a 90 kcal per-item target asks for 10g;
        // clamped up to 50g.
        let catalog = vec![food("Oil", FoodCategory::Normal, 900.0)];
        let meal = generate_meal(&catalog, MealFilter::All, 90.0, 1, &mut rng()).unwrap();
        assert_eq!(meal[0].quantity_grams, 50.0);
        assert_eq!(meal[0].nutrition.calories, 450.0);
    }

    #[test]
    fn test_zero_calorie_foods_are_skipped() {
        let catalog = vec![
            food("Water", FoodCategory::Normal, 0.0),
            food("Rice", FoodCategory::Normal, 130.0),
        ];
        let meal = generate_meal(&catalog, MealFilter::All, 400.0, 2, &mut rng()).unwrap();
        assert_eq!(meal.len(), 1);
        assert_eq!(meal[0].food_name, "Rice");
    }

    #[test]
    fn test_all_zero_calorie_pool_fails() {
        let catalog = vec![food("Water", FoodCategory::Normal, 0.0)];
        let err = generate_meal(&catalog, MealFilter::All, 400.0, 2, &mut rng());
        assert_eq!(err.unwrap_err(), NutritionError::DivisionUndefined);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let catalog: Vec<Food> = (0..20)
            .map(|i| food(&format!("Food {i}"), FoodCategory::Normal, 100.0 + i as f64))
            .collect();
        let a = generate_meal(&catalog, MealFilter::All, 600.0, 3, &mut rng()).unwrap();
        let b = generate_meal(&catalog, MealFilter::All, 600.0, 3, &mut rng()).unwrap();
        let names_a: Vec<&str> = a.iter().map(|e| e.food_name.as_str()).collect();
        let names_b: Vec<&str> = b.iter().map(|e| e.food_name.as_str()).collect();
        assert_eq!(names_a, names_b);
    }

    #[test]
    fn test_daily_plan_splits_goal_and_clamps() {
        // Single 165 kcal/100g food, 1800 kcal goal: each meal targets 600 kcal
        // for one item, asks for ~364g, clamps to 250g = 412.5 kcal.
        let catalog = vec![food("Chicken", FoodCategory::Normal, 165.0)];
        let plan = generate_daily_plan(&catalog, MealFilter::All, 1800.0, &mut rng()).unwrap();
        for (_, meal) in plan.meals() {
            assert_eq!(meal.len(), 1);
            assert_eq!(meal[0].quantity_grams, 250.0);
            assert!((meal_calories(meal) - 412.5).abs() < 1e-9);
        }
        assert!((plan.total_calories() - 3.0 * 412.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_item_count_rejected() {
        let catalog = vec![food("Rice", FoodCategory::Normal, 130.0)];
        assert!(matches!(
            generate_meal(&catalog, MealFilter::All, 600.0, 0, &mut rng()),
            Err(NutritionError::InvalidInput(_))
        ));
    }
}
