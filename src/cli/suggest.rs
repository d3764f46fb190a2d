//! Meal suggestion command
//!
//! Prompts for a diet filter, generates a full day of meals from the catalog,
//! and offers to regenerate until the user is happy.

use crate::app::{AppResult, AppState};
use crate::models::LogEntry;
use crate::nutrition::{generate_daily_plan, meal_nutrition, MealFilter, NutritionError};

use super::console::{clear_screen, print_error, print_header};
use super::input::{read_u32, read_yes_no, wait_for_enter};

/// Meal suggestion flow
pub fn suggest_meals(state: &AppState) -> AppResult<()> {
    clear_screen();
    print_header("--- Meal Suggestion ---");

    if state.catalog.is_empty() {
        print_error("No foods available. Add some in Manage Food Database first.");
        wait_for_enter()?;
        return Ok(());
    }

    println!("Choose your diet preference for this meal:");
    println!("1. Normal (All Foods)");
    println!("2. Healthy (Fruits, Veggies, Grains, Lean Meats)");
    println!("3. Carnivore (Meat, Eggs, Fish, Dairy)");
    let filter = match read_u32("Enter choice: ")? {
        2 => MealFilter::Healthy,
        3 => MealFilter::Carnivore,
        _ => MealFilter::All,
    };

    let goal = state.profile.daily_calorie_goal;
    let mut rng = rand::thread_rng();

    loop {
        clear_screen();
        print_header("--- Meal Suggestion ---");
        println!("Generating {} meals...", filter.as_str());

        match generate_daily_plan(&state.catalog, filter, goal, &mut rng) {
            Ok(plan) => {
                for (title, meal) in plan.meals() {
                    print_meal(title, meal);
                }
                println!("\n===================================");
                println!(
                    "Total Daily Calories: {:.0} kcal (Goal: {} kcal)",
                    plan.total_calories(),
                    goal
                );
                println!("===================================");
            }
            Err(NutritionError::EmptyCandidateSet) => {
                print_error("No foods found for this category! Try adding more foods.");
                wait_for_enter()?;
                return Ok(());
            }
            Err(NutritionError::DivisionUndefined) => {
                print_error("Every matching food has zero calories; cannot size portions.");
                wait_for_enter()?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        if !read_yes_no("\nDo you want to generate a new meal suggestion? (Y/N): ")? {
            break;
        }
    }

    println!();
    wait_for_enter()?;
    Ok(())
}

fn print_meal(title: &str, meal: &[LogEntry]) {
    println!("\n--- {title} ---");
    for entry in meal {
        println!(
            "- {} [{}] ({:.1}g) -> {:.0} kcal (P:{:.0}g C:{:.0}g F:{:.0}g)",
            entry.food_name,
            entry.category.as_str(),
            entry.quantity_grams,
            entry.nutrition.calories,
            entry.nutrition.protein,
            entry.nutrition.carbs,
            entry.nutrition.fat
        );
    }
    let total = meal_nutrition(meal);
    println!(
        "  [Meal Total: {:.0} kcal | P: {:.0}g C: {:.0}g F: {:.0}g]",
        total.calories, total.protein, total.carbs, total.fat
    );
}
