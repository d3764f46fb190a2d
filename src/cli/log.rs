//! Food logging commands
//!
//! Logging a portion, listing today's entries, and the daily summary view.

use chrono::Local;

use crate::app::{AppResult, AppState};
use crate::models::find_matches;
use crate::nutrition::{compare_to_goal, GoalStatus};
use crate::store::DataStore;

use super::console::{clear_screen, print_error, print_header, print_success, progress_bar};
use super::input::{read_f64, read_line, read_u32, wait_for_enter};

/// Search the catalog, pick a food, enter grams, append a scaled entry.
pub fn log_food_interactive(state: &mut AppState, store: &DataStore) -> AppResult<()> {
    clear_screen();
    print_header("--- Log Food ---");

    if state.catalog.is_empty() {
        print_error("No foods available. Add some in Manage Food Database first.");
        wait_for_enter()?;
        return Ok(());
    }

    let query = read_line("Enter food (chicken, beef, pork, fish, etc.): ")?;
    let matches = find_matches(&state.catalog, &query);

    let food_index = match matches.as_slice() {
        [] => {
            print_error("Food not found. Please add it to the database first.");
            wait_for_enter()?;
            return Ok(());
        }
        [only] => *only,
        _ => {
            println!("Multiple matches found:");
            for (n, &idx) in matches.iter().enumerate() {
                let f = &state.catalog[idx];
                println!("{}. {} ({})", n + 1, f.name, f.category.as_str());
            }
            let choice = read_u32("Enter number: ")? as usize;
            if choice == 0 || choice > matches.len() {
                print_error("Invalid selection. Returning...");
                wait_for_enter()?;
                return Ok(());
            }
            matches[choice - 1]
        }
    };

    let name = state.catalog[food_index].name.clone();
    let grams = read_f64(&format!("Enter amount in grams for {name}: "))?;

    let entry = state.log_food(food_index, grams, Local::now())?;
    store.save_log(&state.log)?;

    println!(
        "\nLogged: {} ({}) — {}g",
        entry.food_name,
        entry.category.as_str(),
        grams
    );
    print_success(&format!(
        "Calories: {:.0} kcal | Protein: {:.0}g | Carbs: {:.0}g | Fat: {:.0}g",
        entry.nutrition.calories,
        entry.nutrition.protein,
        entry.nutrition.carbs,
        entry.nutrition.fat
    ));
    wait_for_enter()?;
    Ok(())
}

/// List today's log entries
pub fn view_logged_foods(state: &AppState) -> AppResult<()> {
    clear_screen();
    print_header("--- Logged Foods ---");

    let todays = state.todays_entries();
    if todays.is_empty() {
        println!("No foods logged for today yet.");
    } else {
        for e in todays {
            println!(
                "{} | {} [{}] x{}g — {:.0} kcal",
                e.logged_at.format("%H:%M"),
                e.food_name,
                e.category.as_str(),
                e.quantity_grams,
                e.nutrition.calories
            );
        }
    }

    println!();
    wait_for_enter()?;
    Ok(())
}

/// Progress bar, macro totals, and goal status for today
pub fn daily_summary(state: &AppState) -> AppResult<()> {
    clear_screen();
    print_header("--- Daily Summary ---");

    let totals = state.todays_totals();
    let goal = state.profile.daily_calorie_goal;

    progress_bar(totals.nutrition.calories, goal);

    println!("\n--- Totals ---");
    println!(
        "Protein: {:.0}g, Carbs: {:.0}g, Fat: {:.0}g",
        totals.nutrition.protein, totals.nutrition.carbs, totals.nutrition.fat
    );

    println!("\n--- Status ---");
    match compare_to_goal(totals.nutrition.calories, goal) {
        GoalStatus::BelowGoal => {
            print_success("Status: Below goal. You can eat more nutritious food!")
        }
        GoalStatus::OnGoal => print_success("Status: Perfect! You met your calorie goal!"),
        GoalStatus::AboveGoal => print_error("Status: Above goal. Try balancing tomorrow."),
    }

    println!();
    wait_for_enter()?;
    Ok(())
}
