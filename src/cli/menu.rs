//! Main menu loop

use crate::app::{AppResult, AppState};
use crate::store::DataStore;

use super::console::{clear_screen, print_error, print_header, print_success};
use super::input::{read_line, wait_for_enter};
use super::{foods, log, profile, suggest};

fn show_main_menu() {
    print_header("NutriLog - Daily Nutrition Tracker");
    println!("1. Set / View User Profile");
    println!("2. Log Food");
    println!("3. View Logged Foods");
    println!("4. View Daily Summary");
    println!("5. View BMI and Calorie Goal");
    println!("6. Meal plan suggestion");
    println!("7. Manage Food Database");
    println!("8. Exit");
}

/// Run the interactive session until the user exits
pub fn run(state: &mut AppState, store: &DataStore) -> AppResult<()> {
    print_header("Welcome to NutriLog - Smart Tracker");

    // First run: no usable biometrics yet
    if !state.profile.is_valid() {
        println!("Let's set up your user profile first.");
        profile::setup_profile(state, store)?;
    }

    loop {
        clear_screen();
        show_main_menu();

        match read_line("Enter your choice: ")?.as_str() {
            "1" => profile::setup_profile(state, store)?,
            "2" => log::log_food_interactive(state, store)?,
            "3" => log::view_logged_foods(state)?,
            "4" => log::daily_summary(state)?,
            "5" => profile::show_bmi_and_goal(state)?,
            "6" => suggest::suggest_meals(state)?,
            "7" => foods::manage_food_database(state, store)?,
            "8" => {
                state.save_all(store)?;
                print_success("Data saved. Exiting. Thank you for using NutriLog!");
                return Ok(());
            }
            _ => {
                print_error("Invalid choice.");
                wait_for_enter()?;
            }
        }
    }
}
