//! Profile commands
//!
//! Profile setup (full re-entry of every field) and the BMI/goal view.

use crate::app::{AppResult, AppState};
use crate::nutrition::{categorize, compute_bmi, suggested_calories};
use crate::store::DataStore;

use super::console::{clear_screen, print_header, print_success};
use super::input::{read_f64, read_f64_positive, read_gender, read_u32, read_yes_no, wait_for_enter};

/// Full profile re-entry: gender, age, weight, height, then the calorie goal
/// (suggested from BMI, adjustable by the user). Saves on completion.
pub fn setup_profile(state: &mut AppState, store: &DataStore) -> AppResult<()> {
    clear_screen();
    print_header("--- User Profile Setup ---");

    state.profile.gender = read_gender("Enter Gender (M/F): ")?;
    state.profile.age = read_u32("Enter Age (years): ")?;
    state.profile.weight_kg = read_f64_positive("Enter Weight (kg): ")?;
    state.profile.height_cm = read_f64_positive("Enter Height (cm): ")?;

    let bmi = compute_bmi(state.profile.weight_kg, state.profile.height_cm)?;
    let category = categorize(bmi);
    let suggested = suggested_calories(bmi);

    println!("\nYour BMI is {bmi} ({})", category.as_str());
    println!("Suggested daily calorie goal: {suggested} kcal");

    state.profile.daily_calorie_goal =
        if read_yes_no("Would you like to adjust this value? (Y/N): ")? {
            read_f64("Enter your preferred calorie goal: ")?
        } else {
            suggested
        };

    store.save_profile(&state.profile)?;
    print_success(&format!(
        "\nDaily goal set to {} kcal",
        state.profile.daily_calorie_goal
    ));
    wait_for_enter()?;
    Ok(())
}

/// Read-only BMI and goal view
pub fn show_bmi_and_goal(state: &AppState) -> AppResult<()> {
    clear_screen();
    print_header("--- BMI & Calorie Goal ---");

    let p = &state.profile;
    let bmi = compute_bmi(p.weight_kg, p.height_cm)?;
    let category = categorize(bmi);

    println!(
        "Gender: {}, Age: {}, Weight: {}kg, Height: {}cm",
        p.gender.as_str(),
        p.age,
        p.weight_kg,
        p.height_cm
    );
    println!("BMI: {bmi} ({})", category.as_str());
    println!("Daily Calorie Goal: {} kcal", p.daily_calorie_goal);
    println!();
    wait_for_enter()?;
    Ok(())
}
