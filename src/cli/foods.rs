//! Food database commands
//!
//! Add, delete, and list catalog foods. Categories are chosen from the closed
//! set at entry time; there are no free-form category strings.

use crate::app::{AppResult, AppState};
use crate::models::{Food, FoodCategory, Nutrition};
use crate::store::DataStore;

use super::console::{clear_screen, print_error, print_header, print_success};
use super::input::{read_f64, read_line, read_nonempty, read_u32, wait_for_enter};

/// Food database submenu
pub fn manage_food_database(state: &mut AppState, store: &DataStore) -> AppResult<()> {
    loop {
        clear_screen();
        print_header("--- Manage Food Database ---");
        println!("1. Add New Food");
        println!("2. Delete Food");
        println!("3. List All Foods");
        println!("4. Return to Main Menu");

        match read_line("Enter your choice: ")?.as_str() {
            "1" => add_food(state, store)?,
            "2" => delete_food(state, store)?,
            "3" => {
                list_foods(state);
                wait_for_enter()?;
            }
            "4" => return Ok(()),
            _ => {
                print_error("Invalid choice.");
                wait_for_enter()?;
            }
        }
    }
}

fn read_category() -> AppResult<FoodCategory> {
    println!("Enter Category (1. Normal, 2. Healthy, 3. Carnivore): ");
    Ok(match read_u32("Choice: ")? {
        2 => FoodCategory::Healthy,
        3 => FoodCategory::Carnivore,
        _ => FoodCategory::Normal,
    })
}

fn add_food(state: &mut AppState, store: &DataStore) -> AppResult<()> {
    clear_screen();
    print_header("--- Add New Food ---");

    let name = read_nonempty("Enter Food Name: ")?;
    let calories = read_f64("Enter Calories (per 100g): ")?;
    let protein = read_f64("Enter Protein (per 100g): ")?;
    let carbs = read_f64("Enter Carbs (per 100g): ")?;
    let fat = read_f64("Enter Fat (per 100g): ")?;
    let category = read_category()?;

    let food = Food::new(name, category, Nutrition::new(calories, protein, carbs, fat));
    let label = format!("{} ({})", food.name, food.category.as_str());
    state.catalog.push(food);
    store.save_catalog(&state.catalog)?;

    print_success(&format!("\n{label} has been added."));
    wait_for_enter()?;
    Ok(())
}

fn delete_food(state: &mut AppState, store: &DataStore) -> AppResult<()> {
    clear_screen();
    print_header("--- Delete Food ---");

    if state.catalog.is_empty() {
        print_error("Food database is empty.");
        wait_for_enter()?;
        return Ok(());
    }

    list_foods(state);
    println!("\n-----------------------------");

    let choice = read_u32("Enter the number of the food to delete (or 0 to cancel): ")? as usize;
    if choice == 0 {
        println!("Deletion cancelled.");
        wait_for_enter()?;
        return Ok(());
    }
    if choice > state.catalog.len() {
        print_error("Invalid number.");
        wait_for_enter()?;
        return Ok(());
    }

    let food = state.catalog.remove(choice - 1);
    store.save_catalog(&state.catalog)?;

    print_success(&format!("\n{} has been deleted.", food.name));
    wait_for_enter()?;
    Ok(())
}

fn list_foods(state: &AppState) {
    clear_screen();
    print_header("--- All Foods in Database ---");

    if state.catalog.is_empty() {
        println!("Food database is empty.");
        return;
    }
    for (i, f) in state.catalog.iter().enumerate() {
        println!(
            "{}. {} [{}] | Cal: {:.0} | P: {:.0}g | C: {:.0}g | F: {:.0}g",
            i + 1,
            f.name,
            f.category.as_str(),
            f.per_100g.calories,
            f.per_100g.protein,
            f.per_100g.carbs,
            f.per_100g.fat
        );
    }
}
