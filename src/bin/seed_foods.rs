//! Utility to seed the food database with a starter catalog

use std::path::PathBuf;

use nutrilog::models::{Food, FoodCategory, Nutrition};
use nutrilog::store::DataStore;

fn get_data_dir() -> PathBuf {
    std::env::var("NUTRILOG_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push("data");
            path
        })
}

fn starter_catalog() -> Vec<Food> {
    use FoodCategory::{Carnivore, Healthy, Normal};

    vec![
        Food::new("Chicken Breast", Carnivore, Nutrition::new(165.0, 31.0, 0.0, 3.6)),
        Food::new("Beef Steak", Carnivore, Nutrition::new(271.0, 25.0, 0.0, 19.0)),
        Food::new("Pork Chop", Carnivore, Nutrition::new(231.0, 25.0, 0.0, 14.0)),
        Food::new("Salmon", Carnivore, Nutrition::new(208.0, 20.0, 0.0, 13.0)),
        Food::new("Eggs", Carnivore, Nutrition::new(155.0, 13.0, 1.1, 11.0)),
        Food::new("Cheddar Cheese", Carnivore, Nutrition::new(403.0, 25.0, 1.3, 33.0)),
        Food::new("Brown Rice", Healthy, Nutrition::new(111.0, 2.6, 23.0, 0.9)),
        Food::new("Oats", Healthy, Nutrition::new(389.0, 16.9, 66.3, 6.9)),
        Food::new("Broccoli", Healthy, Nutrition::new(34.0, 2.8, 6.6, 0.4)),
        Food::new("Banana", Healthy, Nutrition::new(89.0, 1.1, 22.8, 0.3)),
        Food::new("Apple", Healthy, Nutrition::new(52.0, 0.3, 13.8, 0.2)),
        Food::new("White Bread", Normal, Nutrition::new(265.0, 9.0, 49.0, 3.2)),
        Food::new("Pasta", Normal, Nutrition::new(131.0, 5.0, 25.0, 1.1)),
        Food::new("French Fries", Normal, Nutrition::new(312.0, 3.4, 41.0, 15.0)),
        Food::new("Chocolate", Normal, Nutrition::new(546.0, 4.9, 61.0, 31.0)),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = get_data_dir();
    println!("Data directory: {}", data_dir.display());

    let store = DataStore::new(&data_dir)?;

    let existing = store.load_catalog()?;
    if !existing.is_empty() {
        println!(
            "Catalog already has {} foods; not overwriting. Delete foods.json to reseed.",
            existing.len()
        );
        return Ok(());
    }

    let catalog = starter_catalog();
    store.save_catalog(&catalog)?;

    println!("Seeded {} foods:", catalog.len());
    for food in &catalog {
        println!(
            "  {} [{}] {:.0} kcal/100g",
            food.name,
            food.category.as_str(),
            food.per_100g.calories
        );
    }

    Ok(())
}
