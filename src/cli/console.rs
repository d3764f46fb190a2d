//! Console rendering helpers
//!
//! Colored headers, status lines, and the daily progress bar.

const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

const BAR_WIDTH: usize = 30;

pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
}

pub fn print_header(title: &str) {
    let border = "======================================";
    println!("{CYAN}{border}");
    println!("   {title}");
    println!("{border}{RESET}");
}

pub fn print_success(message: &str) {
    println!("{GREEN}{message}{RESET}");
}

pub fn print_error(message: &str) {
    println!("{RED}{message}{RESET}");
}

/// Draw a calorie progress bar: filled vs. goal, red once over the goal.
pub fn progress_bar(current: f64, max: f64) {
    if max <= 0.0 {
        return;
    }

    let fraction = (current / max).clamp(0.0, 1.0);
    let filled = (fraction * BAR_WIDTH as f64) as usize;

    let bar: String = "█".repeat(filled);
    let background: String = "░".repeat(BAR_WIDTH - filled);
    let color = if current > max { RED } else { GREEN };

    println!(
        "{color}[{bar}{background}]{RESET} {} / {} kcal ({:.0}%)",
        current.round(),
        max.round(),
        fraction * 100.0
    );
}
