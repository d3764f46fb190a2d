//! Input helpers
//!
//! Re-prompting readers for the interactive menu. All validation of raw
//! console input happens here; the engine only ever sees parsed values.

use std::io::{self, Write};

use crate::models::Gender;

use super::console::print_error;

/// Print a prompt (without newline) and read one trimmed line
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

/// Read a non-negative number, re-prompting on bad input
pub fn read_f64(prompt: &str) -> io::Result<f64> {
    loop {
        let line = read_line(prompt)?;
        match line.parse::<f64>() {
            Ok(val) if val >= 0.0 => return Ok(val),
            _ => print_error("Invalid input. Enter a positive number."),
        }
    }
}

/// Read a strictly positive number, re-prompting on zero or bad input
pub fn read_f64_positive(prompt: &str) -> io::Result<f64> {
    loop {
        let val = read_f64(prompt)?;
        if val > 0.0 {
            return Ok(val);
        }
        print_error("Value must be greater than zero.");
    }
}

/// Read a non-negative integer, re-prompting on bad input
pub fn read_u32(prompt: &str) -> io::Result<u32> {
    loop {
        let line = read_line(prompt)?;
        match line.parse::<u32>() {
            Ok(val) => return Ok(val),
            Err(_) => print_error("Invalid input. Enter a valid number."),
        }
    }
}

/// Read a non-empty string, re-prompting on empty input
pub fn read_nonempty(prompt: &str) -> io::Result<String> {
    loop {
        let line = read_line(prompt)?;
        if !line.is_empty() {
            return Ok(line);
        }
        print_error("Input cannot be empty. Please try again.");
    }
}

/// Read M or F, re-prompting on anything else
pub fn read_gender(prompt: &str) -> io::Result<Gender> {
    loop {
        let line = read_line(prompt)?.to_uppercase();
        match line.as_str() {
            "M" => return Ok(Gender::M),
            "F" => return Ok(Gender::F),
            _ => print_error("Invalid input. Please enter M or F."),
        }
    }
}

/// Read a Y/N answer; empty input counts as no
pub fn read_yes_no(prompt: &str) -> io::Result<bool> {
    let line = read_line(prompt)?.to_uppercase();
    Ok(line == "Y")
}

/// Pause until the user presses enter
pub fn wait_for_enter() -> io::Result<()> {
    let _ = read_line("Press Enter to continue...")?;
    Ok(())
}
