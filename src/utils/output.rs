// Colored terminal output helpers
use colored::Colorize;

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}

pub fn print_info(msg: &str) {
    println!("{}", msg);
}

/// Pack key with an optional dimmed status suffix, e.g. `ARM.CMSIS.5.9.0 (installed)`
pub fn format_pack_line(key: &str, status: Option<&str>) -> String {
    match status {
        Some(status) => format!("{} {}", key, format!("({})", status).dimmed()),
        None => key.to_string(),
    }
}
