//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print a warning message.
pub fn print_warning(text: &str) {
    if is_color_disabled() {
        println!("[WARN] {text}");
    } else {
        println!("{} {text}", style("[WARN]").yellow().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_functions_do_not_panic() {
        print_header("Benchmark");
        print_success("products agree");
        print_warning("decode did not recover the payload");
        print_error("unknown algorithm");
    }

    #[test]
    fn print_functions_with_unicode() {
        print_header("Schönhage-Strassen");
        print_success("O(n^log₂3) ≈ O(n^1.585)");
        print_error("");
    }
}
