// ============================================================================
// inktags-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: UI Components and Styling
//
// Section headers, status lines and messages for human-facing output. Color
// follows `console`'s terminal detection (NO_COLOR, CLICOLOR, tty checks).
// Machine-readable output (`--list`) bypasses this module.

use console::style;

/// Styling constants for terminal output
pub mod styling {
    pub const SUCCESS_SYMBOL: &str = "✓";
    pub const PROCESSING_SYMBOL: &str = "»";
    pub const ERROR_SYMBOL: &str = "✗";

    pub const SECTION_PREFIX: &str = "===== ";
    pub const SECTION_SUFFIX: &str = " =====";

    pub const STATUS_INDENT: &str = "  ";
    pub const STATUS_LABEL_WIDTH: usize = 15;
}

/// Print a section header for a major phase
pub fn print_section(title: &str) {
    println!();
    println!(
        "{}{}{}",
        styling::SECTION_PREFIX,
        style(title.to_uppercase()).cyan().bold(),
        styling::SECTION_SUFFIX
    );
    println!();
}

/// Formats a status line (key-value pair) without printing it.
pub fn format_status(label: &str, value: &str, highlight: bool) -> String {
    let padding = styling::STATUS_LABEL_WIDTH.saturating_sub(label.len()).max(1);
    let value = if highlight {
        style(value).bold().to_string()
    } else {
        value.to_string()
    };
    format!("{}{}:{}{}", styling::STATUS_INDENT, label, " ".repeat(padding), value)
}

/// Print a status line (key-value pair)
pub fn print_status(label: &str, value: &str, highlight: bool) {
    println!("{}", format_status(label, value, highlight));
}

/// Print a processing step message
pub fn print_processing(message: &str) {
    println!("{}{} {}", styling::STATUS_INDENT, styling::PROCESSING_SYMBOL, style(message).bold());
}

pub fn print_success(message: &str) {
    println!("{}{} {}", styling::STATUS_INDENT, styling::SUCCESS_SYMBOL, message);
}

/// Print an error to stderr. Always shown.
pub fn print_error(title: &str, message: &str) {
    eprintln!("{} {}", styling::ERROR_SYMBOL, style(title).red().bold());
    eprintln!("Error: {message}");
}
