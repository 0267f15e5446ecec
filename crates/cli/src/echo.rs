use owo_colors::OwoColorize;

use lexis_core::{InputRow, ReportRow};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Lexis".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Readability and sentiment metrics for web articles\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print the row about to be fetched
pub fn print_row_started(index: usize, total: usize, row: &InputRow) {
    eprintln!(
        "  {} {} {}",
        format!("({}/{})", index + 1, total).dimmed(),
        row.url_id.bright_white(),
        row.url.underline()
    );
}

/// Print the headline figures of a scored row
pub fn print_row_scored(row: &ReportRow) {
    let m = &row.metrics;
    eprintln!(
        "      {} {}  {} {}  {} {}  {} {}",
        "words".dimmed(),
        m.word_count.to_string().bright_white(),
        "+".green(),
        m.positive_score.to_string().bright_white(),
        "-".red(),
        m.negative_score.to_string().bright_white(),
        "fog".dimmed(),
        format!("{:.2}", m.fog_index).bright_white()
    );
}

/// Print timing information with color coding
pub fn print_timing(label: &str, duration: std::time::Duration) {
    let secs = duration.as_secs_f64();
    let indicator = if secs < 5.0 {
        "fast".dimmed().to_string()
    } else if secs < 30.0 {
        "moderate".bright_yellow().to_string()
    } else {
        "slow".bright_red().to_string()
    };

    eprintln!("  {} {:>8.2}s ({})", format!("{}:", label).dimmed(), secs, indicator);
}
