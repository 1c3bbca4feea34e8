//! CLI progress display utilities
//!
//! Step indicators with emojis, plus the extraction progress bar.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};

// Emoji constants (ASCII fallback is empty for terminals without emoji support)

/// Magnifying glass - reading the header and file table
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Package - extracting entries
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");
/// Document - writing the listing
pub static DOCUMENT: Emoji<'_, '_> = Emoji("📄 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Print a step indicator: `[1/3] <emoji> Message...`
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print completion message: `<sparkles> Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

/// Progress bar style with percentage and the entry being processed
///
/// Format: `[####----] 50% (50/100) meta.lsx`
///
/// # Panics
/// Panics if the template string is invalid (this is a compile-time constant).
#[must_use]
pub fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("[{bar:40.cyan/blue}] {percent}% ({pos}/{len}) {wide_msg}")
        .expect("valid template")
}

/// Create a progress bar for `total` entries
#[must_use]
pub fn simple_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(bar_style());
    pb
}
