//! Progress bar utilities for the CLI

use indicatif::{ProgressBar, ProgressStyle};

/// Create a percent-based progress bar for a shred run
pub fn create_shred_progress_bar(name: &str, silent: bool) -> ProgressBar {
    if silent {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  {spinner:.green} Shredding {msg} [{bar:40.cyan/blue}] {pos}% ({elapsed})")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb.set_message(name.to_string());

    pb
}

/// Format a size in bytes to human-readable format
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_progress_bar_silent() {
        let pb = create_shred_progress_bar("file.txt", true);
        assert!(pb.is_hidden());
    }

    #[test]
    fn test_create_progress_bar_length() {
        let pb = create_shred_progress_bar("file.txt", false);
        assert_eq!(pb.length(), Some(100));
        assert_eq!(pb.message(), "file.txt");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(3500), "3.42 KB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.00 GB");
        assert_eq!(format_size(2 * 1024 * 1024 * 1024 * 1024), "2.00 TB");
    }
}
