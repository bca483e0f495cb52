/// Severity class for a file size, used for display colouring only.
///
/// The backend reports sizes in decimal bytes, so the thresholds are
/// decimal too: 500 MB and 1000 MB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    /// Over 500 MB
    Large,
    /// Over 1000 MB
    Huge,
}

pub const LARGE_BYTES: u64 = 500_000_000;
pub const HUGE_BYTES: u64 = 1_000_000_000;

impl Severity {
    pub fn of(bytes: u64) -> Self {
        if bytes > HUGE_BYTES {
            Severity::Huge
        } else if bytes > LARGE_BYTES {
            Severity::Large
        } else {
            Severity::Normal
        }
    }
}

/// Format bytes into a human-readable string (decimal units)
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1000;
    const MB: u64 = KB * 1000;
    const GB: u64 = MB * 1000;
    const TB: u64 = GB * 1000;

    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format bytes into a short human-readable string (for tight spaces)
pub fn format_size_short(bytes: u64) -> String {
    const KB: u64 = 1000;
    const MB: u64 = KB * 1000;
    const GB: u64 = MB * 1000;
    const TB: u64 = GB * 1000;

    if bytes >= TB {
        format!("{:.0}T", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.0}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.0}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Calculate percentage of size relative to total
pub fn size_percentage(size: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (size as f64 / total as f64) * 100.0
    }
}

/// Format a number with thousand separators (e.g., 1,234,567)
pub fn format_count(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }

    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1000), "1.0 KB");
        assert_eq!(format_size(1500), "1.5 KB");
        assert_eq!(format_size(1_000_000), "1.0 MB");
        assert_eq!(format_size(600_000_000), "600.0 MB");
        assert_eq!(format_size(2_000_000_000), "2.0 GB");
        assert_eq!(format_size(1_000_000_000_000), "1.0 TB");
    }

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(Severity::of(0), Severity::Normal);
        assert_eq!(Severity::of(LARGE_BYTES), Severity::Normal);
        assert_eq!(Severity::of(600_000_000), Severity::Large);
        assert_eq!(Severity::of(HUGE_BYTES), Severity::Large);
        assert_eq!(Severity::of(2_000_000_000), Severity::Huge);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
