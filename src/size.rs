const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count with binary unit scaling, e.g. `1536` -> `1.50KB`.
/// Values past the last unit stay in it (`1024.00TB` and beyond).
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.2}{}", size, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_bytes() {
        assert_eq!(format_size(0), "0.00B");
    }

    #[test]
    fn scales_through_the_unit_table() {
        assert_eq!(format_size(1), "1.00B");
        assert_eq!(format_size(1023), "1023.00B");
        assert_eq!(format_size(1024), "1.00KB");
        assert_eq!(format_size(1536), "1.50KB");
        assert_eq!(format_size(1024 * 1024), "1.00MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.00GB");
        assert_eq!(format_size(1024u64.pow(4)), "1.00TB");
    }

    #[test]
    fn never_advances_past_terabytes() {
        assert_eq!(format_size(1024u64.pow(5)), "1024.00TB");
        assert_eq!(format_size(1024u64.pow(5) * 2), "2048.00TB");
    }
}
