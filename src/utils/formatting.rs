//! Formatting utilities used for CLI and report outputs.

/// Format a non-negative minute count as "7h 30min".
pub fn hm(mins: i64) -> String {
    let m = mins.abs();
    format!("{}h {:02}min", m / 60, m % 60)
}

/// Format a signed minute count with an explicit sign: "+2h 05min".
/// Zero renders as "+0h 00min", matching the report convention.
pub fn signed_hm(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "+" };
    format!("{}{}", sign, hm(mins))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(hm(450), "7h 30min");
        assert_eq!(hm(0), "0h 00min");
        assert_eq!(hm(61), "1h 01min");
    }

    #[test]
    fn signed_formats() {
        assert_eq!(signed_hm(125), "+2h 05min");
        assert_eq!(signed_hm(-45), "-0h 45min");
        assert_eq!(signed_hm(0), "+0h 00min");
    }

}
