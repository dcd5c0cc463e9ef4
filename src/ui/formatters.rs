//! Text formatting for the status bar.

/// Sample count with a comma every three digits.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// RTT in milliseconds: two decimals, whole milliseconds from one second up.
///
/// Callers pass finite values only; `Dataset::summary` drops the rest.
pub fn format_rtt(ms: f64) -> String {
    if ms.abs() >= 1000.0 {
        format!("{:.0}", ms)
    } else {
        format!("{:.2}", ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn rtt_precision() {
        assert_eq!(format_rtt(12.5), "12.50");
        assert_eq!(format_rtt(0.126), "0.13");
        assert_eq!(format_rtt(1500.4), "1500");
    }
}
