//! Number formatting for cards and stats
//!
//! Vote counts and totals are shortened with K/M suffixes; ratings use
//! fixed decimals. Exact halves round up (`1250 -> "1.3K"`), unlike the
//! half-to-even rounding of `{:.1}` on its own.

/// Shorten a count: `1500000 -> "1.5M"`, `2500 -> "2.5K"`, `42 -> "42"`
pub fn format_number(num: u64) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", round_half_up(num as f64 / 1_000_000.0, 1))
    } else if num >= 1_000 {
        format!("{:.1}K", round_half_up(num as f64 / 1_000.0, 1))
    } else {
        num.to_string()
    }
}

/// Rating with one decimal place
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", round_half_up(rating, 1))
}

/// Averages shown with two decimal places
pub fn format_average(value: f64) -> String {
    format!("{:.2}", round_half_up(value, 2))
}

fn round_half_up(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Similarity score (0..1) as a rounded percentage: `0.874 -> "87%"`
pub fn format_similarity(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}

/// Round a non-negative average to the nearest whole count
pub fn round_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_millions() {
        assert_eq!(format_number(1_500_000), "1.5M");
        assert_eq!(format_number(1_000_000), "1.0M");
        assert_eq!(format_number(23_456_789), "23.5M");
    }

    #[test]
    fn test_format_number_thousands() {
        assert_eq!(format_number(2_500), "2.5K");
        assert_eq!(format_number(1_000), "1.0K");
        assert_eq!(format_number(999_949), "999.9K");
    }

    #[test]
    fn test_format_number_plain() {
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn test_exact_halves_round_up() {
        assert_eq!(format_number(1_250), "1.3K");
        assert_eq!(format_number(1_250_000), "1.3M");
        assert_eq!(format_rating(7.25), "7.3");
        assert_eq!(format_average(6.125), "6.13");
    }

    #[test]
    fn test_format_rating_and_average() {
        assert_eq!(format_rating(8.0), "8.0");
        assert_eq!(format_rating(7.24), "7.2");
        assert_eq!(format_average(6.0921), "6.09");
        assert_eq!(format_average(5.0), "5.00");
    }

    #[test]
    fn test_format_similarity_rounds() {
        assert_eq!(format_similarity(0.874), "87%");
        assert_eq!(format_similarity(0.875), "88%");
        assert_eq!(format_similarity(1.0), "100%");
        assert_eq!(format_similarity(0.0), "0%");
    }

    #[test]
    fn test_round_count() {
        assert_eq!(round_count(1234.6), 1235);
        assert_eq!(round_count(-3.0), 0);
        assert_eq!(round_count(f64::NAN), 0);
    }
}
