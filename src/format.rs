//! Derived display values for a course: duration, price, discount and rating.
//!
//! Everything here is pure. Missing or zero inputs are replaced by fixed
//! fallback values instead of producing errors.

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const FREE_LABEL: &str = "Free";

/// Shown instead of "0.0" when a course has no ratings yet.
pub const FALLBACK_RATING: &str = "4.5";
/// Shown instead of a zero ratings count.
pub const FALLBACK_RATINGS_COUNT: u64 = 150;

/// Cards always draw every star filled, whatever the rating.
pub const STAR_COUNT: u8 = 5;

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// `"{H}h {M}m"`; leftover seconds are dropped and hours never roll into days.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    format!("{hours}h {minutes}m")
}

/// Currency settings for price strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat{
    pub currency_symbol: String,
}

impl Default for PriceFormat {
    fn default() -> Self {
        PriceFormat{ currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string() }
    }
}

impl PriceFormat {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        PriceFormat{ currency_symbol: currency_symbol.into() }
    }

    /// `"Free"` for exactly zero, otherwise the symbol followed by the amount as given.
    pub fn format_price(&self, amount: f64) -> String {
        if amount == 0.0 {
            return FREE_LABEL.to_string();
        }
        format!("{}{}", self.currency_symbol, amount)
    }
}

pub fn format_price(amount: f64) -> String {
    PriceFormat::default().format_price(amount)
}

pub fn discount_active(base: f64, discounted: Option<f64>) -> bool {
    matches!(discounted, Some(price) if price < base)
}

/// Percentage saved, rounded. Zero when no discount is active or the base price is zero.
pub fn discount_percent(base: f64, discounted: Option<f64>) -> u32 {
    let Some(price) = discounted.filter(|_| discount_active(base, discounted)) else {
        return 0;
    };
    if base <= 0.0 {
        return 0;
    }
    (((base - price) / base) * 100.0).round() as u32
}

pub fn discount_badge(base: f64, discounted: Option<f64>) -> Option<String> {
    discount_active(base, discounted).then(|| format!("{}% OFF", discount_percent(base, discounted)))
}

/// Cut to one decimal place, never rounded up.
pub fn format_rating(average_rating: f64) -> String {
    if average_rating > 0.0 {
        // nudge so 4.3 stored as 4.2999.. still cuts to 4.3
        let tenths = (average_rating * 10.0 + 1e-9).trunc() / 10.0;
        format!("{tenths:.1}")
    } else {
        FALLBACK_RATING.to_string()
    }
}

pub fn ratings_count(total_ratings: u64) -> u64 {
    if total_ratings == 0 {
        FALLBACK_RATINGS_COUNT
    } else {
        total_ratings
    }
}

#[cfg(test)]
mod tests{
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "0h 0m")]
    #[case(59, "0h 0m")]
    #[case(60, "0h 1m")]
    #[case(5400, "1h 30m")]
    #[case(3599, "0h 59m")]
    #[case(130_500, "36h 15m")]
    fn duration_truncates_to_hours_and_minutes(#[case] seconds: u64, #[case] expected: &str){
        assert_eq!(format_duration(seconds), expected);
    }

    #[test]
    fn duration_matches_formula_across_a_range(){
        for seconds in (0..200_000).step_by(997) {
            let expected = format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60);
            assert_eq!(format_duration(seconds), expected);
        }
    }

    #[test]
    fn zero_price_is_free(){
        assert_eq!(format_price(0.0), "Free");
    }

    #[test]
    fn price_keeps_its_own_precision(){
        assert_eq!(format_price(499.0), "₹499");
        assert_eq!(format_price(1299.5), "₹1299.5");
        assert_eq!(format_price(100000.0), "₹100000");
    }

    #[test]
    fn currency_symbol_is_configurable(){
        let dollars = PriceFormat::new("$");
        assert_eq!(dollars.format_price(19.0), "$19");
        assert_eq!(dollars.format_price(0.0), "Free");
    }

    #[rstest]
    #[case(999.0, Some(799.0), true)]
    #[case(999.0, Some(999.0), false)]
    #[case(999.0, Some(1200.0), false)]
    #[case(999.0, None, false)]
    fn discount_requires_a_strictly_lower_price(#[case] base: f64, #[case] discounted: Option<f64>, #[case] active: bool){
        assert_eq!(discount_active(base, discounted), active);
    }

    #[rstest]
    #[case(1000.0, Some(750.0), 25)]
    #[case(999.0, Some(799.0), 20)]
    #[case(3.0, Some(1.0), 67)]
    #[case(0.0, Some(0.0), 0)]
    #[case(0.0, Some(-5.0), 0)]
    #[case(500.0, None, 0)]
    fn discount_percent_rounds_and_never_panics(#[case] base: f64, #[case] discounted: Option<f64>, #[case] pct: u32){
        assert_eq!(discount_percent(base, discounted), pct);
    }

    #[test]
    fn badge_only_for_active_discounts(){
        assert_eq!(discount_badge(1000.0, Some(750.0)).as_deref(), Some("25% OFF"));
        assert_eq!(discount_badge(1000.0, Some(1000.0)), None);
        assert_eq!(discount_badge(1000.0, None), None);
    }

    #[test]
    fn rating_falls_back_instead_of_zero(){
        assert_eq!(format_rating(0.0), "4.5");
        assert_ne!(format_rating(0.0), "0.0");
        assert_eq!(format_rating(4.0), "4.0");
    }

    #[rstest]
    #[case(3.24, "3.2")]
    #[case(4.66, "4.6")]
    #[case(4.25, "4.2")]
    #[case(4.99, "4.9")]
    #[case(5.0, "5.0")]
    #[case(4.3, "4.3")]
    fn rating_is_truncated_to_one_decimal(#[case] rating: f64, #[case] expected: &str){
        assert_eq!(format_rating(rating), expected);
    }

    #[test]
    fn ratings_count_falls_back_when_zero(){
        assert_eq!(ratings_count(0), 150);
        assert_eq!(ratings_count(42), 42);
    }
}
