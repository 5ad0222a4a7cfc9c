//! Rounding of quoted totals.

use rust_decimal::Decimal;

/// Rounds `amount` to the nearest 1,000, with halves rounded up.
///
/// Halves go toward positive infinity, so 728,500 becomes 729,000 and
/// -1,500 becomes -1,000.
///
/// # Examples
///
/// ```
/// use build_estimator::calculation::round_to_nearest_thousand;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_to_nearest_thousand(Decimal::from(728_120)), Decimal::from(728_000));
/// assert_eq!(round_to_nearest_thousand(Decimal::from(707_500)), Decimal::from(708_000));
/// ```
pub fn round_to_nearest_thousand(amount: Decimal) -> Decimal {
    let thousand = Decimal::ONE_THOUSAND;
    (amount / thousand + Decimal::new(5, 1)).floor() * thousand
}
