use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%) in internal helpers. Public
/// calculator entry points take rates as percentages and convert once.
pub type Rate = Decimal;

/// Round to the 2-decimal presentation contract. Applied to every monetary
/// and percentage field of a returned structure, never to intermediates.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp(2)
}

/// `part` as a percentage of `total`, zero when `total` is zero.
pub fn percent_of(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        Decimal::ZERO
    } else {
        part / total * dec!(100)
    }
}
