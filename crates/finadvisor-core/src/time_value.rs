use rust_decimal::Decimal;

use crate::types::Rate;

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
///
/// Every exponent in this crate is an integer period count, so the iterative
/// form is exact to Decimal precision.
pub fn compound(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

/// Present value of a level annuity: PV = pmt * [(1 - (1+r)^-n) / r]
pub fn pv_annuity(pmt: Decimal, rate: Rate, n: u32) -> Decimal {
    if rate.is_zero() || n == 0 {
        return pmt * Decimal::from(n);
    }
    let compound_factor = compound(rate, n);
    pmt * (Decimal::ONE - Decimal::ONE / compound_factor) / rate
}

/// Future value of a level annuity: FV = pmt * [((1+r)^n - 1) / r]
pub fn fv_annuity(pmt: Decimal, rate: Rate, n: u32) -> Decimal {
    if rate.is_zero() {
        return pmt * Decimal::from(n);
    }
    let compound_factor = compound(rate, n);
    pmt * (compound_factor - Decimal::ONE) / rate
}

/// Payment required to reach a future value via level annuity:
/// FV = pmt * [((1+r)^n - 1) / r]  =>  pmt = FV * r / ((1+r)^n - 1)
pub fn fv_annuity_payment(fv: Decimal, rate: Rate, n: u32) -> Decimal {
    if n == 0 {
        return Decimal::ZERO;
    }
    if rate.is_zero() {
        return fv / Decimal::from(n);
    }
    let compound_factor = compound(rate, n);
    let denom = compound_factor - Decimal::ONE;
    if denom.is_zero() {
        return fv / Decimal::from(n);
    }
    fv * rate / denom
}
