use crate::models::LineItem;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Tax rate (percent) substituted when the caller provides none.
pub const DEFAULT_TAX_RATE_PERCENT: u32 = 19;

/// Rounding is applied at each derived value (line total, subtotal, tax,
/// grand total) independently, half away from zero. Stored documents were
/// produced under this "round at each step" policy, so it must not be
/// replaced by a single rounding at the end.
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// All three derived totals of a document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub total_ht: Decimal,
    pub tva: Decimal,
    pub total_ttc: Decimal,
}

/// Line total: `unit_price * quantity`, rounded to 2 decimal places.
///
/// Bounds (`unit_price >= 0`, `quantity >= 1`) are the caller's concern;
/// the boundary values 0 and 1 are well defined here.
pub fn line_total(unit_price: Decimal, quantity: u32) -> Decimal {
    round2(unit_price * Decimal::from(quantity))
}

/// Subtotal (total HT): sum of each line's *stored* total, rounded to 2
/// decimal places. An empty list yields 0.00.
pub fn subtotal(items: &[LineItem]) -> Decimal {
    round2(items.iter().map(|item| item.total).sum())
}

/// Tax amount (TVA): `subtotal * rate / 100`, rounded to 2 decimal places.
/// A missing rate is coerced to 19 percent.
pub fn tax(subtotal: Decimal, rate: Option<Decimal>) -> Decimal {
    let rate = rate.unwrap_or_else(|| Decimal::from(DEFAULT_TAX_RATE_PERCENT));
    round2(subtotal * rate / Decimal::ONE_HUNDRED)
}

/// Grand total (total TTC): `subtotal + tax + stamp_duty`, rounded to 2
/// decimal places. Stamp duty is added after tax and is itself untaxed; a
/// missing stamp duty is coerced to 0.
pub fn grand_total(subtotal: Decimal, tax: Decimal, stamp_duty: Option<Decimal>) -> Decimal {
    round2(subtotal + tax + stamp_duty.unwrap_or(Decimal::ZERO))
}

/// Derive all three totals from the current item list.
pub fn compute_totals(
    items: &[LineItem],
    tax_rate: Option<Decimal>,
    stamp_duty: Option<Decimal>,
) -> Totals {
    let total_ht = subtotal(items);
    let tva = tax(total_ht, tax_rate);
    let total_ttc = grand_total(total_ht, tva, stamp_duty);
    Totals {
        total_ht,
        tva,
        total_ttc,
    }
}
