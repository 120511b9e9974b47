//! Derived-totals and amount-in-words engine.
//!
//! Pure and stateless: the live form preview and the save path both call the
//! same functions, so the displayed and persisted totals agree by
//! construction. Missing numeric inputs are coerced to a default instead of
//! being rejected; this engine never fails.

pub mod totals;
pub mod words;

pub use totals::{
    DEFAULT_TAX_RATE_PERCENT, Totals, compute_totals, grand_total, line_total, subtotal, tax,
};
pub use words::{Locale, amount_in_words};
