use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of an invoice or quote.
///
/// `total` is a stored field: it is persisted as provided by the caller and
/// trusted on read, not rederived from `unit_price * quantity`. The two can
/// drift when only one of price/quantity is edited without recomputation;
/// callers that want a derived value go through `compute::line_total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub unit_price: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub total: Decimal,
}

fn default_quantity() -> u32 {
    1
}

impl LineItem {
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            description: String::new(),
            unit_price: Decimal::ZERO,
            quantity: 1,
            total: Decimal::ZERO,
        }
    }
}
