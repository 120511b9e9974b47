//! Invoice document model for facture-service.

use crate::models::LineItem;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Document variant. Quotes (devis) share the invoice schema but carry no
/// due date and render without payment instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    #[default]
    Facture,
    Devis,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Facture => "facture",
            DocumentType::Devis => "devis",
        }
    }

    /// Display label with the first letter capitalised, as shown in the
    /// history view.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Facture => "Facture",
            DocumentType::Devis => "Devis",
        }
    }
}

/// Persisted invoice/quote document.
///
/// The three totals are computed by the totals engine at save time and
/// stored alongside the line items; they are not recomputed on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: String,
    pub invoice_number: String,
    pub date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub client_name: String,
    pub client_address: String,
    pub client_email: String,
    pub client_mf: String,
    pub items: Vec<LineItem>,
    pub timbre: Decimal,
    pub tax_rate: Decimal,
    pub document_type: DocumentType,
    pub total_ht: Decimal,
    pub tva: Decimal,
    pub total_ttc: Decimal,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// At least one line with a non-empty description is required before a
    /// document may be persisted.
    pub fn has_described_item(&self) -> bool {
        self.items.iter().any(LineItem::has_description)
    }
}
