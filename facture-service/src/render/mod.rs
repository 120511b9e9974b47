//! Rendering-collaborator boundary.
//!
//! Builds the fully populated, already-computed view that the PDF exporter
//! consumes. Pagination and drawing happen outside this service; this module
//! only fixes the content: padded item rows, localized dates, the totals
//! block with the amount-in-words sentence, and the export filename.

use crate::compute::{Locale, amount_in_words};
use crate::config::CompanyConfig;
use crate::models::{DocumentType, Invoice};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Item tables are padded with blank rows up to this length so short
/// documents keep the printed layout.
pub const MIN_DISPLAY_ROWS: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct ItemRow {
    pub description: String,
    pub unit_price: String,
    pub quantity: String,
    pub total: String,
}

impl ItemRow {
    fn blank() -> Self {
        Self {
            description: String::new(),
            unit_price: String::new(),
            quantity: String::new(),
            total: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsBlock {
    pub total_ht: String,
    pub tax_rate: String,
    pub tva: String,
    pub timbre: String,
    pub total_ttc: String,
    /// "Arrêtée la présente à la somme de : ..."
    pub amount_in_words: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentDetails {
    pub bank_name: String,
    pub bank_account: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyBlock {
    pub name: String,
    pub tax_id: String,
    pub website: String,
    pub email: String,
    pub address: String,
    pub phone: String,
}

/// A complete A4 document view, ready for the exporter.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    pub title: String,
    pub invoice_number: String,
    pub date: String,
    pub due_date: Option<String>,
    pub client_name: String,
    pub client_address: String,
    pub client_email: String,
    pub client_mf: String,
    pub rows: Vec<ItemRow>,
    pub totals: TotalsBlock,
    /// Present only on invoices; quotes render without payment instructions.
    pub payment: Option<PaymentDetails>,
    pub company: CompanyBlock,
}

impl DocumentView {
    pub fn build(invoice: &Invoice, company: &CompanyConfig) -> Self {
        let mut rows: Vec<ItemRow> = invoice
            .items
            .iter()
            .map(|item| ItemRow {
                description: item.description.clone(),
                unit_price: format!("{:.2}", item.unit_price),
                quantity: item.quantity.to_string(),
                total: format!("{:.2}", item.total),
            })
            .collect();
        while rows.len() < MIN_DISPLAY_ROWS {
            rows.push(ItemRow::blank());
        }

        let words = amount_in_words(invoice.total_ttc, Locale::Fr);
        let totals = TotalsBlock {
            total_ht: format!("{:.2} TND", invoice.total_ht),
            tax_rate: format!("{}%", invoice.tax_rate),
            tva: format!("{:.2} TND", invoice.tva),
            timbre: format!("{:.3} TND", invoice.timbre),
            total_ttc: format!("{:.2} TND", invoice.total_ttc),
            amount_in_words: format!("Arrêtée la présente à la somme de : {} TND", words),
        };

        // Stamp duty is charged on both document types, but payment
        // instructions only appear on invoices.
        let payment = match invoice.document_type {
            DocumentType::Facture => Some(PaymentDetails {
                bank_name: company.bank_name.clone(),
                bank_account: company.bank_account.clone(),
            }),
            DocumentType::Devis => None,
        };

        Self {
            title: invoice.document_type.as_str().to_uppercase(),
            invoice_number: invoice.invoice_number.clone(),
            date: format_date_fr(invoice.date),
            due_date: invoice.due_date.map(format_date_fr),
            client_name: invoice.client_name.clone(),
            client_address: invoice.client_address.clone(),
            client_email: invoice.client_email.clone(),
            client_mf: invoice.client_mf.clone(),
            rows,
            totals,
            payment,
            company: CompanyBlock {
                name: company.name.clone(),
                tax_id: company.tax_id.clone(),
                website: company.website.clone(),
                email: company.email.clone(),
                address: company.address.clone(),
                phone: company.phone.clone(),
            },
        }
    }
}

/// fr-FR short date: dd/mm/yyyy.
pub fn format_date_fr(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Export filename: `{document_type}_{invoice_number}_{timestamp}`, with the
/// colons and dots of the RFC3339 timestamp replaced so the name is safe on
/// every filesystem.
pub fn export_filename(
    document_type: DocumentType,
    invoice_number: &str,
    at: DateTime<Utc>,
) -> String {
    let timestamp = at
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{}_{}_{}", document_type.as_str(), invoice_number, timestamp)
}
