use crate::compute;
use crate::models::{DocumentType, Invoice, LineItem};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Line item as submitted by the form. Missing numbers are coerced to
/// defaults rather than rejected; a missing stored total is derived from
/// price and quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemInput {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub total: Option<Decimal>,
}

impl From<LineItemInput> for LineItem {
    fn from(input: LineItemInput) -> Self {
        let unit_price = input.unit_price.unwrap_or(Decimal::ZERO);
        let quantity = input.quantity.unwrap_or(1);
        // Trust a submitted total (legacy stored-field behaviour); derive it
        // only when the form did not send one.
        let total = input
            .total
            .unwrap_or_else(|| compute::line_total(unit_price, quantity));
        LineItem {
            description: input.description,
            unit_price,
            quantity,
            total,
        }
    }
}

fn validate_items(items: &[LineItemInput]) -> Result<(), ValidationError> {
    if items.iter().any(|item| !item.description.trim().is_empty()) {
        Ok(())
    } else {
        Err(ValidationError::new("items").with_message(
            "at least one item with a description is required".into(),
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    #[validate(length(min = 1, message = "invoice number is required"))]
    pub invoice_number: String,
    pub date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "client name is required"))]
    pub client_name: String,
    #[serde(default)]
    pub client_address: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub client_mf: String,
    #[validate(custom(function = "validate_items"))]
    pub items: Vec<LineItemInput>,
    pub timbre: Option<Decimal>,
    pub tax_rate: Option<Decimal>,
    #[serde(default)]
    pub document_type: DocumentType,
}

impl CreateInvoiceRequest {
    /// Build the document to persist: totals are computed here, at save
    /// time, from the submitted item list.
    pub fn into_invoice(self) -> Invoice {
        let now = Utc::now();
        let items: Vec<LineItem> = self.items.into_iter().map(LineItem::from).collect();
        let timbre = self.timbre.unwrap_or_else(default_timbre);
        let tax_rate = self
            .tax_rate
            .unwrap_or_else(|| Decimal::from(compute::DEFAULT_TAX_RATE_PERCENT));
        let totals = compute::compute_totals(&items, Some(tax_rate), Some(timbre));
        let due_date = match self.document_type {
            DocumentType::Facture => self.due_date,
            DocumentType::Devis => None,
        };
        Invoice {
            id: Uuid::new_v4().to_string(),
            invoice_number: self.invoice_number,
            date: self.date.unwrap_or_else(|| now.date_naive()),
            due_date,
            client_name: self.client_name,
            client_address: self.client_address,
            client_email: self.client_email,
            client_mf: self.client_mf,
            items,
            timbre,
            tax_rate,
            document_type: self.document_type,
            total_ht: totals.total_ht,
            tva: totals.tva,
            total_ttc: totals.total_ttc,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full-field edit: provided fields replace the stored ones, and all three
/// totals are recomputed from the then-current item list. Last writer wins;
/// there is no optimistic-concurrency check.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateInvoiceRequest {
    #[validate(length(min = 1, message = "invoice number is required"))]
    pub invoice_number: Option<String>,
    pub date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "client name is required"))]
    pub client_name: Option<String>,
    pub client_address: Option<String>,
    pub client_email: Option<String>,
    pub client_mf: Option<String>,
    #[validate(custom(function = "validate_items"))]
    pub items: Option<Vec<LineItemInput>>,
    pub timbre: Option<Decimal>,
    pub tax_rate: Option<Decimal>,
    pub document_type: Option<DocumentType>,
}

impl UpdateInvoiceRequest {
    pub fn apply_to(self, mut invoice: Invoice) -> Invoice {
        if let Some(number) = self.invoice_number {
            invoice.invoice_number = number;
        }
        if let Some(date) = self.date {
            invoice.date = date;
        }
        if let Some(due_date) = self.due_date {
            invoice.due_date = Some(due_date);
        }
        if let Some(name) = self.client_name {
            invoice.client_name = name;
        }
        if let Some(address) = self.client_address {
            invoice.client_address = address;
        }
        if let Some(email) = self.client_email {
            invoice.client_email = email;
        }
        if let Some(mf) = self.client_mf {
            invoice.client_mf = mf;
        }
        if let Some(items) = self.items {
            invoice.items = items.into_iter().map(LineItem::from).collect();
        }
        if let Some(timbre) = self.timbre {
            invoice.timbre = timbre;
        }
        if let Some(rate) = self.tax_rate {
            invoice.tax_rate = rate;
        }
        if let Some(document_type) = self.document_type {
            invoice.document_type = document_type;
        }
        // Quotes carry no due date.
        if invoice.document_type == DocumentType::Devis {
            invoice.due_date = None;
        }

        let totals = compute::compute_totals(
            &invoice.items,
            Some(invoice.tax_rate),
            Some(invoice.timbre),
        );
        invoice.total_ht = totals.total_ht;
        invoice.tva = totals.tva;
        invoice.total_ttc = totals.total_ttc;
        invoice.updated_at = Utc::now();
        invoice
    }
}

fn default_timbre() -> Decimal {
    // 1.000 TND stamp duty on every document
    Decimal::new(1000, 3)
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
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
    pub created_at: String,
    pub updated_at: String,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id,
            invoice_number: invoice.invoice_number,
            date: invoice.date,
            due_date: invoice.due_date,
            client_name: invoice.client_name,
            client_address: invoice.client_address,
            client_email: invoice.client_email,
            client_mf: invoice.client_mf,
            items: invoice.items,
            timbre: invoice.timbre,
            tax_rate: invoice.tax_rate,
            document_type: invoice.document_type,
            total_ht: invoice.total_ht,
            tva: invoice.tva,
            total_ttc: invoice.total_ttc,
            created_at: invoice.created_at.to_rfc3339(),
            updated_at: invoice.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InvoiceListParams {
    /// Substring filter on invoice number or client name.
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<InvoiceResponse>,
    pub total: u64,
}
