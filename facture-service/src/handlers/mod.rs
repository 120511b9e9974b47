pub mod health;
pub mod invoices;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use invoices::{
    create_invoice, delete_invoice, export_invoice, get_invoice, list_invoices, update_invoice,
};
