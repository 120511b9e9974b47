pub mod invoices;

pub use invoices::{
    CreateInvoiceRequest, InvoiceListParams, InvoiceListResponse, InvoiceResponse, LineItemInput,
    UpdateInvoiceRequest,
};
