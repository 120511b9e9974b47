use crate::dtos::{
    CreateInvoiceRequest, InvoiceListParams, InvoiceListResponse, InvoiceResponse,
    UpdateInvoiceRequest,
};
use crate::render::{DocumentView, export_filename};
use crate::services::metrics::record_invoice_op;
use crate::startup::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use service_core::error::AppError;
use validator::Validate;

pub async fn list_invoices(
    State(state): State<AppState>,
    Query(params): Query<InvoiceListParams>,
) -> Result<impl IntoResponse, AppError> {
    let invoices = state.store.list(params.q.as_deref()).await?;
    record_invoice_op("list");

    let total = invoices.len() as u64;
    let invoices = invoices.into_iter().map(InvoiceResponse::from).collect();

    Ok(Json(InvoiceListResponse { invoices, total }))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Invoice not found")))?;
    record_invoice_op("get");

    Ok(Json(InvoiceResponse::from(invoice)))
}

pub async fn create_invoice(
    State(state): State<AppState>,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    let invoice = request.into_invoice();

    tracing::info!(
        invoice_id = %invoice.id,
        invoice_number = %invoice.invoice_number,
        document_type = %invoice.document_type.as_str(),
        total_ttc = %invoice.total_ttc,
        "Creating invoice"
    );

    state.store.create(&invoice).await?;
    record_invoice_op("create");

    Ok((StatusCode::CREATED, Json(InvoiceResponse::from(invoice))))
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateInvoiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    let existing = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Invoice not found")))?;

    // Merge, then recompute all three totals from the merged item list.
    let updated = request.apply_to(existing);

    if !updated.has_described_item() {
        // Same rule and same 422 shape as the validator-backed checks.
        let mut errors = validator::ValidationErrors::new();
        errors.add(
            "items",
            validator::ValidationError::new("items")
                .with_message("at least one item with a description is required".into()),
        );
        return Err(AppError::ValidationError(errors));
    }

    tracing::info!(
        invoice_id = %id,
        total_ttc = %updated.total_ttc,
        "Updating invoice"
    );

    if !state.store.update(&id, &updated).await? {
        return Err(AppError::NotFound(anyhow::anyhow!("Invoice not found")));
    }
    record_invoice_op("update");

    Ok(Json(InvoiceResponse::from(updated)))
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete(&id).await? {
        return Err(AppError::NotFound(anyhow::anyhow!("Invoice not found")));
    }
    record_invoice_op("delete");

    tracing::info!(invoice_id = %id, "Invoice deleted");

    Ok(Json(json!({ "message": "Invoice deleted successfully" })))
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub filename: String,
    pub view: DocumentView,
}

/// Hand the exporter everything it needs: the populated view and the
/// conventional filename.
pub async fn export_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Invoice not found")))?;
    record_invoice_op("export");

    let filename = export_filename(invoice.document_type, &invoice.invoice_number, Utc::now());
    let view = DocumentView::build(&invoice, &state.config.company);

    Ok(Json(ExportResponse { filename, view }))
}
