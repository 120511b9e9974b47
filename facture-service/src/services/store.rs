use crate::models::Invoice;
use crate::services::MongoDb;
use crate::services::metrics::record_db_query_duration;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use service_core::error::AppError;

/// Persistence seam for invoice documents.
///
/// The service talks to storage only through this trait, so handler tests
/// can run against an in-memory implementation.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// All documents, newest first, optionally filtered by a substring of
    /// the invoice number or client name.
    async fn list(&self, filter: Option<&str>) -> Result<Vec<Invoice>, AppError>;

    async fn get(&self, id: &str) -> Result<Option<Invoice>, AppError>;

    async fn create(&self, invoice: &Invoice) -> Result<(), AppError>;

    /// Full-document replace. Returns false when no document matched.
    async fn update(&self, id: &str, invoice: &Invoice) -> Result<bool, AppError>;

    /// Permanent removal. Returns false when no document matched.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

pub struct MongoInvoiceStore {
    db: MongoDb,
}

impl MongoInvoiceStore {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InvoiceStore for MongoInvoiceStore {
    async fn list(&self, filter: Option<&str>) -> Result<Vec<Invoice>, AppError> {
        let query = match filter {
            Some(q) if !q.is_empty() => doc! {
                "$or": [
                    { "invoice_number": { "$regex": q, "$options": "i" } },
                    { "client_name": { "$regex": q, "$options": "i" } },
                ]
            },
            _ => doc! {},
        };

        let started = std::time::Instant::now();
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let mut cursor = self
            .db
            .invoices()
            .find(query, find_options)
            .await
            .map_err(AppError::from)?;

        let mut invoices = Vec::new();
        while let Some(invoice) = cursor.try_next().await.map_err(AppError::from)? {
            invoices.push(invoice);
        }
        record_db_query_duration("list", started.elapsed());
        Ok(invoices)
    }

    async fn get(&self, id: &str) -> Result<Option<Invoice>, AppError> {
        let started = std::time::Instant::now();
        let invoice = self
            .db
            .invoices()
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(AppError::from)?;
        record_db_query_duration("get", started.elapsed());
        Ok(invoice)
    }

    async fn create(&self, invoice: &Invoice) -> Result<(), AppError> {
        let started = std::time::Instant::now();
        self.db
            .invoices()
            .insert_one(invoice, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert invoice {}: {}", invoice.id, e);
                AppError::from(e)
            })?;
        record_db_query_duration("create", started.elapsed());
        Ok(())
    }

    async fn update(&self, id: &str, invoice: &Invoice) -> Result<bool, AppError> {
        let started = std::time::Instant::now();
        let result = self
            .db
            .invoices()
            .replace_one(doc! { "_id": id }, invoice, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update invoice {}: {}", id, e);
                AppError::from(e)
            })?;
        record_db_query_duration("update", started.elapsed());
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let started = std::time::Instant::now();
        let result = self
            .db
            .invoices()
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete invoice {}: {}", id, e);
                AppError::from(e)
            })?;
        record_db_query_duration("delete", started.elapsed());
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.health_check().await
    }
}
