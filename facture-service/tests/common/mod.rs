//! Shared test harness: an in-memory `InvoiceStore` and a router wired to it.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use facture_service::config::{CompanyConfig, FactureConfig, MongoConfig};
use facture_service::models::Invoice;
use facture_service::services::InvoiceStore;
use facture_service::startup::{AppState, build_router};
use http_body_util::BodyExt;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

#[derive(Default)]
pub struct MemoryStore {
    invoices: RwLock<Vec<Invoice>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvoiceStore for MemoryStore {
    async fn list(&self, filter: Option<&str>) -> Result<Vec<Invoice>, AppError> {
        let invoices = self.invoices.read().await;
        let needle = filter.unwrap_or("").to_lowercase();
        let mut matching: Vec<Invoice> = invoices
            .iter()
            .filter(|invoice| {
                needle.is_empty()
                    || invoice.invoice_number.to_lowercase().contains(&needle)
                    || invoice.client_name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn get(&self, id: &str) -> Result<Option<Invoice>, AppError> {
        let invoices = self.invoices.read().await;
        Ok(invoices.iter().find(|invoice| invoice.id == id).cloned())
    }

    async fn create(&self, invoice: &Invoice) -> Result<(), AppError> {
        self.invoices.write().await.push(invoice.clone());
        Ok(())
    }

    async fn update(&self, id: &str, invoice: &Invoice) -> Result<bool, AppError> {
        let mut invoices = self.invoices.write().await;
        match invoices.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => {
                *existing = invoice.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut invoices = self.invoices.write().await;
        let before = invoices.len();
        invoices.retain(|invoice| invoice.id != id);
        Ok(invoices.len() < before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub fn test_config() -> FactureConfig {
    FactureConfig {
        common: CoreConfig {
            port: 0,
            log_level: "info".to_string(),
            otlp_endpoint: None,
        },
        mongodb: MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "facture_test".to_string(),
        },
        company: CompanyConfig {
            name: "Bureau de Consulting en Informatique".to_string(),
            tax_id: "1912549Q/A/M/000".to_string(),
            website: "www.acrecert.com".to_string(),
            email: "contact@acrecert.com".to_string(),
            address: "Cheraf, Bekalta, Monastir".to_string(),
            phone: "99 10 99 72 / 99 10 99 87".to_string(),
            bank_name: "UIB-Teboulba".to_string(),
            bank_account: "12 905 00 00033037045 84".to_string(),
        },
    }
}

pub fn test_app() -> Router {
    build_router(AppState {
        config: test_config(),
        store: Arc::new(MemoryStore::new()),
    })
}

/// Drive one request through the router and decode the JSON body.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("Failed to encode request body"))
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Request failed");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };
    (status, value)
}
