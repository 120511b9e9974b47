//! Export-view and health endpoint tests.

mod common;

use axum::http::StatusCode;
use common::{request, test_app};
use serde_json::json;

fn facture_payload() -> serde_json::Value {
    json!({
        "invoice_number": "0022025",
        "date": "2025-03-15",
        "due_date": "2025-04-15",
        "client_name": "Société Exemple",
        "client_address": "Rue de la Liberté, Tunis",
        "client_email": "contact@exemple.tn",
        "client_mf": "1234567A/B/C/000",
        "items": [ { "description": "Conseil", "total": "150.50" } ],
        "document_type": "facture"
    })
}

#[tokio::test]
async fn export_builds_a_complete_facture_view() {
    let app = test_app();

    let (_, created) = request(&app, "POST", "/invoices", Some(facture_payload())).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = request(&app, "GET", &format!("/invoices/{}/export", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let filename = body["filename"].as_str().unwrap();
    assert!(
        filename.starts_with("facture_0022025_"),
        "unexpected filename {}",
        filename
    );
    // Timestamp separators must be filesystem safe
    assert!(!filename.contains(':') && !filename.contains('.'));

    let view = &body["view"];
    assert_eq!(view["title"], "FACTURE");
    assert_eq!(view["date"], "15/03/2025");
    assert_eq!(view["due_date"], "15/04/2025");

    // One real row plus blank padding up to the minimum display length
    let rows = view["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["description"], "Conseil");
    assert_eq!(rows[0]["total"], "150.50");
    assert_eq!(rows[4]["description"], "");

    assert_eq!(view["totals"]["total_ht"], "150.50 TND");
    assert_eq!(view["totals"]["tax_rate"], "19%");
    assert_eq!(view["totals"]["tva"], "28.60 TND");
    assert_eq!(view["totals"]["timbre"], "1.000 TND");
    assert_eq!(view["totals"]["total_ttc"], "180.10 TND");
    assert_eq!(
        view["totals"]["amount_in_words"],
        "Arrêtée la présente à la somme de : Cent quatre-vingts dinars et cent millimes TND"
    );

    // Invoices carry payment instructions
    assert_eq!(view["payment"]["bank_name"], "UIB-Teboulba");
    assert_eq!(view["payment"]["bank_account"], "12 905 00 00033037045 84");

    assert_eq!(view["company"]["tax_id"], "1912549Q/A/M/000");
}

#[tokio::test]
async fn devis_export_omits_payment_and_due_date() {
    let app = test_app();

    let mut payload = facture_payload();
    payload["document_type"] = json!("devis");
    let (_, created) = request(&app, "POST", "/invoices", Some(payload)).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = request(&app, "GET", &format!("/invoices/{}/export", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let view = &body["view"];
    assert_eq!(view["title"], "DEVIS");
    assert!(view["due_date"].is_null());
    assert!(view["payment"].is_null());
    // Stamp duty still applies to quotes
    assert_eq!(view["totals"]["timbre"], "1.000 TND");

    let filename = body["filename"].as_str().unwrap();
    assert!(filename.starts_with("devis_0022025_"));
}

#[tokio::test]
async fn export_unknown_invoice_returns_404() {
    let app = test_app();

    let (status, _) = request(&app, "GET", "/invoices/missing/export", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_and_readiness_respond() {
    let app = test_app();

    let (status, body) = request(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "facture-service");

    let (status, _) = request(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
}
