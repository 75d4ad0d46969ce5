//! Service HTTP pour l'envoi d'archives de factures vers le service de traitement

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::UPLOAD_FIELD;
use crate::types::{AppError, AppResult, InvoiceRecord};

/// Upload une archive de factures vers le service de traitement.
///
/// Returns the decoded invoice records in the order the service produced
/// them. Any failure (request build, transport, status, decode) comes back
/// as an [`AppError`]; the caller decides what the user sees.
pub async fn upload_invoices(file: File, api_url: &str) -> AppResult<Vec<InvoiceRecord>> {
    // Créer FormData
    let form_data =
        FormData::new().map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;

    // Ajouter le fichier
    form_data
        .append_with_blob(UPLOAD_FIELD, &file)
        .map_err(|e| AppError::Upload(format!("Failed to append file: {:?}", e)))?;

    // Envoyer la requête
    let url = format!("{}/upload-invoices", api_url);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    // Vérifier le status
    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Http {
            status: response.status(),
            body,
        });
    }

    // Parser la réponse JSON
    response
        .json::<Vec<InvoiceRecord>>()
        .await
        .map_err(|e| AppError::Decode(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = r#"[
            {
                "clientName": "ACME SARL",
                "senderName": "Fournitures Dupont",
                "invoiceDate": "2024-03-12",
                "invoiceNumber": "INV-2024-031",
                "dueDate": "2024-04-11",
                "subtotal": "830.00",
                "tax": "166.00",
                "total": "996.00",
                "paymentStatus": "unpaid",
                "transactionType": "purchase",
                "fileURL": "https://storage.comptapro.app/invoices/inv-2024-031.pdf"
            },
            {
                "invoiceNumber": "INV-2024-032",
                "total": "100.00"
            }
        ]"#;

        let result: Result<Vec<InvoiceRecord>, _> = serde_json::from_str(json);
        assert!(result.is_ok());

        let records = result.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].client_name.as_deref(), Some("ACME SARL"));
        assert_eq!(records[0].payment_status.as_deref(), Some("unpaid"));
        assert_eq!(
            records[0].file_url.as_deref(),
            Some("https://storage.comptapro.app/invoices/inv-2024-031.pdf")
        );
        assert_eq!(records[1].invoice_number.as_deref(), Some("INV-2024-032"));
        assert_eq!(records[1].client_name, None);
    }

    #[test]
    fn test_missing_and_null_fields_deserialize_to_none() {
        let json = r#"{
            "invoiceNumber": "INV-001",
            "total": "100.00",
            "tax": null
        }"#;

        let record: InvoiceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.invoice_number.as_deref(), Some("INV-001"));
        assert_eq!(record.total.as_deref(), Some("100.00"));
        assert_eq!(record.tax, None);
        assert_eq!(record.client_name, None);
        assert_eq!(record.file_url, None);
    }

    #[test]
    fn test_file_url_uses_legacy_casing() {
        let json = r#"{"fileURL": "https://storage.comptapro.app/invoices/a.pdf"}"#;
        let record: InvoiceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.file_url.as_deref(),
            Some("https://storage.comptapro.app/invoices/a.pdf")
        );

        // "fileUrl" is not the wire name and must not populate the field
        let json = r#"{"fileUrl": "https://storage.comptapro.app/invoices/a.pdf"}"#;
        let record: InvoiceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.file_url, None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"[{"invoiceNumber": "INV-001", "confidence": 0.93, "pages": 2}]"#;
        let records: Vec<InvoiceRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].invoice_number.as_deref(), Some("INV-001"));
    }

    #[test]
    fn test_non_array_body_fails_to_decode() {
        let json = r#"{"error": "no invoices found in archive"}"#;
        let result: Result<Vec<InvoiceRecord>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
