//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Invoice Types** - Records returned by the processing service
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Invoice Types
// =============================================================================

/// One processed invoice, as returned by the extraction service.
///
/// Every field is independently optional: whatever the service could not
/// extract is omitted or `null`, and renders as a placeholder. There are no
/// required fields and no cross-field validation; this is purely a
/// display-transport shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    pub client_name: Option<String>,
    pub sender_name: Option<String>,
    pub invoice_date: Option<String>,
    /// Display key for the result list; not guaranteed unique.
    pub invoice_number: Option<String>,
    pub due_date: Option<String>,
    pub subtotal: Option<String>,
    pub tax: Option<String>,
    pub total: Option<String>,
    pub payment_status: Option<String>,
    pub transaction_type: Option<String>,
    /// Link to the original source document, when the service kept one.
    #[serde(rename = "fileURL")]
    pub file_url: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations. The UI collapses every
/// variant into one generic message; the variant only matters for the
/// console trace.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Request could not be built (FormData, body).
    Upload(String),
    /// Network/transport error.
    Network(String),
    /// The service answered with a non-success status.
    Http { status: u16, body: String },
    /// Response body could not be decoded.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Http { status, body } => write!(f, "Server error ({}): {}", status, body),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
