//! Application configuration.
//!
//! Centralized configuration for the Compta Pro frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Processing service base URL.
///
/// The external Compta Pro service performing the invoice extraction.
pub const API_URL: &str = "https://compta-pro-production.up.railway.app";

/// Multipart field name the processing service expects the archive under.
pub const UPLOAD_FIELD: &str = "invoices";

/// Application name, shown as the document title.
pub const APP_NAME: &str = "Invoice Processor";

/// Placeholder shown for fields the extraction could not fill.
pub const FIELD_PLACEHOLDER: &str = "N/A";

/// Generic error shown for any failed submission.
///
/// The specific cause only goes to the browser console.
pub const PROCESSING_ERROR: &str =
    "An error occurred while processing the invoice. Please try again.";

/// Maximum file size for upload (in bytes).
///
/// 50 MB limit. Advisory only, shown in the upload hint; the service
/// rejects oversized archives itself.
pub const MAX_FILE_SIZE: usize = 50 * 1024 * 1024;
