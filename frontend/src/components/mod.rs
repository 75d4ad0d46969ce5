//! UI Components for the Compta Pro application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Brand bar
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Invoice archive upload form
//! - [`ResultsSection`] - Extracted invoice list
//! - [`InvoiceCard`] - Detailed view of a single invoice

mod header;
mod hero;
mod upload;
mod results;
mod invoice_card;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use results::*;
pub use invoice_card::*;
pub use footer::*;
