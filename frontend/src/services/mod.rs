//! Processing service communication.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`upload`] - Invoice archive upload to the Compta Pro processing service

pub mod upload;

pub use upload::*;
