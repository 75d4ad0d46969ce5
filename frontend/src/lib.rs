//! Compta Pro - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a ZIP archive of invoices and
//! reviewing the structured data returned by the processing service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (brand bar)                                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (file picker + submit)                   │
//! │  └── ResultsSection (one card per invoice)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (InvoiceRecord, AppError, etc.)
//! - [`components`] - UI components (Header, Upload, Results, etc.)
//! - [`services`] - Processing service communication (upload)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    InvoiceRecord,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Compta Pro - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Title text=APP_NAME/>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Résultats de la dernière soumission, partagés entre upload et affichage
    let (results, set_results) = create_signal(None::<Vec<InvoiceRecord>>);

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <UploadSection set_results=set_results/>

            // Results section (appears after processing)
            <Show
                when=move || results.get().is_some()
                fallback=|| view! { }
            >
                <ResultsSection results=results/>
            </Show>
        </div>

        <Footer/>
    }
}
