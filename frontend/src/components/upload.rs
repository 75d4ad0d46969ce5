//! Invoice archive upload component.
//!
//! Handles file selection, submission to the processing service, and
//! error display.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, SubmitEvent};

use crate::services::upload_invoices;
use crate::{InvoiceRecord, API_URL, MAX_FILE_SIZE, PROCESSING_ERROR};

#[component]
pub fn UploadSection(
    set_results: WriteSignal<Option<Vec<InvoiceRecord>>>,
) -> impl IntoView {
    let (selected_file, set_selected_file) = create_signal(None::<web_sys::File>);
    let (is_submitting, set_is_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    // Handler pour le changement de fichier
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                log::info!("📄 File selected: {}", file.name());
                set_selected_file.set(Some(file));
            }
        }
    };

    // Handler pour la soumission du formulaire
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // Le bouton est désactivé dans ces cas, mais on revérifie quand même
        if is_submitting.get() {
            return;
        }
        let file = match selected_file.get() {
            Some(file) => file,
            None => return,
        };

        // Réinitialiser l'état avant la nouvelle soumission
        set_is_submitting.set(true);
        set_error.set(None);
        set_results.set(None);

        // Lancer l'upload
        spawn_local(async move {
            log::info!("📤 Uploading {} to the processing service...", file.name());

            match upload_invoices(file, API_URL).await {
                Ok(records) => {
                    log::info!("✅ Processing done, {} invoice(s) extracted", records.len());
                    set_results.set(Some(records));
                }
                Err(e) => {
                    log::error!("❌ Error uploading invoice: {}", e);
                    set_error.set(Some(PROCESSING_ERROR.to_string()));
                }
            }

            set_is_submitting.set(false);
        });
    };

    // Handler pour cliquer sur la zone entière
    let trigger_file_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("fileInput") {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    view! {
        <form class="upload-section" on:submit=on_submit>
            <div
                class="upload-zone"
                id="uploadZone"
                on:click=trigger_file_input
            >
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">
                    {move || if is_submitting.get() {
                        "⏳ Uploading and processing..."
                    } else {
                        "Click to upload or drag and drop"
                    }}
                </div>

                <Show
                    when=move || !is_submitting.get()
                    fallback=|| view! { }
                >
                    <div class="upload-hint">
                        {format!("ZIP archive up to {} MB", MAX_FILE_SIZE / (1024 * 1024))}
                    </div>
                </Show>
            </div>

            <input
                type="file"
                id="fileInput"
                accept=".zip"
                style="display:none"
                on:change=on_file_change
            />

            <Show
                when=move || selected_file.get().is_some()
                fallback=|| view! { }
            >
                <p class="selected-file">
                    "Selected file: "
                    {move || selected_file.get().map(|f| f.name()).unwrap_or_default()}
                </p>
            </Show>

            <div class="upload-actions">
                <button
                    type="submit"
                    class="btn btn-primary"
                    id="processBtn"
                    disabled=move || selected_file.get().is_none() || is_submitting.get()
                >
                    {move || if is_submitting.get() { "Processing..." } else { "Process Invoices" }}
                </button>
            </div>

            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
        </form>
    }
}
