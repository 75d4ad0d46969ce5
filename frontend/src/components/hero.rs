//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Invoice Processor"</h1>
            <p class="subtitle">
                "Upload a ZIP archive of invoices. "
                "Extraction runs on the Compta Pro service and the results show up below."
            </p>
        </div>
    }
}
