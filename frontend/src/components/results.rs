//! Composant Results pour afficher les factures extraites

use leptos::*;

use crate::components::InvoiceCard;
use crate::types::InvoiceRecord;

#[component]
pub fn ResultsSection(
    results: ReadSignal<Option<Vec<InvoiceRecord>>>,
) -> impl IntoView {
    view! {
        <div class="results-section" id="resultsSection">
            // Ordre de la réponse conservé, pas de tri ni de filtre.
            // Keyed by position: invoice numbers are not guaranteed unique.
            <For
                each=move || results.get().unwrap_or_default().into_iter().enumerate()
                key=|(idx, _)| *idx
                children=move |(_, invoice)| {
                    view! { <InvoiceCard invoice=invoice/> }
                }
            />
        </div>
    }
}
