//! Detailed view for a single extracted invoice.

use leptos::*;

use crate::config::FIELD_PLACEHOLDER;
use crate::types::InvoiceRecord;

/// Display value for an optional field.
///
/// The extraction service reports unfilled fields as `null`, and some older
/// deployments send empty strings; both show as the placeholder.
fn display_field(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => FIELD_PLACEHOLDER.to_string(),
    }
}

#[component]
pub fn InvoiceCard(invoice: InvoiceRecord) -> impl IntoView {
    // Lien vers le document source, seulement s'il existe
    let file_url = invoice.file_url.clone().filter(|url| !url.is_empty());

    let rows = [
        ("Client Name", display_field(&invoice.client_name)),
        ("Sender Name", display_field(&invoice.sender_name)),
        ("Invoice Date", display_field(&invoice.invoice_date)),
        ("Invoice Number", display_field(&invoice.invoice_number)),
        ("Due Date", display_field(&invoice.due_date)),
        ("Subtotal", display_field(&invoice.subtotal)),
        ("Tax", display_field(&invoice.tax)),
        ("Total", display_field(&invoice.total)),
        ("Payment Status", display_field(&invoice.payment_status)),
        ("Transaction Type", display_field(&invoice.transaction_type)),
    ];

    view! {
        <div class="invoice-card">
            <h2 class="invoice-card-title">"Invoice Results"</h2>
            <div class="invoice-fields">
                {rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <p class="invoice-field">
                                <strong>{label} ": "</strong>
                                {value}
                            </p>
                        }
                    })
                    .collect_view()}
                {file_url.map(|url| view! {
                    <a href=url target="_blank" class="file-link">
                        "View Original file"
                    </a>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_value_is_shown_verbatim() {
        assert_eq!(display_field(&Some("INV-001".to_string())), "INV-001");
        assert_eq!(display_field(&Some("100.00".to_string())), "100.00");
    }

    #[test]
    fn test_absent_and_empty_values_show_placeholder() {
        assert_eq!(display_field(&None), FIELD_PLACEHOLDER);
        assert_eq!(display_field(&Some(String::new())), FIELD_PLACEHOLDER);
    }
}
