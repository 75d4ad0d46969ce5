use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"COMPTA PRO"</a>
                <span class="badge">"Invoices"</span>
            </div>
        </header>
    }
}
