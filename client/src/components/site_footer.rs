use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__text">
                <span class="icon icon--heart" aria-hidden="true"></span>
                "Сделано с любовью ко Дню учителя"
            </p>
        </footer>
    }
}
