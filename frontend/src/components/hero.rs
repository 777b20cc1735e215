//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Get In Touch"</h1>
            <p class="subtitle">
                "Ready to Transform Your Future? Let's Talk!"
            </p>
        </section>
    }
}
