use crate::config::{APP_NAME, CONTACT_PHONE};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">{APP_NAME}</a>
                <span class="badge">"Mentoring & Placement"</span>
            </div>
            <div class="header-right">
                <a class="header-phone" href=format!("tel:{}", CONTACT_PHONE)>
                    "📞 " {CONTACT_PHONE}
                </a>
            </div>
        </header>
    }
}
