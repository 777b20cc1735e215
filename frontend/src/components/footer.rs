//! Footer component

use crate::config::{INSTAGRAM_URL, LINKEDIN_URL, YOUTUBE_URL};
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2025 Ni8 Mentor • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href=LINKEDIN_URL class="footer-link" target="_blank">
                    "LinkedIn"
                </a>
                <a href=INSTAGRAM_URL class="footer-link" target="_blank">
                    "Instagram"
                </a>
                <a href=YOUTUBE_URL class="footer-link" target="_blank">
                    "YouTube"
                </a>
            </div>
        </footer>
    }
}
