//! Office location section with a placeholder map.

use leptos::*;

use crate::config::OFFICE_LOCATION;

#[component]
pub fn MapSection() -> impl IntoView {
    view! {
        <section class="map-section">
            <div class="container">
                <div class="card map-card">
                    <div class="map-banner">
                        <div class="map-pin">"📍"</div>
                        <h3>"Visit Our Office"</h3>
                        <p>{OFFICE_LOCATION}</p>
                        <p>"Monday - Saturday: 9:00 AM - 6:00 PM"</p>
                    </div>
                    <div class="map-placeholder">
                        <p>"Map integration available on request"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
