//! "Why Choose Ni8 Mentor?" selling points.

use leptos::*;

/// Selling points shown next to the form, in display order.
const SELLING_POINTS: [&str; 6] = [
    "Industry-leading placement rate of 87%",
    "Expert mentors with years of industry experience",
    "Comprehensive training from basics to advanced",
    "Direct connections with 20+ partner companies",
    "Flexible learning schedules to fit your lifestyle",
    "4.6/5 student satisfaction rating",
];

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    view! {
        <div class="card side-card">
            <div class="side-icon">"💬"</div>
            <h3>"Why Choose Ni8 Mentor?"</h3>
            <ul class="selling-points">
                {SELLING_POINTS
                    .iter()
                    .map(|point| {
                        view! {
                            <li>
                                <span class="check">"✓"</span>
                                {*point}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
