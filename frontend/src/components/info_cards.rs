//! Contact-info cards: the ways to reach the team.

use leptos::*;

use crate::config::{BUSINESS_HOURS, CONTACT_EMAIL, CONTACT_PHONE, OFFICE_LOCATION};
use crate::types::ContactCard;

/// The four contact channels, in display order.
fn contact_cards() -> Vec<ContactCard> {
    vec![
        ContactCard {
            icon: "✉️",
            title: "Email Us",
            content: CONTACT_EMAIL,
            link: Some(format!("mailto:{}", CONTACT_EMAIL)),
        },
        ContactCard {
            icon: "📞",
            title: "Call Us",
            content: CONTACT_PHONE,
            link: Some(format!("tel:{}", CONTACT_PHONE)),
        },
        ContactCard {
            icon: "📍",
            title: "Visit Us",
            content: OFFICE_LOCATION,
            link: None,
        },
        ContactCard {
            icon: "🕘",
            title: "Business Hours",
            content: BUSINESS_HOURS,
            link: None,
        },
    ]
}

#[component]
pub fn InfoCards() -> impl IntoView {
    let (cards, _) = create_signal(contact_cards());

    view! {
        <section class="info-cards">
            <div class="container">
                <div class="card-grid">
                    <For
                        each=move || cards.get().into_iter().enumerate()
                        key=|(i, _)| *i
                        children=move |(_, card)| {
                            view! {
                                <div class="card info-card">
                                    <div class="info-icon">{card.icon}</div>
                                    <h3>{card.title}</h3>
                                    {match card.link {
                                        Some(href) => view! {
                                            <a href=href>{card.content}</a>
                                        }
                                        .into_view(),
                                        None => view! { <p>{card.content}</p> }.into_view(),
                                    }}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}
