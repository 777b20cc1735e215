//! "Connect With Us" social links card.

use leptos::*;

use crate::config::{INSTAGRAM_URL, LINKEDIN_URL, YOUTUBE_URL};
use crate::types::SocialLink;

fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink { name: "LinkedIn", icon: "💼", url: LINKEDIN_URL },
        SocialLink { name: "Instagram", icon: "📸", url: INSTAGRAM_URL },
        SocialLink { name: "YouTube", icon: "▶️", url: YOUTUBE_URL },
    ]
}

#[component]
pub fn SocialLinks() -> impl IntoView {
    let (links, _) = create_signal(social_links());

    view! {
        <div class="card side-card">
            <h3>"Connect With Us"</h3>
            <p>
                "Follow us on social media for the latest updates, success stories, "
                "and career tips."
            </p>
            <div class="social-row">
                <For
                    each=move || links.get().into_iter().enumerate()
                    key=|(i, _)| *i
                    children=move |(_, link)| {
                        view! {
                            <a
                                class="social-link"
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                                title=link.name
                            >
                                {link.icon}
                            </a>
                        }
                    }
                />
            </div>
        </div>
    }
}
