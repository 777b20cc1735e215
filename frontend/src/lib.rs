//! Ni8 Mentor - Contact Site Frontend
//!
//! A WebAssembly frontend rendering the "Contact Us" page for the
//! Ni8 Mentor mentoring and placement platform. The contact form is
//! acknowledged entirely client-side; no request leaves the page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (brand bar)                                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ContactPage                                                 │
//! │  ├── Hero (title, tagline)                                  │
//! │  ├── InfoCards (email, phone, location, hours)              │
//! │  ├── ContactFormSection + WhyChooseUs / SocialLinks         │
//! │  └── MapSection (placeholder map)                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! │  ToastHost (transient notifications)                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (ContactForm, Toast, etc.)
//! - [`components`] - UI components (Hero, InfoCards, ContactFormSection, etc.)
//! - [`config`] - Site-wide constants (contact details, toast timing)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Form
    ContactForm, ContactField,
    // Notifications
    Toast, ActiveToast,
    // Static content
    ContactCard, SocialLink,
};

// Components
pub use components::*;

// =============================================================================
// Application shell
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Contact Us - Ni8 Mentor"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=ContactPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ContactPage() -> impl IntoView {
    // Page-level state: the form record and the toasts currently on screen
    let (form, set_form) = create_signal(ContactForm::default());
    let (toasts, set_toasts) = create_signal(Vec::<ActiveToast>::new());

    view! {
        <Header/>
        <Hero/>
        <InfoCards/>

        <section class="contact-section">
            <div class="container two-col">
                <ContactFormSection form=form set_form=set_form set_toasts=set_toasts/>
                <div class="side-col">
                    <WhyChooseUs/>
                    <SocialLinks/>
                </div>
            </div>
        </section>

        <MapSection/>
        <Footer/>
        <ToastHost toasts=toasts/>
    }
}
