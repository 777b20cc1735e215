//! Site configuration.
//!
//! Centralized constants for the contact site frontend. All contact
//! details live here so the cards, header and map section stay in sync.

/// Brand name shown in the header and page title.
pub const APP_NAME: &str = "Ni8 Mentor";

/// Sales/contact email address.
pub const CONTACT_EMAIL: &str = "sales@ni8mentor.in";

/// Contact phone number.
pub const CONTACT_PHONE: &str = "+91 63790 88867";

/// Office location shown on the info cards and the map section.
pub const OFFICE_LOCATION: &str = "Tamil Nadu, India";

/// Business hours, short form for the info cards.
pub const BUSINESS_HOURS: &str = "Mon-Sat: 9AM - 6PM";

/// Social profiles for the "Connect With Us" card and the footer.
pub const LINKEDIN_URL: &str = "https://linkedin.com";
pub const INSTAGRAM_URL: &str = "https://instagram.com";
pub const YOUTUBE_URL: &str = "https://youtube.com";

/// How long a toast stays on screen before auto-dismissing (ms).
pub const TOAST_DISMISS_MS: u32 = 4_000;
