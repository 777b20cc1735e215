//! Common types used across the contact site frontend.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Form Types** - the contact form record and its field identifiers
//! - **Toast Types** - transient notification requests
//! - **Static Content Types** - info cards and social links

// =============================================================================
// Form Types
// =============================================================================

/// Identifier for one of the contact form's five fields.
///
/// The field set is fixed; unknown field names are unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    /// HTML `name`/`id` attribute of the field's input element.
    pub fn name_attr(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    /// Visible label text shown above the input.
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email Address",
            ContactField::Phone => "Phone Number",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    /// Placeholder text for the input element.
    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Enter your full name",
            ContactField::Email => "your.email@example.com",
            ContactField::Phone => "+91 98765 43210",
            ContactField::Subject => "How can we help you?",
            ContactField::Message => "Tell us more about your inquiry...",
        }
    }
}

/// The record backing the contact form.
///
/// All five fields are plain text; an empty string means "not filled in".
/// Edits replace the record with an updated copy, so the value held by
/// the signal is always a complete, consistent snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Current value of `field`.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// New record with `field` replaced by `value`. Every other field is
    /// carried over unchanged.
    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
        self
    }

    /// Handle a submit: clear every field and return the acknowledgement
    /// toast to show the user. Nothing is transmitted anywhere.
    pub fn submit(&mut self) -> Toast {
        *self = ContactForm::default();
        Toast::submission_ack()
    }
}

// =============================================================================
// Toast Types
// =============================================================================

/// A transient notification request.
///
/// Producers only supply title and description; display and dismiss
/// timing belong to the toast host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    /// The fixed acknowledgement shown after a form submission.
    pub fn submission_ack() -> Self {
        Toast {
            title: "Message Sent!".to_string(),
            description: "We'll get back to you within 24 hours.".to_string(),
        }
    }
}

/// A toast currently on screen, tagged with the id its dismissal timer
/// was armed for. An expiring timer must never take down a newer toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveToast {
    pub id: u32,
    pub toast: Toast,
}

// =============================================================================
// Static Content Types
// =============================================================================

/// One contact-info card (email, phone, location, hours).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    /// `mailto:`/`tel:` target; `None` renders plain text.
    pub link: Option<String>,
}

/// One social-media link in the "Connect With Us" card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FIELDS: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];

    #[test]
    fn fresh_form_is_all_empty() {
        let form = ContactForm::default();
        for field in ALL_FIELDS {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn with_updates_only_the_named_field() {
        for field in ALL_FIELDS {
            let form = ContactForm::default().with(field, "hello");
            assert_eq!(form.get(field), "hello");
            for other in ALL_FIELDS.into_iter().filter(|&f| f != field) {
                assert_eq!(form.get(other), "", "{field:?} edit leaked into {other:?}");
            }
        }
    }

    #[test]
    fn last_write_wins() {
        let form = ContactForm::default()
            .with(ContactField::Name, "Asha")
            .with(ContactField::Email, "a@b.com")
            .with(ContactField::Email, "c@d.com");

        assert_eq!(form.email, "c@d.com");
        assert_eq!(form.name, "Asha");
        assert_eq!(form.phone, "");
        assert_eq!(form.subject, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn repeated_identical_edit_is_idempotent() {
        let once = ContactForm::default().with(ContactField::Subject, "Admissions");
        let twice = once.clone().with(ContactField::Subject, "Admissions");
        assert_eq!(once, twice);
    }

    #[test]
    fn submit_clears_the_form_and_acknowledges() {
        let mut form = ContactForm::default()
            .with(ContactField::Name, "Asha")
            .with(ContactField::Email, "asha@example.com")
            .with(ContactField::Phone, "+91 90000 00000")
            .with(ContactField::Subject, "Admissions")
            .with(ContactField::Message, "Interested in the program.");

        let ack = form.submit();

        assert_eq!(form, ContactForm::default());
        assert_eq!(ack, Toast::submission_ack());
    }

    #[test]
    fn submission_ack_wording() {
        let toast = Toast::submission_ack();
        assert_eq!(toast.title, "Message Sent!");
        assert!(toast.description.contains("24 hours"));
    }

    #[test]
    fn field_attrs_are_distinct() {
        // name attributes double as element ids
        for (i, a) in ALL_FIELDS.iter().enumerate() {
            for b in &ALL_FIELDS[i + 1..] {
                assert_ne!(a.name_attr(), b.name_attr());
            }
        }
    }
}
