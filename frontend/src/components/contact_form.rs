//! Contact form with client-side acknowledgement.
//!
//! Field edits replace the form record one field at a time; submitting
//! clears the record and queues a confirmation toast. No request leaves
//! the page.

use leptos::*;
use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement};

use crate::components::toast::show_toast;
use crate::types::{ActiveToast, ContactField, ContactForm};

#[component]
pub fn ContactFormSection(
    form: ReadSignal<ContactForm>,
    set_form: WriteSignal<ContactForm>,
    set_toasts: WriteSignal<Vec<ActiveToast>>,
) -> impl IntoView {
    // One handler per input; each edit swaps in an updated copy of the record
    let edit = move |field: ContactField| {
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            set_form.update(|form| *form = std::mem::take(form).with(field, input.value()));
        }
    };

    let edit_message = move |ev: Event| {
        let textarea: HtmlTextAreaElement = event_target(&ev);
        set_form.update(|form| {
            *form = std::mem::take(form).with(ContactField::Message, textarea.value())
        });
    };

    // The browser has already enforced `required` by the time this fires
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_form.update(|form| {
            let ack = form.submit();
            show_toast(set_toasts, ack);
        });
        log::info!("📨 Contact form submitted - cleared and acknowledged");
    };

    view! {
        <div class="card form-card">
            <div class="form-intro">
                <h2>"Send Us a Message"</h2>
                <p>"Fill out the form below and we'll get back to you shortly"</p>
            </div>

            <form class="contact-form" on:submit=on_submit>
                <div class="form-field">
                    <label for=ContactField::Name.name_attr()>
                        {ContactField::Name.label()} " *"
                    </label>
                    <input
                        type="text"
                        id=ContactField::Name.name_attr()
                        name=ContactField::Name.name_attr()
                        placeholder=ContactField::Name.placeholder()
                        prop:value=move || form.get().name
                        on:input=edit(ContactField::Name)
                        required=true
                    />
                </div>

                <div class="form-field">
                    <label for=ContactField::Email.name_attr()>
                        {ContactField::Email.label()} " *"
                    </label>
                    <input
                        type="email"
                        id=ContactField::Email.name_attr()
                        name=ContactField::Email.name_attr()
                        placeholder=ContactField::Email.placeholder()
                        prop:value=move || form.get().email
                        on:input=edit(ContactField::Email)
                        required=true
                    />
                </div>

                <div class="form-field">
                    <label for=ContactField::Phone.name_attr()>
                        {ContactField::Phone.label()} " *"
                    </label>
                    <input
                        type="tel"
                        id=ContactField::Phone.name_attr()
                        name=ContactField::Phone.name_attr()
                        placeholder=ContactField::Phone.placeholder()
                        prop:value=move || form.get().phone
                        on:input=edit(ContactField::Phone)
                        required=true
                    />
                </div>

                <div class="form-field">
                    <label for=ContactField::Subject.name_attr()>
                        {ContactField::Subject.label()} " *"
                    </label>
                    <input
                        type="text"
                        id=ContactField::Subject.name_attr()
                        name=ContactField::Subject.name_attr()
                        placeholder=ContactField::Subject.placeholder()
                        prop:value=move || form.get().subject
                        on:input=edit(ContactField::Subject)
                        required=true
                    />
                </div>

                <div class="form-field">
                    <label for=ContactField::Message.name_attr()>
                        {ContactField::Message.label()} " *"
                    </label>
                    <textarea
                        id=ContactField::Message.name_attr()
                        name=ContactField::Message.name_attr()
                        placeholder=ContactField::Message.placeholder()
                        rows=6
                        prop:value=move || form.get().message
                        on:input=edit_message
                        required=true
                    ></textarea>
                </div>

                <button type="submit" class="submit-button">
                    "📨 Send Message"
                </button>
            </form>
        </div>
    }
}
