//! Transient toast notifications.
//!
//! [`show_toast`] queues a toast and schedules its removal; [`ToastHost`]
//! renders whatever is currently queued. Producers hand over a [`Toast`]
//! and are done - display and dismiss timing live here.

use std::sync::atomic::{AtomicU32, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::TOAST_DISMISS_MS;
use crate::types::{ActiveToast, Toast};

// Monotonic ids; each dismissal timer only removes the toast it was armed for
static NEXT_TOAST_ID: AtomicU32 = AtomicU32::new(0);

/// Queue `toast` for display and schedule its auto-dismissal.
pub fn show_toast(set_toasts: WriteSignal<Vec<ActiveToast>>, toast: Toast) {
    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
    set_toasts.update(|toasts| toasts.push(ActiveToast { id, toast }));

    spawn_local(async move {
        TimeoutFuture::new(TOAST_DISMISS_MS).await;
        set_toasts.update(|toasts| toasts.retain(|active| active.id != id));
    });
}

/// Renders the active toasts in a fixed overlay corner.
#[component]
pub fn ToastHost(toasts: ReadSignal<Vec<ActiveToast>>) -> impl IntoView {
    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get()
                key=|active| active.id
                children=move |active| {
                    view! {
                        <div class="toast">
                            <div class="toast-title">{active.toast.title}</div>
                            <div class="toast-description">{active.toast.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
