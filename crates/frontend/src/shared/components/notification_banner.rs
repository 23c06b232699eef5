use crate::shared::icons::icon;
use crate::shared::notifications::Notification;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Stack of dismissible alerts.
///
/// Each alert closes itself after `timeout_ms` (0 keeps it until dismissed).
#[component]
pub fn NotificationBanner(
    #[prop(into)]
    notifications: Signal<Vec<Notification>>,
    on_dismiss: Callback<u64>,
    timeout_ms: u32,
) -> impl IntoView {
    view! {
        <div class="notification-stack">
            <For
                each=move || notifications.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    if timeout_ms > 0 {
                        spawn_local(async move {
                            TimeoutFuture::new(timeout_ms).await;
                            on_dismiss.run(id);
                        });
                    }

                    view! {
                        <div class=format!("alert {}", n.severity.css_modifier()) role="alert">
                            <div class="alert__text">
                                <strong class="alert__summary">{n.summary}</strong>
                                <span class="alert__detail">{n.detail}</span>
                            </div>
                            <button
                                class="alert__close"
                                title="Dismiss"
                                on:click=move |_| on_dismiss.run(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
