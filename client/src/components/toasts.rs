//! Toast list rendering session notices.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[cfg(feature = "hydrate")]
const TOAST_TTL: std::time::Duration = std::time::Duration::from_secs(4);

#[component]
pub fn Toasts() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    #[cfg(feature = "hydrate")]
    {
        let scheduled = StoredValue::new(0_u64);
        Effect::new(move || {
            let pending: Vec<u64> = notices.with(|n| {
                n.items
                    .iter()
                    .map(|notice| notice.id)
                    .filter(|id| *id >= scheduled.get_value())
                    .collect()
            });
            for id in pending {
                scheduled.set_value(id + 1);
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(TOAST_TTL).await;
                    notices.update(|n| n.dismiss(id));
                });
            }
        });
    }

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=format!("toast {}", notice.level.css_class())>
                            <span class="toast__message">{notice.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
