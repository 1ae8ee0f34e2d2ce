//! Toast stack rendered at the bottom-right corner.

use leptos::prelude::*;
use leptos_icons::Icon;
use walletbar_core::NotificationKind;

use crate::app::AppContext;
use crate::browser::Toast;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/toaster/toaster.module.css");

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::stack role="status" aria-live="polite">
            <For
                each=move || ctx.toasts.get()
                key=|toast: &Toast| toast.seq
                children=|toast: Toast| view! { <ToastItem toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let class = match toast.kind {
        NotificationKind::Loading => css::loading,
        NotificationKind::Info => css::info,
        NotificationKind::Success => css::success,
        NotificationKind::Error => css::error,
    };
    let loading = toast.kind == NotificationKind::Loading;

    view! {
        <div class=format!("{} {}", css::toast, class)>
            {loading.then(|| view! { <span class=css::spinner><Icon icon=ic::SPINNER /></span> })}
            <span>{toast.message}</span>
        </div>
    }
}
