use leptos::prelude::*;
use leptos_icons::Icon;
use walletbar_core::display::{wallet_button_disabled, wallet_button_label};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/wallet/wallet.module.css");

/// Connect / details button shown at the right of the navbar.
///
/// Connects when no account is known, otherwise opens the details popup.
/// Locked while an authorization or a simulated transaction is in flight.
#[component]
pub fn WalletButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let label = Signal::derive(move || {
        ctx.connection
            .with(|state| wallet_button_label(state, ctx.connecting.get()))
    });
    let disabled =
        Signal::derive(move || wallet_button_disabled(ctx.connecting.get(), ctx.tx_status.get()));

    view! {
        <button
            class=css::walletButton
            disabled=disabled
            on:click=move |_| ctx.wallet_clicked()
        >
            <span class=css::buttonIcon><Icon icon=ic::WALLET /></span>
            <span>{label}</span>
        </button>
    }
}
