use leptos::prelude::*;
use leptos_icons::Icon;
use walletbar_core::TxStatus;
use walletbar_core::display::{network_label, tx_status_label};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/wallet/wallet.module.css");

/// Details popup: account, network, transaction status and actions.
#[component]
pub fn WalletPopup() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let account = Signal::derive(move || {
        ctx.connection.with(|state| {
            state
                .account()
                .map(|account| account.to_string())
                .unwrap_or_default()
        })
    });
    let network =
        Signal::derive(move || ctx.connection.with(|state| network_label(state).to_string()));
    let tx_label = Signal::derive(move || tx_status_label(ctx.tx_status.get()));
    let in_flight = Signal::derive(move || ctx.tx_status.get().is_in_flight());
    let status_class = move || {
        if ctx.tx_status.get() == TxStatus::Succeeded {
            format!("{} {}", css::txStatus, css::txSuccess)
        } else {
            css::txStatus.to_string()
        }
    };

    view! {
        <div class=css::overlay on:click=move |_| ctx.close_details()>
            <div class=css::popup on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                <div class=css::popupHeader>
                    <h2 class=css::popupTitle>"Wallet Details"</h2>
                    <button
                        class=css::iconButton
                        title="Close"
                        on:click=move |_| ctx.close_details()
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>

                <dl class=css::details>
                    <dt class=css::detailLabel>"Connected Account:"</dt>
                    <dd class=css::address>{account}</dd>

                    <dt class=css::detailLabel>"Network:"</dt>
                    <dd class=css::detailValue>{network}</dd>
                </dl>

                <div class=status_class>
                    {move || in_flight.get().then(|| view! {
                        <span class=css::spinner><Icon icon=ic::SPINNER /></span>
                    })}
                    <span>{tx_label}</span>
                </div>

                <div class=css::actions>
                    <button
                        class=css::primaryButton
                        disabled=in_flight
                        on:click=move |_| ctx.simulate_mint()
                    >
                        <Icon icon=ic::MINT />
                        <span>"Simulate mint"</span>
                    </button>
                    <button
                        class=css::dangerButton
                        on:click=move |_| ctx.disconnect()
                    >
                        <Icon icon=ic::DISCONNECT />
                        <span>"Disconnect wallet"</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
