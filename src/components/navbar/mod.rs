//! Navigation bar component.
//!
//! Brand, page links, cart count and the wallet button. The wallet details
//! popup is rendered here while open.

use leptos::prelude::*;
use leptos_icons::Icon;
use walletbar_core::display::cart_label;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::wallet::{WalletButton, WalletPopup};
use crate::config::{ACCOUNT_LINKS, APP_NAME, CART_ROUTE, NAV_LINKS};

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let cart_text = Signal::derive(move || cart_label(ctx.cart_count.get()));

    view! {
        <nav class=css::navbar>
            <a class=css::brand href="#/">{APP_NAME}</a>

            <ul class=css::links>
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| view! {
                        <li><a class=css::link href=*href>{*label}</a></li>
                    })
                    .collect_view()}
            </ul>

            <div class=css::actions>
                {ACCOUNT_LINKS
                    .iter()
                    .zip([ic::LOGIN, ic::REGISTER])
                    .map(|((label, href), icon)| view! {
                        <a class=css::cart href=*href>
                            <Icon icon=icon />
                            <span>{*label}</span>
                        </a>
                    })
                    .collect_view()}
                <a class=css::cart href=CART_ROUTE>
                    <Icon icon=ic::CART />
                    <span>{cart_text}</span>
                </a>
                <WalletButton />
            </div>
        </nav>

        {move || ctx.details_open.get().then(|| view! { <WalletPopup /> })}
    }
}
