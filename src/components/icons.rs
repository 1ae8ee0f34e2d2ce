//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuLoaderCircle as Spinner, LuLogIn as Login, LuLogOut as Disconnect,
        LuShoppingCart as Cart, LuUserPlus as Register, LuWallet as Wallet, LuX as Close,
        LuZap as Mint,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Spinner, BsBoxArrowInRight as Login, BsBoxArrowRight as Disconnect,
        BsCart as Cart, BsLightningCharge as Mint, BsPersonPlus as Register,
        BsWallet2 as Wallet, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(WALLET, Wallet);
themed_icon!(CART, Cart);
themed_icon!(LOGIN, Login);
themed_icon!(REGISTER, Register);
themed_icon!(CLOSE, Close);
themed_icon!(DISCONNECT, Disconnect);
themed_icon!(MINT, Mint);
themed_icon!(SPINNER, Spinner);
