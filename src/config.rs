//! Shell configuration.
//!
//! Widget behavior (delays, labels, notification ids) lives in
//! `walletbar_core::config`; this module only holds page-level settings.

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand shown at the left of the navbar.
pub const APP_NAME: &str = "Storefront";

/// Id of the element the app mounts into.
pub const MOUNT_ID: &str = "app";

/// Navbar links, as (label, hash route).
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#/"),
    ("Products", "#/product"),
    ("About", "#/about"),
    ("Contact", "#/contact"),
];

/// Account links shown before the cart, as (label, hash route).
pub const ACCOUNT_LINKS: &[(&str, &str)] = &[("Login", "#/login"), ("Register", "#/register")];

/// Cart link target.
pub const CART_ROUTE: &str = "#/cart";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_links_precede_cart() {
        let labels: Vec<&str> = ACCOUNT_LINKS.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Login", "Register"]);
        assert!(ACCOUNT_LINKS.iter().all(|(_, href)| href.starts_with("#/")));
        assert!(!ACCOUNT_LINKS.iter().any(|(_, href)| *href == CART_ROUTE));
    }
}
