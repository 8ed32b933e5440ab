// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Storefront selectors, one module per page.

/// Login page.
pub mod landing {
    pub const USERNAME_INPUT: &str = "#user-name";
    pub const PASSWORD_INPUT: &str = "#password";
    pub const LOGIN_BUTTON: &str = "#login-button";
    pub const ERROR_MESSAGE: &str = "[data-test=\"error\"]";
    pub const LOGIN_CONTAINER: &str = ".login_container";
    pub const BOT_IMAGE: &str = ".bot_column img";
    pub const LOGO: &str = ".login_logo";
    pub const LOGIN_CREDENTIALS: &str = "#login_credentials";
}

/// Inventory page and the shared header.
pub mod products {
    pub const HEADER: &str = ".header_container";
    pub const TITLE: &str = ".title";
    pub const CART_LINK: &str = ".shopping_cart_link";
    pub const CART_BADGE: &str = ".shopping_cart_badge";
    pub const INVENTORY_CONTAINER: &str = ".inventory_container";
    pub const ITEM: &str = ".inventory_item";
    pub const ITEM_NAME: &str = ".inventory_item_name";
    pub const ITEM_DESCRIPTION: &str = ".inventory_item_desc";
    pub const ITEM_PRICE: &str = ".inventory_item_price";
    pub const SORT: &str = "[data-test=\"product-sort-container\"]";

    /// "Add to cart" button of the product named `name`.
    pub fn add_to_cart_button(name: &str) -> String {
        format!(".inventory_item:has(.inventory_item_name:text(\"{name}\")) .btn_primary")
    }

    /// "Remove" button of the product named `name`.
    pub fn remove_button(name: &str) -> String {
        format!(".inventory_item:has(.inventory_item_name:text(\"{name}\")) .btn_secondary")
    }
}

pub mod cart {
    pub const ITEM: &str = ".cart_item";
    pub const ITEM_NAME: &str = ".inventory_item_name";
    pub const ITEM_PRICE: &str = ".inventory_item_price";
    pub const ITEM_QUANTITY: &str = ".cart_quantity";
    pub const REMOVE_BUTTON: &str = ".cart_button";
    pub const CONTINUE_SHOPPING: &str = "[data-test=\"continue-shopping\"]";
    pub const CHECKOUT: &str = "[data-test=\"checkout\"]";
}

/// Checkout step one.
pub mod checkout_information {
    pub const TITLE: &str = "[data-test=\"title\"]";
    pub const FIRST_NAME: &str = "#first-name";
    pub const LAST_NAME: &str = "#last-name";
    pub const POSTAL_CODE: &str = "#postal-code";
    pub const CONTINUE: &str = "#continue";
    pub const CANCEL: &str = "#cancel";
    pub const ERROR_MESSAGE: &str = "[data-test=\"error\"]";
}

/// Checkout step two.
pub mod checkout_overview {
    pub const TITLE: &str = "[data-test=\"title\"]";
    pub const FINISH: &str = "#finish";
    pub const CANCEL: &str = "#cancel";
    pub const ITEM_NAME: &str = ".inventory_item_name";
    pub const ITEM_PRICE: &str = ".inventory_item_price";
    pub const ITEM_QUANTITY: &str = ".cart_quantity";
    pub const ITEM_DESCRIPTION: &str = ".inventory_item_desc";
    pub const PAYMENT_INFO_LABEL: &str = "[data-test=\"payment-info-label\"]";
    pub const PAYMENT_INFO_VALUE: &str = "[data-test=\"payment-info-value\"]";
    pub const SHIPPING_INFO_LABEL: &str = "[data-test=\"shipping-info-label\"]";
    pub const ITEM_TOTAL_LABEL: &str = "[data-test=\"total-info-label\"]";
    pub const SUBTOTAL_LABEL: &str = "[data-test=\"subtotal-label\"]";
    pub const TAX_LABEL: &str = "[data-test=\"tax-label\"]";
    pub const TOTAL_LABEL: &str = "[data-test=\"total-label\"]";

    /// Order summary entries that must all be shown before finishing.
    pub const SUMMARY: &[&str] = &[
        PAYMENT_INFO_LABEL,
        PAYMENT_INFO_VALUE,
        SHIPPING_INFO_LABEL,
        ITEM_TOTAL_LABEL,
        SUBTOTAL_LABEL,
        TAX_LABEL,
        TOTAL_LABEL,
    ];
}

pub mod checkout_complete {
    pub const TITLE: &str = "[data-test=\"title\"]";
    pub const COMPLETE_HEADER: &str = "[data-test=\"complete-header\"]";
    pub const COMPLETE_TEXT: &str = "[data-test=\"complete-text\"]";
    pub const BACK_HOME: &str = "[data-test=\"back-to-products\"]";
}

/// Burger menu.
pub mod menu {
    pub const OPEN: &str = "#react-burger-menu-btn";
    pub const LOGOUT: &str = "#logout_sidebar_link";
    pub const ALL_ITEMS: &str = "#inventory_sidebar_link";
    pub const ABOUT: &str = "#about_sidebar_link";
    pub const RESET_APP_STATE: &str = "#reset_sidebar_link";
    pub const CLOSE: &str = "#react-burger-cross-btn";
}

#[cfg(test)]
#[path = "locators_tests.rs"]
mod tests;
