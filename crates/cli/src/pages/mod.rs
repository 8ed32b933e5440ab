// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Page objects for the storefront.
//!
//! Each page borrows a [`Driver`](crate::driver::Driver) and wraps the
//! interactions and assertions of one screen. Pages hold no state of their
//! own, so several can share one driver within a journey.

pub mod cart;
pub mod checkout_complete;
pub mod checkout_information;
pub mod checkout_overview;
pub mod landing;
pub mod menu;
pub mod products;

pub use cart::CartPage;
pub use checkout_complete::CheckoutCompletePage;
pub use checkout_information::CheckoutInformationPage;
pub use checkout_overview::CheckoutOverviewPage;
pub use landing::LandingPage;
pub use menu::MenuPage;
pub use products::ProductPage;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
