// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Storefront user journeys.
//!
//! Each journey drives the page objects through one scenario and fails on
//! the first unmet expectation. Journeys are grouped into suites sharing a
//! setup step, run against a fresh page each.

use crate::config::SuiteConfig;
use crate::driver::{Driver, LoadState, PageError};
use crate::pages::{
    CartPage, CheckoutCompletePage, CheckoutInformationPage, CheckoutOverviewPage, LandingPage,
    MenuPage, ProductPage,
};

/// A journey body.
pub type JourneyFn = fn(&dyn Driver, &SuiteConfig) -> Result<(), PageError>;

/// Steps run before every journey of a suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setup {
    /// Open the storefront.
    Navigate,
    /// Open the storefront and log in with the configured credentials.
    Login,
}

pub struct Journey {
    pub title: &'static str,
    pub run: JourneyFn,
}

pub struct JourneySuite {
    /// Short key used on the command line.
    pub name: &'static str,
    pub title: &'static str,
    pub setup: Setup,
    pub journeys: Vec<Journey>,
}

impl JourneySuite {
    /// Matches `query` against the key or the title, ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query) || self.title.eq_ignore_ascii_case(query)
    }
}

/// Result of one journey.
#[derive(Debug)]
pub struct JourneyOutcome {
    pub title: &'static str,
    pub result: Result<(), PageError>,
}

impl JourneyOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

const ONESIE: &str = "Sauce Labs Onesie";
const ONESIE_PRICE: &str = "$7.99";
const ONESIE_DESCRIPTION: &str = "Rib snap infant onesie for the ";
const BIKE_LIGHT: &str = "Sauce Labs Bike Light";
const BOLT_T_SHIRT: &str = "Sauce Labs Bolt T-Shirt";
const SHOPPING_LIST: &[&str] = &[ONESIE, BIKE_LIGHT, BOLT_T_SHIRT];

/// Every suite, in run order.
pub fn catalog() -> Vec<JourneySuite> {
    vec![
        JourneySuite {
            name: "login",
            title: "Login Tests",
            setup: Setup::Navigate,
            journeys: vec![
                journey("should display login form elements", login_form_elements),
                journey("should login with valid credentials", login_valid),
                journey(
                    "should show error message with invalid credentials",
                    login_invalid,
                ),
                journey(
                    "should show error message with empty credentials",
                    login_empty,
                ),
                journey("should clear form fields", login_clear_fields),
            ],
        },
        JourneySuite {
            name: "add-to-cart",
            title: "Add to Cart Tests",
            setup: Setup::Login,
            journeys: vec![
                journey("should add products to cart one by one", add_one_by_one),
                journey("should add multiple products to the cart", add_multiple),
                journey(
                    "should add a product to the cart and remove it from cart page",
                    remove_from_cart_page,
                ),
                journey(
                    "should add a product to the cart and remove it from product page",
                    remove_from_product_page,
                ),
            ],
        },
        JourneySuite {
            name: "checkout",
            title: "Checkout Tests",
            setup: Setup::Login,
            journeys: vec![
                journey("should complete checkout process", checkout_complete),
                journey(
                    "should display error message when first name is empty",
                    checkout_missing_first_name,
                ),
                journey(
                    "should display error message when last name is empty",
                    checkout_missing_last_name,
                ),
                journey(
                    "should display error message when postal code is empty",
                    checkout_missing_postal_code,
                ),
                journey(
                    "should display error message when all required fields are empty",
                    checkout_all_missing,
                ),
            ],
        },
        JourneySuite {
            name: "logout",
            title: "Logout Tests",
            setup: Setup::Login,
            journeys: vec![
                journey("should logout from landing page", logout_from_inventory),
                journey("should logout from cart page", logout_from_cart),
                journey(
                    "should logout from customer information page",
                    logout_from_information,
                ),
            ],
        },
    ]
}

fn journey(title: &'static str, run: JourneyFn) -> Journey {
    Journey { title, run }
}

/// Run every journey of `suite`, each on a page from `new_page`.
///
/// A failing setup fails that journey without running its body.
pub fn run_suite<D, F>(
    suite: &JourneySuite,
    config: &SuiteConfig,
    mut new_page: F,
) -> Vec<JourneyOutcome>
where
    D: Driver,
    F: FnMut() -> D,
{
    suite
        .journeys
        .iter()
        .map(|journey| {
            let page = new_page();
            let result =
                setup(&page, config, suite.setup).and_then(|()| (journey.run)(&page, config));
            match &result {
                Ok(()) => tracing::debug!(suite = suite.title, journey = journey.title, "passed"),
                Err(e) => tracing::debug!(
                    suite = suite.title,
                    journey = journey.title,
                    error = %e,
                    "failed"
                ),
            }
            JourneyOutcome {
                title: journey.title,
                result,
            }
        })
        .collect()
}

fn setup(page: &dyn Driver, config: &SuiteConfig, setup: Setup) -> Result<(), PageError> {
    let landing = LandingPage::new(page, config);
    landing.navigate()?;
    if setup == Setup::Login {
        landing.login_with_default_credentials()?;
    }
    Ok(())
}

fn settle(page: &dyn Driver) -> Result<(), PageError> {
    Ok(page.wait_for_load_state(LoadState::NetworkIdle)?)
}

// =============================================================================
// LOGIN
// =============================================================================

fn login_form_elements(page: &dyn Driver, config: &SuiteConfig) -> Result<(), PageError> {
    LandingPage::new(page, config).assert_login_form_complete()
}

fn login_valid(page: &dyn Driver, config: &SuiteConfig) -> Result<(), PageError> {
    let landing = LandingPage::new(page, config);
    landing.login("standard_user", "secret_sauce")?;
    landing.assert_url_contains("inventory")
}

fn login_invalid(page: &dyn Driver, config: &SuiteConfig) -> Result<(), PageError> {
    let landing = LandingPage::new(page, config);
    landing.login("invalid_user", "invalid_password")?;
    landing.assert_error_message(
        "Epic sadface: Username and password do not match any user in this service",
    )
}

fn login_empty(page: &dyn Driver, config: &SuiteConfig) -> Result<(), PageError> {
    let landing = LandingPage::new(page, config);
    landing.click_login_button()?;
    landing.assert_error_message("Epic sadface: Username is required")
}

fn login_clear_fields(page: &dyn Driver, config: &SuiteConfig) -> Result<(), PageError> {
    let landing = LandingPage::new(page, config);
    landing.fill_username("test_user")?;
    landing.fill_password("test_password")?;
    landing.clear_username()?;
    landing.clear_password()?;
    landing.assert_username_value("")?;
    landing.assert_password_value("")
}

// =============================================================================
// ADD TO CART
// =============================================================================

/// Add `name`, open the cart and check it holds just that product.
fn add_and_open_cart(page: &dyn Driver, name: &str) -> Result<(), PageError> {
    let products = ProductPage::new(page);
    products.add_product_to_cart(name)?;
    products.assert_cart_badge(1)?;
    products.click_cart_button()?;
    settle(page)?;
    products.assert_cart_badge(1)?;
    CartPage::new(page).assert_cart_page(name)
}

fn add_one_by_one(page: &dyn Driver, _: &SuiteConfig) -> Result<(), PageError> {
    let cart = CartPage::new(page);
    for name in SHOPPING_LIST {
        add_and_open_cart(page, name)?;
        cart.remove_item_from_cart()?;
        cart.continue_shopping()?;
        settle(page)?;
    }
    Ok(())
}

fn add_multiple(page: &dyn Driver, _: &SuiteConfig) -> Result<(), PageError> {
    let products = ProductPage::new(page);
    for name in SHOPPING_LIST {
        products.add_product_to_cart(name)?;
    }
    products.click_cart_button()?;
    settle(page)?;
    products.assert_cart_badge(SHOPPING_LIST.len())?;
    CartPage::new(page).assert_cart_items(SHOPPING_LIST)
}

fn remove_from_cart_page(page: &dyn Driver, _: &SuiteConfig) -> Result<(), PageError> {
    let products = ProductPage::new(page);
    let cart = CartPage::new(page);
    products.add_product_to_cart(ONESIE)?;
    products.click_cart_button()?;
    settle(page)?;
    cart.remove_item_from_cart()?;
    cart.continue_shopping()?;
    settle(page)?;
    products.assert_cart_badge_not_displayed()
}

fn remove_from_product_page(page: &dyn Driver, _: &SuiteConfig) -> Result<(), PageError> {
    let products = ProductPage::new(page);
    products.add_product_to_cart(ONESIE)?;
    products.assert_cart_badge(1)?;
    products.remove_product(ONESIE)?;
    products.assert_cart_badge_not_displayed()
}

// =============================================================================
// CHECKOUT
// =============================================================================

/// Put the onesie in the cart and fill the customer form with the given
/// fields, leaving the form unsubmitted.
fn fill_customer_information(
    page: &dyn Driver,
    first_name: &str,
    last_name: &str,
    postal_code: &str,
) -> Result<(), PageError> {
    add_and_open_cart(page, ONESIE)?;
    CartPage::new(page).click_checkout_button()?;
    let information = CheckoutInformationPage::new(page);
    information.assert_page_title()?;
    information.fill_form(first_name, last_name, postal_code)
}

fn checkout_complete(page: &dyn Driver, _: &SuiteConfig) -> Result<(), PageError> {
    fill_customer_information(page, "John", "Doe", "12345")?;
    CheckoutInformationPage::new(page).click_continue_button()?;
    settle(page)?;

    let overview = CheckoutOverviewPage::new(page);
    overview.assert_item_name(ONESIE)?;
    overview.assert_item_price(ONESIE_PRICE)?;
    overview.assert_item_quantity("1")?;
    overview.assert_item_description(ONESIE_DESCRIPTION)?;
    overview.assert_summary_visible()?;
    overview.click_finish_button()?;
    settle(page)?;

    let complete = CheckoutCompletePage::new(page);
    complete.assert_page_title()?;
    complete.assert_complete_header()?;
    complete.assert_complete_text()?;
    complete.click_back_home_button()?;
    settle(page)?;
    ProductPage::new(page).assert_cart_badge_not_displayed()
}

fn checkout_rejected(
    page: &dyn Driver,
    (first_name, last_name, postal_code): (&str, &str, &str),
    message: &str,
) -> Result<(), PageError> {
    fill_customer_information(page, first_name, last_name, postal_code)?;
    let information = CheckoutInformationPage::new(page);
    information.click_continue_button()?;
    information.assert_error_message(message)
}

fn checkout_missing_first_name(page: &dyn Driver, _: &SuiteConfig) -> Result<(), PageError> {
    checkout_rejected(page, ("", "Doe", "12345"), "Error: First Name is required")
}

fn checkout_missing_last_name(page: &dyn Driver, _: &SuiteConfig) -> Result<(), PageError> {
    checkout_rejected(page, ("John", "", "12345"), "Error: Last Name is required")
}

fn checkout_missing_postal_code(page: &dyn Driver, _: &SuiteConfig) -> Result<(), PageError> {
    checkout_rejected(page, ("John", "Doe", ""), "Error: Postal Code is required")
}

fn checkout_all_missing(page: &dyn Driver, _: &SuiteConfig) -> Result<(), PageError> {
    checkout_rejected(page, ("", "", ""), "Error: First Name is required")
}

// =============================================================================
// LOGOUT
// =============================================================================

/// Log out through the menu and check the login form is back.
fn logout_to_login_form(page: &dyn Driver, config: &SuiteConfig) -> Result<(), PageError> {
    MenuPage::new(page).logout()?;
    let landing = LandingPage::new(page, config);
    landing.wait_for_login_form()?;
    landing.assert_login_form_complete()
}

fn logout_from_inventory(page: &dyn Driver, config: &SuiteConfig) -> Result<(), PageError> {
    logout_to_login_form(page, config)
}

fn logout_from_cart(page: &dyn Driver, config: &SuiteConfig) -> Result<(), PageError> {
    add_and_open_cart(page, ONESIE)?;
    logout_to_login_form(page, config)
}

fn logout_from_information(page: &dyn Driver, config: &SuiteConfig) -> Result<(), PageError> {
    fill_customer_information(page, "John", "Doe", "12345")?;
    logout_to_login_form(page, config)
}

#[cfg(test)]
#[path = "journeys_tests.rs"]
mod tests;
