// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Inventory page.

use crate::driver::{Driver, PageError, expect};
use crate::locators::products;

pub struct ProductPage<'a, D: Driver + ?Sized> {
    driver: &'a D,
}

impl<'a, D: Driver + ?Sized> ProductPage<'a, D> {
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    pub fn add_product_to_cart(&self, name: &str) -> Result<(), PageError> {
        tracing::debug!(product = name, "add to cart");
        Ok(self.driver.click(&products::add_to_cart_button(name))?)
    }

    /// Remove `name` from the cart using its inventory button.
    pub fn remove_product(&self, name: &str) -> Result<(), PageError> {
        Ok(self.driver.click(&products::remove_button(name))?)
    }

    pub fn click_cart_button(&self) -> Result<(), PageError> {
        Ok(self.driver.click(products::CART_LINK)?)
    }

    pub fn assert_cart_badge(&self, count: usize) -> Result<(), PageError> {
        expect::to_have_text(self.driver, products::CART_BADGE, &count.to_string())
    }

    pub fn assert_cart_badge_not_displayed(&self) -> Result<(), PageError> {
        expect::to_be_hidden(self.driver, products::CART_BADGE)
    }

    pub fn assert_page_title(&self) -> Result<(), PageError> {
        expect::to_have_text(self.driver, products::TITLE, "Products")
    }
}
