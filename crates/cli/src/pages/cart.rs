// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::driver::{Driver, PageError, expect};
use crate::locators::cart;

pub struct CartPage<'a, D: Driver + ?Sized> {
    driver: &'a D,
}

impl<'a, D: Driver + ?Sized> CartPage<'a, D> {
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// The cart holds exactly the product `name`.
    pub fn assert_cart_page(&self, name: &str) -> Result<(), PageError> {
        self.assert_cart_items(&[name])
    }

    /// The cart holds exactly `names`, in the order they were added.
    pub fn assert_cart_items(&self, names: &[&str]) -> Result<(), PageError> {
        expect::to_have_texts(self.driver, cart::ITEM_NAME, names)
    }

    /// Remove the only item in the cart.
    pub fn remove_item_from_cart(&self) -> Result<(), PageError> {
        Ok(self.driver.click(cart::REMOVE_BUTTON)?)
    }

    pub fn continue_shopping(&self) -> Result<(), PageError> {
        Ok(self.driver.click(cart::CONTINUE_SHOPPING)?)
    }

    pub fn click_checkout_button(&self) -> Result<(), PageError> {
        Ok(self.driver.click(cart::CHECKOUT)?)
    }
}
