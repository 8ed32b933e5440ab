// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Order confirmation.

use crate::driver::{Driver, PageError, expect};
use crate::locators::checkout_complete as loc;

pub const TITLE: &str = "Checkout: Complete!";
pub const COMPLETE_HEADER: &str = "Thank you for your order!";
pub const COMPLETE_TEXT: &str =
    "Your order has been dispatched, and will arrive just as fast as the pony can get there!";

pub struct CheckoutCompletePage<'a, D: Driver + ?Sized> {
    driver: &'a D,
}

impl<'a, D: Driver + ?Sized> CheckoutCompletePage<'a, D> {
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    fn assert_shows(&self, selector: &str, text: &str) -> Result<(), PageError> {
        expect::to_be_visible(self.driver, selector)?;
        expect::to_have_text(self.driver, selector, text)
    }

    pub fn assert_page_title(&self) -> Result<(), PageError> {
        self.assert_shows(loc::TITLE, TITLE)
    }

    pub fn assert_complete_header(&self) -> Result<(), PageError> {
        self.assert_shows(loc::COMPLETE_HEADER, COMPLETE_HEADER)
    }

    pub fn assert_complete_text(&self) -> Result<(), PageError> {
        self.assert_shows(loc::COMPLETE_TEXT, COMPLETE_TEXT)
    }

    pub fn click_back_home_button(&self) -> Result<(), PageError> {
        Ok(self.driver.click(loc::BACK_HOME)?)
    }
}
