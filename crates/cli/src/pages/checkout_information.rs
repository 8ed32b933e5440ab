// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checkout step one: customer information form.

use crate::driver::{Driver, PageError, expect};
use crate::locators::checkout_information as loc;

pub const TITLE: &str = "Checkout: Your Information";

pub struct CheckoutInformationPage<'a, D: Driver + ?Sized> {
    driver: &'a D,
}

impl<'a, D: Driver + ?Sized> CheckoutInformationPage<'a, D> {
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    pub fn assert_page_title(&self) -> Result<(), PageError> {
        expect::to_be_visible(self.driver, loc::TITLE)?;
        expect::to_have_text(self.driver, loc::TITLE, TITLE)
    }

    pub fn fill_first_name(&self, first_name: &str) -> Result<(), PageError> {
        Ok(self.driver.fill(loc::FIRST_NAME, first_name)?)
    }

    pub fn fill_last_name(&self, last_name: &str) -> Result<(), PageError> {
        Ok(self.driver.fill(loc::LAST_NAME, last_name)?)
    }

    pub fn fill_postal_code(&self, postal_code: &str) -> Result<(), PageError> {
        Ok(self.driver.fill(loc::POSTAL_CODE, postal_code)?)
    }

    /// Fill all three fields in form order.
    pub fn fill_form(
        &self,
        first_name: &str,
        last_name: &str,
        postal_code: &str,
    ) -> Result<(), PageError> {
        self.fill_first_name(first_name)?;
        self.fill_last_name(last_name)?;
        self.fill_postal_code(postal_code)
    }

    pub fn click_continue_button(&self) -> Result<(), PageError> {
        Ok(self.driver.click(loc::CONTINUE)?)
    }

    pub fn click_cancel_button(&self) -> Result<(), PageError> {
        Ok(self.driver.click(loc::CANCEL)?)
    }

    pub fn assert_error_message(&self, expected: &str) -> Result<(), PageError> {
        expect::to_have_text(self.driver, loc::ERROR_MESSAGE, expected)
    }
}
