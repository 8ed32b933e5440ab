// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checkout step two: order review.

use crate::driver::{Driver, PageError, expect};
use crate::locators::checkout_overview as loc;

pub const TITLE: &str = "Checkout: Overview";

pub struct CheckoutOverviewPage<'a, D: Driver + ?Sized> {
    driver: &'a D,
}

impl<'a, D: Driver + ?Sized> CheckoutOverviewPage<'a, D> {
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    pub fn assert_page_title(&self) -> Result<(), PageError> {
        expect::to_be_visible(self.driver, loc::TITLE)?;
        expect::to_have_text(self.driver, loc::TITLE, TITLE)
    }

    pub fn assert_item_name(&self, name: &str) -> Result<(), PageError> {
        expect::to_have_text(self.driver, loc::ITEM_NAME, name)
    }

    pub fn assert_item_price(&self, price: &str) -> Result<(), PageError> {
        expect::to_have_text(self.driver, loc::ITEM_PRICE, price)
    }

    pub fn assert_item_quantity(&self, quantity: &str) -> Result<(), PageError> {
        expect::to_have_text(self.driver, loc::ITEM_QUANTITY, quantity)
    }

    /// Description contains `fragment`; the full text is long and may change.
    pub fn assert_item_description(&self, fragment: &str) -> Result<(), PageError> {
        expect::to_contain_text(self.driver, loc::ITEM_DESCRIPTION, fragment)
    }

    pub fn assert_payment_info_label(&self) -> Result<(), PageError> {
        expect::to_be_visible(self.driver, loc::PAYMENT_INFO_LABEL)
    }

    pub fn assert_payment_info_value(&self) -> Result<(), PageError> {
        expect::to_be_visible(self.driver, loc::PAYMENT_INFO_VALUE)
    }

    pub fn assert_shipping_info_label(&self) -> Result<(), PageError> {
        expect::to_be_visible(self.driver, loc::SHIPPING_INFO_LABEL)
    }

    pub fn assert_item_total_label(&self) -> Result<(), PageError> {
        expect::to_be_visible(self.driver, loc::ITEM_TOTAL_LABEL)
    }

    pub fn assert_subtotal_label(&self) -> Result<(), PageError> {
        expect::to_be_visible(self.driver, loc::SUBTOTAL_LABEL)
    }

    pub fn assert_tax_label(&self) -> Result<(), PageError> {
        expect::to_be_visible(self.driver, loc::TAX_LABEL)
    }

    pub fn assert_total_label(&self) -> Result<(), PageError> {
        expect::to_be_visible(self.driver, loc::TOTAL_LABEL)
    }

    /// Every payment, shipping and price line is shown.
    pub fn assert_summary_visible(&self) -> Result<(), PageError> {
        loc::SUMMARY
            .iter()
            .try_for_each(|selector| expect::to_be_visible(self.driver, selector))
    }

    pub fn click_finish_button(&self) -> Result<(), PageError> {
        Ok(self.driver.click(loc::FINISH)?)
    }

    pub fn click_cancel_button(&self) -> Result<(), PageError> {
        Ok(self.driver.click(loc::CANCEL)?)
    }
}
