// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::driver::{Driver, PageError};
use crate::locators::menu;

/// Burger menu shared by every signed-in screen.
pub struct MenuPage<'a, D: Driver + ?Sized> {
    driver: &'a D,
}

impl<'a, D: Driver + ?Sized> MenuPage<'a, D> {
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    pub fn open(&self) -> Result<(), PageError> {
        Ok(self.driver.click(menu::OPEN)?)
    }

    pub fn click_logout(&self) -> Result<(), PageError> {
        Ok(self.driver.click(menu::LOGOUT)?)
    }

    pub fn click_all_items(&self) -> Result<(), PageError> {
        Ok(self.driver.click(menu::ALL_ITEMS)?)
    }

    pub fn click_about(&self) -> Result<(), PageError> {
        Ok(self.driver.click(menu::ABOUT)?)
    }

    pub fn click_reset_app_state(&self) -> Result<(), PageError> {
        Ok(self.driver.click(menu::RESET_APP_STATE)?)
    }

    pub fn close(&self) -> Result<(), PageError> {
        Ok(self.driver.click(menu::CLOSE)?)
    }

    /// Open the menu and log out.
    pub fn logout(&self) -> Result<(), PageError> {
        self.open()?;
        self.click_logout()
    }
}
