// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Login page.

use std::time::Duration;

use crate::config::SuiteConfig;
use crate::driver::{Driver, ElementState, LoadState, PageError, expect};
use crate::locators::landing;

/// How long to wait for the login form after logging out.
pub const LOGIN_FORM_TIMEOUT: Duration = Duration::from_secs(10);

pub struct LandingPage<'a, D: Driver + ?Sized> {
    driver: &'a D,
    config: &'a SuiteConfig,
}

impl<'a, D: Driver + ?Sized> LandingPage<'a, D> {
    pub fn new(driver: &'a D, config: &'a SuiteConfig) -> Self {
        Self { driver, config }
    }

    /// Open the storefront at the configured base URL and wait for the
    /// network to settle.
    pub fn navigate(&self) -> Result<(), PageError> {
        tracing::debug!(url = %self.config.base_url, "navigate");
        self.driver.goto(&self.config.base_url)?;
        self.driver.wait_for_load_state(LoadState::NetworkIdle)?;
        Ok(())
    }

    pub fn login(&self, username: &str, password: &str) -> Result<(), PageError> {
        self.fill_username(username)?;
        self.fill_password(password)?;
        self.click_login_button()
    }

    /// Log in with the configured credentials.
    pub fn login_with_default_credentials(&self) -> Result<(), PageError> {
        self.login(&self.config.username, &self.config.password)
    }

    pub fn fill_username(&self, username: &str) -> Result<(), PageError> {
        Ok(self.driver.fill(landing::USERNAME_INPUT, username)?)
    }

    pub fn fill_password(&self, password: &str) -> Result<(), PageError> {
        Ok(self.driver.fill(landing::PASSWORD_INPUT, password)?)
    }

    pub fn clear_username(&self) -> Result<(), PageError> {
        Ok(self.driver.clear(landing::USERNAME_INPUT)?)
    }

    pub fn clear_password(&self) -> Result<(), PageError> {
        Ok(self.driver.clear(landing::PASSWORD_INPUT)?)
    }

    pub fn click_login_button(&self) -> Result<(), PageError> {
        Ok(self.driver.click(landing::LOGIN_BUTTON)?)
    }

    pub fn is_login_form_visible(&self) -> Result<bool, PageError> {
        Ok(self.driver.is_visible(landing::LOGIN_CONTAINER)?)
    }

    pub fn is_error_message_visible(&self) -> Result<bool, PageError> {
        Ok(self.driver.is_visible(landing::ERROR_MESSAGE)?)
    }

    pub fn is_bot_image_visible(&self) -> Result<bool, PageError> {
        Ok(self.driver.is_visible(landing::BOT_IMAGE)?)
    }

    pub fn is_logo_visible(&self) -> Result<bool, PageError> {
        Ok(self.driver.is_visible(landing::LOGO)?)
    }

    pub fn error_message(&self) -> Result<String, PageError> {
        Ok(self.driver.text_content(landing::ERROR_MESSAGE)?)
    }

    pub fn wait_for_login_form(&self) -> Result<(), PageError> {
        self.driver.wait_for(
            landing::LOGIN_CONTAINER,
            ElementState::Visible,
            LOGIN_FORM_TIMEOUT,
        )?;
        Ok(())
    }

    pub fn assert_login_form_visible(&self) -> Result<(), PageError> {
        expect::to_be_visible(self.driver, landing::LOGIN_CONTAINER)
    }

    pub fn assert_username_input_visible(&self) -> Result<(), PageError> {
        expect::to_be_visible(self.driver, landing::USERNAME_INPUT)
    }

    pub fn assert_password_input_visible(&self) -> Result<(), PageError> {
        expect::to_be_visible(self.driver, landing::PASSWORD_INPUT)
    }

    pub fn assert_login_button_visible(&self) -> Result<(), PageError> {
        expect::to_be_visible(self.driver, landing::LOGIN_BUTTON)
    }

    /// Form, both inputs and the login button are all shown.
    pub fn assert_login_form_complete(&self) -> Result<(), PageError> {
        self.assert_login_form_visible()?;
        self.assert_username_input_visible()?;
        self.assert_password_input_visible()?;
        self.assert_login_button_visible()
    }

    pub fn assert_username_value(&self, expected: &str) -> Result<(), PageError> {
        expect::to_have_value(self.driver, landing::USERNAME_INPUT, expected)
    }

    pub fn assert_password_value(&self, expected: &str) -> Result<(), PageError> {
        expect::to_have_value(self.driver, landing::PASSWORD_INPUT, expected)
    }

    pub fn assert_url_contains(&self, fragment: &str) -> Result<(), PageError> {
        expect::to_have_url_containing(self.driver, fragment)
    }

    /// The error banner is shown and contains `expected`.
    pub fn assert_error_message(&self, expected: &str) -> Result<(), PageError> {
        expect::to_be_visible(self.driver, landing::ERROR_MESSAGE)?;
        expect::to_contain_text(self.driver, landing::ERROR_MESSAGE, expected)
    }
}
