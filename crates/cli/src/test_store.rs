//! In-memory storefront used to exercise pages and journeys.
//!
//! Models the login, inventory, cart and checkout flow of the demo shop
//! closely enough for every journey to run, and answers the selectors in
//! [`crate::locators`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::driver::{Driver, DriverError, ElementState, LoadState};
use crate::locators::{
    cart, checkout_complete, checkout_information, checkout_overview, landing, menu, products,
};

pub const BASE_URL: &str = "https://shop.test";
pub const VALID_USERNAME: &str = "standard_user";
pub const VALID_PASSWORD: &str = "secret_sauce";

/// A product in the fake inventory.
pub struct Product {
    pub name: &'static str,
    pub price: &'static str,
    pub cents: u32,
    pub description: &'static str,
}

pub const INVENTORY: &[Product] = &[
    Product {
        name: "Sauce Labs Backpack",
        price: "$29.99",
        cents: 2999,
        description: "carry.allTheThings() with the sleek, streamlined Sly Pack.",
    },
    Product {
        name: "Sauce Labs Bike Light",
        price: "$9.99",
        cents: 999,
        description: "A red light isn't the desired state in testing but it sure helps when riding your bike at night.",
    },
    Product {
        name: "Sauce Labs Bolt T-Shirt",
        price: "$15.99",
        cents: 1599,
        description: "Get your testing superhero on with the Sauce Labs bolt T-shirt.",
    },
    Product {
        name: "Sauce Labs Onesie",
        price: "$7.99",
        cents: 799,
        description: "Rib snap infant onesie for the junior automation engineer in development.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Blank,
    Login,
    Inventory,
    Cart,
    CheckoutInformation,
    CheckoutOverview,
    CheckoutComplete,
    About,
}

impl Screen {
    fn path(self) -> &'static str {
        match self {
            Screen::Blank => "about:blank",
            Screen::Login => "/",
            Screen::Inventory => "/inventory.html",
            Screen::Cart => "/cart.html",
            Screen::CheckoutInformation => "/checkout-step-one.html",
            Screen::CheckoutOverview => "/checkout-step-two.html",
            Screen::CheckoutComplete => "/checkout-complete.html",
            Screen::About => "https://saucelabs.com/",
        }
    }

    fn has_header(self) -> bool {
        matches!(
            self,
            Screen::Inventory
                | Screen::Cart
                | Screen::CheckoutInformation
                | Screen::CheckoutOverview
                | Screen::CheckoutComplete
        )
    }

    fn title(self) -> Option<&'static str> {
        match self {
            Screen::Inventory => Some("Products"),
            Screen::Cart => Some("Your Cart"),
            Screen::CheckoutInformation => Some("Checkout: Your Information"),
            Screen::CheckoutOverview => Some("Checkout: Overview"),
            Screen::CheckoutComplete => Some("Checkout: Complete!"),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct State {
    screen: Screen,
    inputs: HashMap<&'static str, String>,
    error: Option<&'static str>,
    cart: Vec<&'static str>,
    menu_open: bool,
    load_waits: usize,
}

/// Fake browser page over the in-memory shop.
#[derive(Debug)]
pub struct FakeStore {
    state: RefCell<State>,
}

impl Default for FakeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(State {
                screen: Screen::Blank,
                inputs: HashMap::new(),
                error: None,
                cart: Vec::new(),
                menu_open: false,
                load_waits: 0,
            }),
        }
    }

    pub fn screen(&self) -> Screen {
        self.state.borrow().screen
    }

    pub fn cart(&self) -> Vec<&'static str> {
        self.state.borrow().cart.clone()
    }

    pub fn load_waits(&self) -> usize {
        self.state.borrow().load_waits
    }

    fn not_found(selector: &str) -> DriverError {
        DriverError::NotFound {
            selector: selector.to_string(),
        }
    }

    fn product(name: &str) -> Option<&'static Product> {
        INVENTORY.iter().find(|p| p.name == name)
    }

    fn cart_products(state: &State) -> Vec<&'static Product> {
        state.cart.iter().filter_map(|n| Self::product(n)).collect()
    }

    fn form_fields(screen: Screen) -> &'static [&'static str] {
        match screen {
            Screen::Login => &[landing::USERNAME_INPUT, landing::PASSWORD_INPUT],
            Screen::CheckoutInformation => &[
                checkout_information::FIRST_NAME,
                checkout_information::LAST_NAME,
                checkout_information::POSTAL_CODE,
            ],
            _ => &[],
        }
    }

    fn input(state: &State, field: &str) -> String {
        state.inputs.get(field).cloned().unwrap_or_default()
    }

    fn show(state: &mut State, screen: Screen) {
        state.screen = screen;
        state.error = None;
        state.menu_open = false;
        if screen == Screen::Login || screen == Screen::CheckoutInformation {
            state.inputs.clear();
        }
    }

    /// Texts of every visible element matching `selector`.
    fn texts(&self, selector: &str) -> Vec<String> {
        let state = self.state.borrow();
        let screen = state.screen;
        let one = |text: &str| vec![text.to_string()];
        let empty = || vec![String::new()];

        if let Some(error) = state.error
            && (selector == landing::ERROR_MESSAGE
                || selector == checkout_information::ERROR_MESSAGE)
        {
            return one(error);
        }

        if Self::form_fields(screen).contains(&selector) {
            return empty();
        }

        if screen == Screen::Login
            && [
                landing::LOGIN_BUTTON,
                landing::LOGIN_CONTAINER,
                landing::BOT_IMAGE,
                landing::LOGO,
                landing::LOGIN_CREDENTIALS,
            ]
            .contains(&selector)
        {
            return empty();
        }

        if screen.has_header() {
            if [products::HEADER, products::CART_LINK, menu::OPEN].contains(&selector) {
                return empty();
            }
            if selector == products::CART_BADGE {
                return if state.cart.is_empty() {
                    Vec::new()
                } else {
                    one(&state.cart.len().to_string())
                };
            }
            if selector == products::TITLE || selector == checkout_information::TITLE {
                return screen.title().map(one).unwrap_or_default();
            }
            if state.menu_open
                && [menu::LOGOUT, menu::ALL_ITEMS, menu::ABOUT, menu::RESET_APP_STATE, menu::CLOSE]
                    .contains(&selector)
            {
                return empty();
            }
        }

        match screen {
            Screen::Inventory => {
                if selector == products::ITEM_NAME {
                    return INVENTORY.iter().map(|p| p.name.to_string()).collect();
                }
                if selector == products::INVENTORY_CONTAINER || selector == products::SORT {
                    return empty();
                }
                for p in INVENTORY {
                    let in_cart = state.cart.contains(&p.name);
                    if (!in_cart && selector == products::add_to_cart_button(p.name))
                        || (in_cart && selector == products::remove_button(p.name))
                    {
                        return empty();
                    }
                }
                Vec::new()
            }
            Screen::Cart | Screen::CheckoutOverview => {
                let items = Self::cart_products(&state);
                let each = |f: fn(&Product) -> String| -> Vec<String> {
                    items.iter().map(|p| f(p)).collect()
                };
                match selector {
                    s if s == cart::ITEM_NAME => each(|p| p.name.to_string()),
                    s if s == cart::ITEM_PRICE => each(|p| p.price.to_string()),
                    s if s == cart::ITEM_QUANTITY => each(|_| "1".to_string()),
                    s if s == checkout_overview::ITEM_DESCRIPTION => {
                        each(|p| p.description.to_string())
                    }
                    s if s == cart::ITEM => each(|_| String::new()),
                    s if screen == Screen::Cart && s == cart::REMOVE_BUTTON => {
                        each(|_| "Remove".to_string())
                    }
                    s if screen == Screen::Cart
                        && (s == cart::CONTINUE_SHOPPING || s == cart::CHECKOUT) =>
                    {
                        empty()
                    }
                    s if screen == Screen::CheckoutOverview => {
                        Self::overview_text(&items, s)
                            .map(|text| vec![text])
                            .unwrap_or_default()
                    }
                    _ => Vec::new(),
                }
            }
            Screen::CheckoutInformation => {
                if selector == checkout_information::CONTINUE
                    || selector == checkout_information::CANCEL
                {
                    empty()
                } else {
                    Vec::new()
                }
            }
            Screen::CheckoutComplete => match selector {
                s if s == checkout_complete::COMPLETE_HEADER => one("Thank you for your order!"),
                s if s == checkout_complete::COMPLETE_TEXT => one(
                    "Your order has been dispatched, and will arrive just as fast as the pony can get there!",
                ),
                s if s == checkout_complete::BACK_HOME => empty(),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn overview_text(items: &[&Product], selector: &str) -> Option<String> {
        let subtotal: u32 = items.iter().map(|p| p.cents).sum();
        let tax = (subtotal * 8 + 50) / 100;
        let money = |cents: u32| format!("${}.{:02}", cents / 100, cents % 100);
        let text = match selector {
            s if s == checkout_overview::PAYMENT_INFO_LABEL => "Payment Information:".to_string(),
            s if s == checkout_overview::PAYMENT_INFO_VALUE => "SauceCard #31337".to_string(),
            s if s == checkout_overview::SHIPPING_INFO_LABEL => "Shipping Information:".to_string(),
            s if s == checkout_overview::ITEM_TOTAL_LABEL => "Price Total".to_string(),
            s if s == checkout_overview::SUBTOTAL_LABEL => {
                format!("Item total: {}", money(subtotal))
            }
            s if s == checkout_overview::TAX_LABEL => format!("Tax: {}", money(tax)),
            s if s == checkout_overview::TOTAL_LABEL => format!("Total: {}", money(subtotal + tax)),
            s if s == checkout_overview::FINISH || s == checkout_overview::CANCEL => String::new(),
            _ => return None,
        };
        Some(text)
    }

    fn submit_login(state: &mut State) {
        let username = Self::input(state, landing::USERNAME_INPUT);
        let password = Self::input(state, landing::PASSWORD_INPUT);
        if username == VALID_USERNAME && password == VALID_PASSWORD {
            Self::show(state, Screen::Inventory);
            return;
        }
        state.error = Some(if username.is_empty() {
            "Epic sadface: Username is required"
        } else if password.is_empty() {
            "Epic sadface: Password is required"
        } else {
            "Epic sadface: Username and password do not match any user in this service"
        });
    }

    fn submit_information(state: &mut State) {
        let missing = [
            (checkout_information::FIRST_NAME, "Error: First Name is required"),
            (checkout_information::LAST_NAME, "Error: Last Name is required"),
            (checkout_information::POSTAL_CODE, "Error: Postal Code is required"),
        ]
        .into_iter()
        .find(|(field, _)| Self::input(state, field).is_empty())
        .map(|(_, message)| message);

        match missing {
            Some(message) => state.error = Some(message),
            None => Self::show(state, Screen::CheckoutOverview),
        }
    }
}

impl Driver for FakeStore {
    fn goto(&self, url: &str) -> Result<(), DriverError> {
        if !url.starts_with(BASE_URL) {
            return Err(DriverError::Navigation {
                url: url.to_string(),
                message: "host unreachable".to_string(),
            });
        }
        Self::show(&mut self.state.borrow_mut(), Screen::Login);
        Ok(())
    }

    fn url(&self) -> Result<String, DriverError> {
        let screen = self.screen();
        Ok(match screen {
            Screen::Blank | Screen::About => screen.path().to_string(),
            _ => format!("{}{}", BASE_URL, screen.path()),
        })
    }

    fn click(&self, selector: &str) -> Result<(), DriverError> {
        if self.texts(selector).is_empty() {
            return Err(Self::not_found(selector));
        }

        let mut state = self.state.borrow_mut();
        let screen = state.screen;
        match selector {
            s if s == landing::LOGIN_BUTTON => Self::submit_login(&mut state),
            s if s == menu::OPEN => state.menu_open = true,
            s if s == menu::CLOSE => state.menu_open = false,
            s if s == menu::LOGOUT => Self::show(&mut state, Screen::Login),
            s if s == menu::ALL_ITEMS => Self::show(&mut state, Screen::Inventory),
            s if s == menu::ABOUT => Self::show(&mut state, Screen::About),
            s if s == menu::RESET_APP_STATE => state.cart.clear(),
            s if s == products::CART_LINK => Self::show(&mut state, Screen::Cart),
            s if s == cart::REMOVE_BUTTON => {
                state.cart.remove(0);
            }
            s if s == cart::CONTINUE_SHOPPING => Self::show(&mut state, Screen::Inventory),
            s if s == cart::CHECKOUT => Self::show(&mut state, Screen::CheckoutInformation),
            s if s == checkout_information::CONTINUE && screen == Screen::CheckoutInformation => {
                Self::submit_information(&mut state)
            }
            s if s == checkout_information::CANCEL && screen == Screen::CheckoutInformation => {
                Self::show(&mut state, Screen::Cart)
            }
            s if s == checkout_overview::CANCEL => Self::show(&mut state, Screen::Inventory),
            s if s == checkout_overview::FINISH => {
                state.cart.clear();
                Self::show(&mut state, Screen::CheckoutComplete);
            }
            s if s == checkout_complete::BACK_HOME => Self::show(&mut state, Screen::Inventory),
            s => {
                for p in INVENTORY {
                    if s == products::add_to_cart_button(p.name) {
                        state.cart.push(p.name);
                    } else if s == products::remove_button(p.name) {
                        state.cart.retain(|n| *n != p.name);
                    }
                }
            }
        }
        Ok(())
    }

    fn fill(&self, selector: &str, text: &str) -> Result<(), DriverError> {
        let mut state = self.state.borrow_mut();
        let Some(field) = Self::form_fields(state.screen)
            .iter()
            .copied()
            .find(|f| *f == selector)
        else {
            return Err(Self::not_found(selector));
        };
        state.inputs.insert(field, text.to_string());
        Ok(())
    }

    fn text_content(&self, selector: &str) -> Result<String, DriverError> {
        self.texts(selector)
            .into_iter()
            .next()
            .ok_or_else(|| Self::not_found(selector))
    }

    fn all_text_contents(&self, selector: &str) -> Result<Vec<String>, DriverError> {
        Ok(self.texts(selector))
    }

    fn input_value(&self, selector: &str) -> Result<String, DriverError> {
        let state = self.state.borrow();
        if Self::form_fields(state.screen).contains(&selector) {
            Ok(Self::input(&state, selector))
        } else {
            Err(Self::not_found(selector))
        }
    }

    fn is_visible(&self, selector: &str) -> Result<bool, DriverError> {
        Ok(!self.texts(selector).is_empty())
    }

    fn wait_for(
        &self,
        selector: &str,
        state: ElementState,
        timeout: Duration,
    ) -> Result<(), DriverError> {
        let visible = self.is_visible(selector)?;
        let reached = match state {
            ElementState::Visible => visible,
            ElementState::Hidden => !visible,
        };
        if reached {
            Ok(())
        } else {
            Err(DriverError::Timeout {
                selector: selector.to_string(),
                state,
                timeout,
            })
        }
    }

    fn wait_for_load_state(&self, _state: LoadState) -> Result<(), DriverError> {
        self.state.borrow_mut().load_waits += 1;
        Ok(())
    }
}
