use std::sync::Arc;

use tracing::debug;

use grocer_catalog::CatalogStore;
use grocer_core::config::StoreConfig;
use grocer_core::order::Order;
use grocer_core::session::{Step, UserSession};

use crate::format;

/// Everything produced by one turn of the conversation. The caller
/// persists `session`, delivers `replies` to the sender, forwards
/// `owner_alert` to the shop owner, and stores `order` if present.
#[derive(Debug)]
pub struct Turn {
    pub session: UserSession,
    pub replies: Vec<String>,
    pub owner_alert: Option<String>,
    pub order: Option<Order>,
}

impl Turn {
    pub(crate) fn reply(session: UserSession, message: impl Into<String>) -> Self {
        Self {
            session,
            replies: vec![message.into()],
            owner_alert: None,
            order: None,
        }
    }

    pub(crate) fn with_replies(session: UserSession, replies: Vec<String>) -> Self {
        Self {
            session,
            replies,
            owner_alert: None,
            order: None,
        }
    }
}

/// Step-indexed state machine driving the checkout dialogue. Stateless
/// itself: every call gets the full persisted session and returns the full
/// updated session, so it composes with any `SessionStore`.
pub struct ConversationEngine {
    pub(crate) catalog: Arc<CatalogStore>,
    pub(crate) store: StoreConfig,
}

impl ConversationEngine {
    pub fn new(catalog: Arc<CatalogStore>, store: StoreConfig) -> Self {
        Self { catalog, store }
    }

    /// Run one conversation turn. Never fails: user-input errors become
    /// corrective re-prompts at the same step.
    pub fn handle(&self, session: UserSession, text: &str) -> Turn {
        let text = text.trim();
        let lowered = text.to_lowercase();

        debug!(sender = %session.sender, step = ?session.step, "Handling turn");

        // Greetings win over whatever step the user is stuck at.
        if matches!(lowered.as_str(), "hi" | "hey" | "hie") {
            let fresh = UserSession::new(&session.sender);
            return self.greet(fresh);
        }

        // Pagination tokens are only special while browsing.
        if session.step == Step::ChooseProduct {
            match lowered.as_str() {
                "more" => return self.next_category(session),
                "back" => return self.prev_category(session),
                _ => {}
            }
        }

        match session.step {
            Step::AskName => self.greet(session),
            Step::SaveName => self.save_name(session, text),
            Step::ChooseProduct => self.choose_product(session, text),
            Step::AskQuantity => self.ask_quantity(session, text),
            Step::PostAddMenu => self.post_add_menu(session, text, &lowered),
            Step::AskRemoveQuantity => self.ask_remove_quantity(session, text),
            Step::GetArea => self.get_area(session, text),
            Step::AskCheckout => self.ask_checkout(session, &lowered),
            Step::ChooseDeliveryOrPickup => self.choose_delivery_or_pickup(session, &lowered),
            Step::GetReceiverName => self.get_receiver_name(session, text),
            Step::GetAddress => self.get_address(session, text),
            Step::GetId => self.get_id(session, text),
            Step::GetPhone => self.get_phone(session, text),
            Step::GetReceiverNamePickup => self.get_receiver_name_pickup(session, text),
            Step::GetIdPickup => self.get_id_pickup(session, text),
            Step::ConfirmDetails => self.confirm_details(session, &lowered),
            Step::AwaitPaymentSelection => self.payment_selection(session, text),
            Step::AskPlaceAnotherOrder => self.place_another_order(session, &lowered),
            Step::Unknown => self.fallback(session),
        }
    }

    // ---- Browsing and cart steps ------------------------------------------

    fn greet(&self, mut session: UserSession) -> Turn {
        session.step = Step::SaveName;
        let message = format!(
            "Hello! Welcome to {}. What's your name?",
            self.store.name
        );
        Turn::reply(session, message)
    }

    fn save_name(&self, mut session: UserSession, text: &str) -> Turn {
        if text.is_empty() {
            return Turn::reply(session, "Please tell me your name to get started.");
        }
        let name = format::title_case(text);
        session.payer_name = Some(name.clone());
        self.reset_pagination(&mut session);

        if session.category_names.is_empty() {
            return Turn::reply(
                session,
                "Sorry, the store has nothing in stock right now. Please check back later.",
            );
        }

        session.step = Step::ChooseProduct;
        let page = self.show_category(&session);
        Turn::reply(session, format!("Thanks {name}! {page}"))
    }

    fn next_category(&self, mut session: UserSession) -> Turn {
        if session.category_names.is_empty() {
            self.reset_pagination(&mut session);
            let page = self.show_category(&session);
            return Turn::reply(session, page);
        }
        if session.category_index + 1 >= session.category_names.len() {
            // Boundary is idempotent: index and step stay put.
            return Turn::reply(
                session,
                "No more categories. You can still pick a product from the list above by number.",
            );
        }
        session.category_index += 1;
        let page = self.show_category(&session);
        Turn::reply(session, page)
    }

    fn prev_category(&self, mut session: UserSession) -> Turn {
        session.category_index = session.category_index.saturating_sub(1);
        let page = self.show_category(&session);
        Turn::reply(session, page)
    }

    fn choose_product(&self, mut session: UserSession, text: &str) -> Turn {
        let Some(category) = session.current_category().map(str::to_string) else {
            // Pagination state got lost; rebuild it instead of wedging.
            self.reset_pagination(&mut session);
            let page = self.show_category(&session);
            return Turn::reply(session, format!("Let's start from the top. {page}"));
        };

        let Ok(index) = text.parse::<usize>() else {
            return Turn::reply(session, "Please enter a valid product number.");
        };

        let products = self.catalog.available_products(&category);
        if index == 0 || index > products.len() {
            return Turn::reply(session, "Invalid product number. Try again.");
        }

        let product = &products[index - 1];
        session.selected_product = Some(product.snapshot());
        session.step = Step::AskQuantity;
        let message = format!(
            "You selected {}. How many would you like to add?",
            product.name
        );
        Turn::reply(session, message)
    }

    fn ask_quantity(&self, mut session: UserSession, text: &str) -> Turn {
        let Some(selected) = session.selected_product.clone() else {
            // The selection buffer is gone; send the user back to browsing.
            session.step = Step::ChooseProduct;
            let page = self.show_category(&session);
            return Turn::reply(
                session,
                format!("Something went wrong with your selection. {page}"),
            );
        };

        let quantity = match text.parse::<u32>() {
            Ok(q) if q >= 1 => q,
            _ => {
                return Turn::reply(
                    session,
                    "Please enter a valid number for quantity (e.g. 1, 2, 3).",
                );
            }
        };

        session.cart.add(selected, quantity);
        session.selected_product = None;
        session.step = Step::PostAddMenu;
        let message = format!("Item added to your cart.\n{}", format::post_add_menu());
        Turn::reply(session, message)
    }

    fn post_add_menu(&self, mut session: UserSession, text: &str, lowered: &str) -> Turn {
        match lowered {
            "1" | "view" | "view cart" => self.view_cart(session),
            "2" | "clear" | "clear cart" => {
                session.cart.clear();
                let message = format!("Cart cleared.\n{}", format::post_add_menu());
                Turn::reply(session, message)
            }
            "3" | "remove" => Turn::reply(
                session,
                "Reply with 'remove <item name>' to take something out of your cart.",
            ),
            "4" | "add" | "add item" | "add another" | "add more" => {
                self.reset_pagination(&mut session);
                session.step = Step::ChooseProduct;
                let page = self.show_category(&session);
                Turn::reply(session, format!("Sure! {page}"))
            }
            _ if lowered.starts_with("remove ") => {
                let item = text[7..].trim();
                self.remove_item(session, item)
            }
            _ => Turn::reply(
                session,
                format!("Please choose one of the options.\n{}", format::post_add_menu()),
            ),
        }
    }

    fn remove_item(&self, mut session: UserSession, item: &str) -> Turn {
        let Some(line) = session.cart.find(item) else {
            let message = format!(
                "{item} is not in your cart.\n{}\n\n{}",
                format::render_cart(&session.cart, &self.store.currency_symbol),
                format::post_add_menu()
            );
            return Turn::reply(session, message);
        };

        let name = line.product.name.clone();
        if line.quantity > 1 {
            let quantity = line.quantity;
            session.selected_remove_item = Some(name.clone());
            session.step = Step::AskRemoveQuantity;
            let message =
                format!("You have {quantity} x {name} in your cart. How many should I remove?");
            return Turn::reply(session, message);
        }

        session.cart.remove(&name);
        let message = format!(
            "{name} removed from your cart.\n{}\n\n{}",
            format::render_cart(&session.cart, &self.store.currency_symbol),
            format::post_add_menu()
        );
        Turn::reply(session, message)
    }

    fn ask_remove_quantity(&self, mut session: UserSession, text: &str) -> Turn {
        let Some(name) = session.selected_remove_item.clone() else {
            session.step = Step::PostAddMenu;
            return Turn::reply(
                session,
                format!("Let's go back to your cart.\n{}", format::post_add_menu()),
            );
        };

        let Some(line) = session.cart.find(&name) else {
            session.selected_remove_item = None;
            session.step = Step::PostAddMenu;
            return Turn::reply(
                session,
                format!(
                    "That item is no longer in your cart.\n{}",
                    format::post_add_menu()
                ),
            );
        };

        let current = line.quantity;
        let quantity = match text.parse::<u32>() {
            Ok(q) if (1..=current).contains(&q) => q,
            _ => {
                return Turn::reply(
                    session,
                    format!("Please enter a number between 1 and {current}."),
                );
            }
        };

        session.cart.remove_quantity(&name, quantity);
        session.selected_remove_item = None;
        session.step = Step::PostAddMenu;
        let message = format!(
            "Removed {quantity} x {name}.\n{}\n\n{}",
            format::render_cart(&session.cart, &self.store.currency_symbol),
            format::post_add_menu()
        );
        Turn::reply(session, message)
    }

    fn fallback(&self, mut session: UserSession) -> Turn {
        // Unrecognized stored step: restart rather than re-prompting a step
        // that no longer exists.
        session.step = Step::AskName;
        Turn::reply(
            session,
            "Sorry, I didn't understand that. Send 'hi' to start over.",
        )
    }

    // ---- Shared helpers ---------------------------------------------------

    pub(crate) fn reset_pagination(&self, session: &mut UserSession) {
        session.category_names = self.catalog.category_names();
        session.category_index = 0;
    }

    /// Render the product page for the session's current category, with
    /// the navigation hint.
    pub(crate) fn show_category(&self, session: &UserSession) -> String {
        let Some(category) = session.current_category() else {
            return "No categories are available right now.".to_string();
        };
        let products = self.catalog.available_products(category);
        if products.is_empty() {
            return format!(
                "Nothing in {category} is available right now.\n\nReply 'more' for the next category or 'back' for the previous one."
            );
        }
        format!(
            "Here are products from {category}:\n{}\n\nReply with a product number, 'more' for the next category or 'back' for the previous one.",
            format::product_list(&products, &self.store.currency_symbol)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::types::{Category, Product};

    fn test_catalog() -> Arc<CatalogStore> {
        let mut drinks = Category::new("Drinks");
        drinks.add_product(Product::new("Coca Cola 2L", 39.99, "Soft drink", 10));
        drinks.add_product(Product::new("Sprite 2 Litres", 37.99, "Soft drink", 10));
        drinks.add_product(Product::new("Mazoe Orange Crush 2L", 69.99, "Fruit drink", 10));
        let mut pantry = Category::new("Pantry");
        pantry.add_product(Product::new("Jungle Oats 1kg", 44.99, "Oats", 5));
        let mut household = Category::new("Household");
        household.add_product(Product::new("Surf 5kg", 159.99, "Washing powder", 2));
        Arc::new(CatalogStore::new(vec![drinks, pantry, household]))
    }

    fn engine() -> ConversationEngine {
        ConversationEngine::new(test_catalog(), StoreConfig::default())
    }

    fn named_session(engine: &ConversationEngine) -> UserSession {
        let session = UserSession::new("263770000001");
        let turn = engine.handle(session, "hi");
        engine.handle(turn.session, "jane doe").session
    }

    #[test]
    fn test_greeting_forces_reset_from_any_step() {
        let engine = engine();
        let mut session = named_session(&engine);
        session.step = Step::GetPhone;
        let turn = engine.handle(session, "hie");
        assert_eq!(turn.session.step, Step::SaveName);
        assert!(turn.replies[0].contains("What's your name?"));
        assert!(turn.session.cart.is_empty());
    }

    #[test]
    fn test_save_name_title_cases_and_shows_first_category() {
        let engine = engine();
        let session = UserSession::new("263770000001");
        let turn = engine.handle(session, "hi");
        let turn = engine.handle(turn.session, "jane doe");
        assert_eq!(turn.session.step, Step::ChooseProduct);
        assert_eq!(turn.session.payer_name.as_deref(), Some("Jane Doe"));
        assert_eq!(turn.session.category_index, 0);
        assert!(turn.replies[0].contains("Thanks Jane Doe!"));
        assert!(turn.replies[0].contains("Here are products from Drinks:"));
    }

    #[test]
    fn test_more_visits_every_category_once_and_is_idempotent_at_end() {
        let engine = engine();
        let mut session = named_session(&engine);
        let mut seen = vec![session.current_category().unwrap().to_string()];

        for _ in 0..2 {
            let turn = engine.handle(session, "more");
            session = turn.session;
            seen.push(session.current_category().unwrap().to_string());
        }
        assert_eq!(seen, vec!["Drinks", "Pantry", "Household"]);

        // One past the end: exhaustion message, index and step unchanged.
        let turn = engine.handle(session, "more");
        assert_eq!(turn.session.step, Step::ChooseProduct);
        assert_eq!(turn.session.category_index, 2);
        assert!(turn.replies[0].contains("No more categories"));
    }

    #[test]
    fn test_back_decrements_with_floor_of_zero() {
        let engine = engine();
        let session = named_session(&engine);
        let turn = engine.handle(session, "more");
        let turn = engine.handle(turn.session, "back");
        assert_eq!(turn.session.category_index, 0);
        let turn = engine.handle(turn.session, "back");
        assert_eq!(turn.session.category_index, 0);
        assert_eq!(turn.session.step, Step::ChooseProduct);
    }

    #[test]
    fn test_product_selection_indexes_current_category() {
        let engine = engine();
        let session = named_session(&engine);
        let turn = engine.handle(session, "2");
        assert_eq!(turn.session.step, Step::AskQuantity);
        assert_eq!(
            turn.session.selected_product.as_ref().unwrap().name,
            "Sprite 2 Litres"
        );
    }

    #[test]
    fn test_out_of_range_product_number_reprompts() {
        let engine = engine();
        let session = named_session(&engine);
        let turn = engine.handle(session, "5");
        assert_eq!(turn.session.step, Step::ChooseProduct);
        assert!(turn.replies[0].contains("Invalid product number"));
    }

    #[test]
    fn test_bad_quantity_leaves_step_and_cart_unchanged() {
        let engine = engine();
        let session = named_session(&engine);
        let turn = engine.handle(session, "1");
        let before = turn.session.cart.clone();
        let turn = engine.handle(turn.session, "plenty");
        assert_eq!(turn.session.step, Step::AskQuantity);
        assert_eq!(turn.session.cart, before);
        assert!(turn.replies[0].contains("valid number for quantity"));
    }

    #[test]
    fn test_quantity_adds_to_cart_and_shows_menu() {
        let engine = engine();
        let session = named_session(&engine);
        let turn = engine.handle(session, "1");
        let turn = engine.handle(turn.session, "3");
        assert_eq!(turn.session.step, Step::PostAddMenu);
        assert_eq!(turn.session.cart.lines()[0].quantity, 3);
        assert!(turn.session.selected_product.is_none());
        assert!(turn.replies[0].contains("Item added to your cart."));
    }

    #[test]
    fn test_missing_selection_buffer_routes_back_to_browsing() {
        let engine = engine();
        let mut session = named_session(&engine);
        session.step = Step::AskQuantity;
        session.selected_product = None;
        let turn = engine.handle(session, "2");
        assert_eq!(turn.session.step, Step::ChooseProduct);
        assert!(turn.replies[0].contains("Something went wrong"));
    }

    #[test]
    fn test_clear_cart_from_menu() {
        let engine = engine();
        let session = named_session(&engine);
        let turn = engine.handle(session, "1");
        let turn = engine.handle(turn.session, "2");
        let turn = engine.handle(turn.session, "2");
        assert!(turn.session.cart.is_empty());
        assert_eq!(turn.session.step, Step::PostAddMenu);
        assert!(turn.replies[0].contains("Cart cleared."));
    }

    #[test]
    fn test_remove_single_quantity_line_directly() {
        let engine = engine();
        let session = named_session(&engine);
        let turn = engine.handle(session, "1");
        let turn = engine.handle(turn.session, "1");
        let turn = engine.handle(turn.session, "remove coca cola 2l");
        assert!(turn.session.cart.is_empty());
        assert_eq!(turn.session.step, Step::PostAddMenu);
        assert!(turn.replies[0].contains("removed from your cart"));
    }

    #[test]
    fn test_remove_multi_quantity_line_asks_how_many() {
        let engine = engine();
        let session = named_session(&engine);
        let turn = engine.handle(session, "1");
        let turn = engine.handle(turn.session, "4");
        let turn = engine.handle(turn.session, "remove Coca Cola 2L");
        assert_eq!(turn.session.step, Step::AskRemoveQuantity);
        assert_eq!(
            turn.session.selected_remove_item.as_deref(),
            Some("Coca Cola 2L")
        );

        // Out of range re-prompts without touching the cart.
        let turn = engine.handle(turn.session, "9");
        assert_eq!(turn.session.step, Step::AskRemoveQuantity);
        assert_eq!(turn.session.cart.lines()[0].quantity, 4);

        let turn = engine.handle(turn.session, "3");
        assert_eq!(turn.session.step, Step::PostAddMenu);
        assert_eq!(turn.session.cart.lines()[0].quantity, 1);
        assert!(turn.session.selected_remove_item.is_none());
    }

    #[test]
    fn test_unknown_step_restarts_safely() {
        let engine = engine();
        let json = r#"{"step":"tune_radio","sender":"263770000001"}"#;
        let session: UserSession = serde_json::from_str(json).unwrap();
        let turn = engine.handle(session, "2");
        assert_eq!(turn.session.step, Step::AskName);
        assert!(turn.replies[0].contains("Send 'hi' to start over"));
    }
}
