//! Checkout half of the conversation: delivery area, receiver details,
//! confirmation, and payment finalization.

use chrono::Utc;

use grocer_core::order::{generate_order_id, Order, OrderStatus};
use grocer_core::session::{DeliveryMethod, Step, UserSession};
use grocer_core::types::{DeliveryArea, ProductSnapshot};

use crate::engine::{ConversationEngine, Turn};
use crate::format;

/// Name prefix for the synthetic cart line carrying the delivery fee.
pub(crate) const DELIVERY_LINE_PREFIX: &str = "Delivery to";

/// Flat delivery fees by area. Harare is special-cased in the flow: it is
/// the only area offering pickup.
pub(crate) fn delivery_area_table() -> Vec<DeliveryArea> {
    vec![
        DeliveryArea::new("Harare", 240.0),
        DeliveryArea::new("Chitungwiza", 300.0),
        DeliveryArea::new("Mabvuku", 300.0),
        DeliveryArea::new("Ruwa", 300.0),
        DeliveryArea::new("Domboshava", 250.0),
        DeliveryArea::new("Southlea", 300.0),
        DeliveryArea::new("Southview", 300.0),
        DeliveryArea::new("Epworth", 300.0),
        DeliveryArea::new("Mazoe", 300.0),
        DeliveryArea::new("Chinhoyi", 350.0),
        DeliveryArea::new("Banket", 350.0),
        DeliveryArea::new("Rusape", 400.0),
        DeliveryArea::new("Dema", 300.0),
    ]
}

impl ConversationEngine {
    // ---- Delivery area ----------------------------------------------------

    pub(crate) fn view_cart(&self, mut session: UserSession) -> Turn {
        // The table shown is the table validated against next turn.
        let areas = session
            .delivery_areas
            .get_or_insert_with(delivery_area_table)
            .clone();
        session.step = Step::GetArea;
        let message = format!(
            "{}\n\nPlease select your delivery area:\n{}",
            format::render_cart(&session.cart, &self.store.currency_symbol),
            format::delivery_area_list(&areas, &self.store.currency_symbol)
        );
        Turn::reply(session, message)
    }

    pub(crate) fn get_area(&self, mut session: UserSession, text: &str) -> Turn {
        let areas = session
            .delivery_areas
            .get_or_insert_with(delivery_area_table)
            .clone();

        if text.eq_ignore_ascii_case("harare") {
            session.step = Step::ChooseDeliveryOrPickup;
            return Turn::reply(session, "Would you like to *pick up* or *have it delivered*?");
        }

        let Some(area) = areas.iter().find(|a| a.name.eq_ignore_ascii_case(text)) else {
            let message = format!(
                "Invalid area. Please choose from:\n{}",
                format::delivery_area_list(&areas, &self.store.currency_symbol)
            );
            return Turn::reply(session, message);
        };

        self.apply_delivery_area(&mut session, area.clone());
        session.step = Step::AskCheckout;
        let message = format!(
            "{}\n\nWould you like to checkout? (yes/no)",
            format::render_cart(&session.cart, &self.store.currency_symbol)
        );
        Turn::reply(session, message)
    }

    pub(crate) fn choose_delivery_or_pickup(
        &self,
        mut session: UserSession,
        lowered: &str,
    ) -> Turn {
        match lowered {
            "pickup" | "pick up" => {
                session.checkout.delivery_method = Some(DeliveryMethod::Pickup);
                session.checkout.delivery_area = Some("Harare".to_string());
                session.checkout.delivery_fee = None;
                session.step = Step::GetReceiverNamePickup;
                Turn::reply(session, "What's the full name of the receiver?")
            }
            "delivery" | "deliver" => {
                let area = session
                    .delivery_areas
                    .get_or_insert_with(delivery_area_table)
                    .iter()
                    .find(|a| a.name == "Harare")
                    .cloned()
                    .unwrap_or_else(|| DeliveryArea::new("Harare", 240.0));
                self.apply_delivery_area(&mut session, area);
                session.step = Step::GetReceiverName;
                Turn::reply(session, "What's the full name of the receiver?")
            }
            _ => Turn::reply(session, "Please reply with *pickup* or *delivery*."),
        }
    }

    fn apply_delivery_area(&self, session: &mut UserSession, area: DeliveryArea) {
        session.checkout.delivery_area = Some(area.name.clone());
        session.checkout.delivery_fee = Some(area.fee);
        session.checkout.delivery_method = Some(DeliveryMethod::Delivery);
        // Replace rather than stack if the user re-picks an area.
        session.cart.remove_prefix(DELIVERY_LINE_PREFIX);
        session.cart.add(
            ProductSnapshot::new(
                &format!("{DELIVERY_LINE_PREFIX} {}", area.name),
                area.fee,
                "Delivery fee",
            ),
            1,
        );
    }

    pub(crate) fn ask_checkout(&self, mut session: UserSession, lowered: &str) -> Turn {
        match lowered {
            "yes" | "y" => {
                session.step = Step::GetReceiverName;
                Turn::reply(
                    session,
                    "Please enter the receiver's full name as on national ID.",
                )
            }
            "no" | "n" => {
                session.cart.remove_prefix(DELIVERY_LINE_PREFIX);
                session.checkout.clear_delivery();
                session.step = Step::PostAddMenu;
                Turn::reply(session, format::post_add_menu().to_string())
            }
            _ => Turn::reply(session, "Please respond with 'yes' or 'no'."),
        }
    }

    // ---- Receiver details (delivery) --------------------------------------

    pub(crate) fn get_receiver_name(&self, mut session: UserSession, text: &str) -> Turn {
        if text.is_empty() {
            return Turn::reply(session, "Please enter the receiver's full name.");
        }
        session.checkout.receiver_name = Some(text.to_string());
        session.step = Step::GetAddress;
        Turn::reply(session, "Enter the delivery address.")
    }

    pub(crate) fn get_address(&self, mut session: UserSession, text: &str) -> Turn {
        if text.is_empty() {
            return Turn::reply(session, "Please enter the delivery address.");
        }
        session.checkout.address = Some(text.to_string());
        session.step = Step::GetId;
        Turn::reply(session, "Enter the receiver's ID number.")
    }

    pub(crate) fn get_id(&self, mut session: UserSession, text: &str) -> Turn {
        if text.is_empty() {
            return Turn::reply(session, "Please enter the receiver's ID number.");
        }
        session.checkout.receiver_id = Some(text.to_string());
        session.step = Step::GetPhone;
        Turn::reply(session, "Enter the receiver's phone number.")
    }

    pub(crate) fn get_phone(&self, mut session: UserSession, text: &str) -> Turn {
        if text.is_empty() {
            return Turn::reply(session, "Please enter the receiver's phone number.");
        }
        session.checkout.phone = Some(text.to_string());
        session.step = Step::ConfirmDetails;
        let message = format::confirm_echo(&session.checkout);
        Turn::reply(session, message)
    }

    // ---- Receiver details (pickup) ----------------------------------------

    pub(crate) fn get_receiver_name_pickup(&self, mut session: UserSession, text: &str) -> Turn {
        if text.is_empty() {
            return Turn::reply(session, "Please enter the receiver's full name.");
        }
        session.checkout.receiver_name = Some(text.to_string());
        session.step = Step::GetIdPickup;
        Turn::reply(session, "Please provide the receiver's ID number.")
    }

    pub(crate) fn get_id_pickup(&self, mut session: UserSession, text: &str) -> Turn {
        if text.is_empty() {
            return Turn::reply(session, "Please enter the receiver's ID number.");
        }
        session.checkout.receiver_id = Some(text.to_string());
        session.step = Step::AwaitPaymentSelection;
        let pickup_info = format!(
            "Thanks! Please collect your order at:\n{}\n\nNow let's choose a payment method.",
            self.store.pickup_address
        );
        Turn::with_replies(session, vec![pickup_info, format::payment_menu().to_string()])
    }

    // ---- Confirmation and payment -----------------------------------------

    pub(crate) fn confirm_details(&self, mut session: UserSession, lowered: &str) -> Turn {
        match lowered {
            "yes" | "y" => {
                session.step = Step::AwaitPaymentSelection;
                Turn::reply(session, format::payment_menu().to_string())
            }
            "no" | "n" => {
                // Full restart of the receiver sub-sequence, not a per-field edit.
                session.checkout.clear_receiver_fields();
                session.step = Step::GetReceiverName;
                Turn::reply(
                    session,
                    "Let's start again. What's the full name of the receiver?",
                )
            }
            _ => Turn::reply(session, "Please respond with 'yes' or 'no'."),
        }
    }

    pub(crate) fn payment_selection(&self, mut session: UserSession, text: &str) -> Turn {
        let order_id = generate_order_id();
        let Some(payment_text) = format::payment_instructions(text, &order_id) else {
            return Turn::reply(
                session,
                "Invalid selection. Please enter a number between 1 and 5.",
            );
        };

        let order = Order {
            order_id,
            payer_name: session
                .payer_name
                .clone()
                .unwrap_or_else(|| "Customer".to_string()),
            payer_phone: session.sender.clone(),
            items: session.cart.lines().to_vec(),
            checkout: session.checkout.clone(),
            payment_method: payment_text,
            total: session.cart.total(),
            created_at: Utc::now(),
            status: OrderStatus::Pending,
        };

        let owner_alert = format::owner_notification(&order, &self.store.currency_symbol);
        let confirmation = format::order_confirmation(&order, &self.store.currency_symbol);

        session.cart.clear();
        session.step = Step::AskPlaceAnotherOrder;

        Turn {
            session,
            replies: vec![confirmation],
            owner_alert: Some(owner_alert),
            order: Some(order),
        }
    }

    pub(crate) fn place_another_order(&self, mut session: UserSession, lowered: &str) -> Turn {
        match lowered {
            "yes" | "y" => {
                self.reset_pagination(&mut session);
                session.step = Step::ChooseProduct;
                let page = self.show_category(&session);
                Turn::reply(session, format!("Great! {page}"))
            }
            "no" | "n" => {
                session.step = Step::AskName;
                Turn::reply(
                    session,
                    "Thank you for shopping with us! Have a good day! \u{1F60A}",
                )
            }
            _ => Turn::reply(session, "Please respond with 'yes' or 'no'."),
        }
    }
}
