//! The unit of persistence: everything needed to resume a conversation
//! across stateless webhook calls.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::types::{DeliveryArea, ProductSnapshot};

/// Conversation steps. Persisted as snake_case strings; anything
/// unrecognized in storage deserializes to `Unknown` rather than failing,
/// so a stale session from an older deployment can never crash a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    AskName,
    SaveName,
    ChooseProduct,
    AskQuantity,
    PostAddMenu,
    AskRemoveQuantity,
    GetArea,
    AskCheckout,
    ChooseDeliveryOrPickup,
    GetReceiverName,
    GetAddress,
    GetId,
    GetPhone,
    GetReceiverNamePickup,
    GetIdPickup,
    ConfirmDetails,
    AwaitPaymentSelection,
    AskPlaceAnotherOrder,
    #[serde(other)]
    Unknown,
}

impl Default for Step {
    fn default() -> Self {
        Step::AskName
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    Delivery,
    Pickup,
}

/// Checkout fields, filled one per step. A "no" at the confirmation echo
/// clears the receiver fields and the sub-sequence restarts at the
/// receiver name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutData {
    pub delivery_area: Option<String>,
    pub delivery_fee: Option<f64>,
    pub delivery_method: Option<DeliveryMethod>,
    pub receiver_name: Option<String>,
    pub receiver_id: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl CheckoutData {
    /// Forward-clear for the "no" branch at confirm_details.
    pub fn clear_receiver_fields(&mut self) {
        self.receiver_name = None;
        self.receiver_id = None;
        self.address = None;
        self.phone = None;
    }

    /// Clear the delivery selection when the user backs out of checkout.
    pub fn clear_delivery(&mut self) {
        self.delivery_area = None;
        self.delivery_fee = None;
        self.delivery_method = None;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    #[serde(default)]
    pub step: Step,
    pub sender: String,
    #[serde(default)]
    pub payer_name: Option<String>,
    #[serde(default)]
    pub cart: Cart,
    #[serde(default)]
    pub checkout: CheckoutData,
    /// Category pagination: names in catalog order plus the cursor.
    #[serde(default)]
    pub category_names: Vec<String>,
    #[serde(default)]
    pub category_index: usize,
    #[serde(default)]
    pub selected_product: Option<ProductSnapshot>,
    /// Delivery-area table attached when the user views the cart, so the
    /// area step validates against exactly what was shown.
    #[serde(default)]
    pub delivery_areas: Option<Vec<DeliveryArea>>,
    #[serde(default)]
    pub selected_remove_item: Option<String>,
}

impl UserSession {
    /// Fresh session at the initial step.
    pub fn new(sender: &str) -> Self {
        Self {
            step: Step::AskName,
            sender: sender.to_string(),
            payer_name: None,
            cart: Cart::new(),
            checkout: CheckoutData::default(),
            category_names: Vec::new(),
            category_index: 0,
            selected_product: None,
            delivery_areas: None,
            selected_remove_item: None,
        }
    }

    /// Category currently on display, with the cursor clamped to the last
    /// valid entry so a stale index can never select outside the list.
    pub fn current_category(&self) -> Option<&str> {
        if self.category_names.is_empty() {
            return None;
        }
        let idx = self.category_index.min(self.category_names.len() - 1);
        Some(self.category_names[idx].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductSnapshot;

    #[test]
    fn test_session_round_trip() {
        let mut session = UserSession::new("263771234567");
        session.step = Step::PostAddMenu;
        session.payer_name = Some("Jane Doe".to_string());
        session
            .cart
            .add(ProductSnapshot::new("Coca Cola 2L", 39.99, "Soft drink"), 2);
        session.checkout.delivery_area = Some("Ruwa".to_string());
        session.checkout.delivery_fee = Some(300.0);
        session.category_names = vec!["Pantry".to_string(), "Beverages".to_string()];
        session.category_index = 1;

        let json = serde_json::to_string(&session).unwrap();
        let restored: UserSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, restored);
    }

    #[test]
    fn test_unknown_step_deserializes_to_fallback() {
        let json = r#"{"step":"pick_color","sender":"263770000000"}"#;
        let session: UserSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.step, Step::Unknown);
    }

    #[test]
    fn test_current_category_clamps_stale_index() {
        let mut session = UserSession::new("263770000000");
        session.category_names = vec!["Pantry".to_string(), "Beverages".to_string()];
        session.category_index = 9;
        assert_eq!(session.current_category(), Some("Beverages"));
    }

    #[test]
    fn test_clear_receiver_fields_keeps_delivery() {
        let mut checkout = CheckoutData {
            delivery_area: Some("Harare".to_string()),
            delivery_fee: Some(240.0),
            delivery_method: Some(DeliveryMethod::Delivery),
            receiver_name: Some("T. Moyo".to_string()),
            receiver_id: Some("63-123456A70".to_string()),
            address: Some("12 Samora Machel Ave".to_string()),
            phone: Some("263719999999".to_string()),
        };
        checkout.clear_receiver_fields();
        assert_eq!(checkout.delivery_area.as_deref(), Some("Harare"));
        assert!(checkout.receiver_name.is_none());
        assert!(checkout.address.is_none());
        assert!(checkout.receiver_id.is_none());
        assert!(checkout.phone.is_none());
    }
}
