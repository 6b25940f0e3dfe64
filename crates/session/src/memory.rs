//! In-memory store for tests and local development. Sessions go through
//! the same JSON round-trip as the Redis store so serialization bugs show
//! up in unit tests, not in production.

use dashmap::{DashMap, DashSet};

use async_trait::async_trait;
use grocer_core::order::Order;
use grocer_core::session::UserSession;
use grocer_core::GrocerResult;

use crate::store::SessionStore;

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: DashMap<String, String>,
    orders: DashMap<String, String>,
    orders_by_user: DashMap<String, Vec<String>>,
    seen_messages: DashSet<String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, sender: &str) -> GrocerResult<UserSession> {
        match self.sessions.get(sender) {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(UserSession::new(sender)),
        }
    }

    async fn save(&self, sender: &str, session: &UserSession) -> GrocerResult<()> {
        self.sessions
            .insert(sender.to_string(), serde_json::to_string(session)?);
        Ok(())
    }

    async fn clear(&self, sender: &str) -> GrocerResult<()> {
        self.sessions.remove(sender);
        Ok(())
    }

    async fn mark_message_seen(&self, message_id: &str) -> GrocerResult<bool> {
        Ok(self.seen_messages.insert(message_id.to_string()))
    }

    async fn save_order(&self, order: &Order) -> GrocerResult<()> {
        self.orders
            .insert(order.order_id.clone(), serde_json::to_string(order)?);
        self.orders_by_user
            .entry(order.payer_phone.clone())
            .or_default()
            .push(order.order_id.clone());
        Ok(())
    }

    async fn load_order(&self, order_id: &str) -> GrocerResult<Option<Order>> {
        match self.orders.get(order_id) {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn list_order_ids(&self, sender: &str) -> GrocerResult<Vec<String>> {
        Ok(self
            .orders_by_user
            .get(sender)
            .map(|ids| ids.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use grocer_core::order::{generate_order_id, OrderStatus};
    use grocer_core::session::{CheckoutData, Step};
    use grocer_core::types::ProductSnapshot;

    #[tokio::test]
    async fn test_load_missing_returns_fresh_default() {
        let store = MemorySessionStore::new();
        let session = store.load("263771111111").await.unwrap();
        assert_eq!(session.step, Step::AskName);
        assert!(session.cart.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips_cart() {
        let store = MemorySessionStore::new();
        let mut session = store.load("263771111111").await.unwrap();
        session.step = Step::AskQuantity;
        session
            .cart
            .add(ProductSnapshot::new("Surf 5kg", 159.99, "Washing powder"), 2);
        store.save("263771111111", &session).await.unwrap();

        let restored = store.load("263771111111").await.unwrap();
        assert_eq!(restored, session);
    }

    #[tokio::test]
    async fn test_clear_resets_to_default() {
        let store = MemorySessionStore::new();
        let mut session = store.load("263771111111").await.unwrap();
        session.step = Step::GetArea;
        store.save("263771111111", &session).await.unwrap();
        store.clear("263771111111").await.unwrap();

        let restored = store.load("263771111111").await.unwrap();
        assert_eq!(restored.step, Step::AskName);
    }

    #[tokio::test]
    async fn test_mark_message_seen_dedups() {
        let store = MemorySessionStore::new();
        assert!(store.mark_message_seen("wamid.A1").await.unwrap());
        assert!(!store.mark_message_seen("wamid.A1").await.unwrap());
        assert!(store.mark_message_seen("wamid.A2").await.unwrap());
    }

    #[tokio::test]
    async fn test_order_save_and_index() {
        let store = MemorySessionStore::new();
        let order = Order {
            order_id: generate_order_id(),
            payer_name: "Jane Doe".to_string(),
            payer_phone: "263771111111".to_string(),
            items: Vec::new(),
            checkout: CheckoutData::default(),
            payment_method: "EFT".to_string(),
            total: 0.0,
            created_at: Utc::now(),
            status: OrderStatus::Pending,
        };
        store.save_order(&order).await.unwrap();

        let loaded = store.load_order(&order.order_id).await.unwrap().unwrap();
        assert_eq!(loaded.order_id, order.order_id);

        let ids = store.list_order_ids("263771111111").await.unwrap();
        assert_eq!(ids, vec![order.order_id]);
    }
}
