//! Write-once order snapshot taken at payment-method selection.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::session::CheckoutData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub payer_name: String,
    pub payer_phone: String,
    pub items: Vec<CartLine>,
    pub checkout: CheckoutData,
    /// Payment is a user-selected label, settled manually out-of-band.
    pub payment_method: String,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

const ORDER_ID_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ORDER_ID_LEN: usize = 8;

/// Random 8-character uppercase alphanumeric order code, quoted back to the
/// customer and used as the payment reference.
pub fn generate_order_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ORDER_ID_LEN)
        .map(|_| ORDER_ID_CHARS[rng.gen_range(0..ORDER_ID_CHARS.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_shape() {
        let id = generate_order_id();
        assert_eq!(id.len(), 8);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_order_ids_are_not_constant() {
        let ids: std::collections::HashSet<String> =
            (0..32).map(|_| generate_order_id()).collect();
        assert!(ids.len() > 1);
    }
}
