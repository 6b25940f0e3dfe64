//! Redis-backed session and order store.
//! Key shapes: `user_state:<phone>`, `order:<id>`, `orders:<phone>`,
//! `wamid:<message_id>`.

use redis::AsyncCommands;
use tracing::{info, warn};

use async_trait::async_trait;
use grocer_core::config::RedisConfig;
use grocer_core::order::Order;
use grocer_core::session::UserSession;
use grocer_core::{GrocerError, GrocerResult};

use crate::store::{message_seen_key, order_key, session_key, user_orders_key, SessionStore};

/// Dedup window for provider message ids. Meta redelivers within hours,
/// not days.
const MESSAGE_SEEN_TTL_SECS: u64 = 86_400;

pub struct RedisSessionStore {
    client: redis::Client,
    session_ttl_secs: u64,
    order_ttl_secs: u64,
}

impl RedisSessionStore {
    /// Connect to Redis and verify connectivity with a PING.
    pub async fn connect(config: &RedisConfig) -> GrocerResult<Self> {
        info!(url = %config.url, "Connecting to Redis");

        let client = redis::Client::open(config.url.as_str())
            .map_err(|e| GrocerError::Session(e.to_string()))?;

        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| GrocerError::Session(e.to_string()))?;
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| GrocerError::Session(e.to_string()))?;
        info!(response = %pong, "Redis connection established");

        Ok(Self {
            client,
            session_ttl_secs: config.session_ttl_secs,
            order_ttl_secs: config.order_ttl_secs,
        })
    }

    async fn conn(&self) -> GrocerResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| GrocerError::Session(e.to_string()))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, sender: &str) -> GrocerResult<UserSession> {
        let mut conn = self.conn().await?;
        let data: Option<String> = conn
            .get(session_key(sender))
            .await
            .map_err(|e| GrocerError::Session(e.to_string()))?;

        match data {
            Some(json) => match serde_json::from_str(&json) {
                Ok(session) => {
                    metrics::counter!("session.load.hit").increment(1);
                    Ok(session)
                }
                Err(e) => {
                    // A corrupt session restarts the conversation instead
                    // of wedging the user.
                    warn!(sender = sender, error = %e, "Stored session unreadable, resetting");
                    metrics::counter!("session.load.corrupt").increment(1);
                    Ok(UserSession::new(sender))
                }
            },
            None => {
                metrics::counter!("session.load.miss").increment(1);
                Ok(UserSession::new(sender))
            }
        }
    }

    async fn save(&self, sender: &str, session: &UserSession) -> GrocerResult<()> {
        let json = serde_json::to_string(session)?;
        let mut conn = self.conn().await?;
        conn.set_ex::<_, _, ()>(session_key(sender), &json, self.session_ttl_secs)
            .await
            .map_err(|e| GrocerError::Session(e.to_string()))?;
        Ok(())
    }

    async fn clear(&self, sender: &str) -> GrocerResult<()> {
        let mut conn = self.conn().await?;
        conn.del::<_, ()>(session_key(sender))
            .await
            .map_err(|e| GrocerError::Session(e.to_string()))?;
        Ok(())
    }

    async fn mark_message_seen(&self, message_id: &str) -> GrocerResult<bool> {
        let mut conn = self.conn().await?;
        // SET NX EX — first writer wins, redeliveries see the key.
        let set: Option<String> = redis::cmd("SET")
            .arg(message_seen_key(message_id))
            .arg("1")
            .arg("NX")
            .arg("EX")
            .arg(MESSAGE_SEEN_TTL_SECS)
            .query_async(&mut conn)
            .await
            .map_err(|e| GrocerError::Session(e.to_string()))?;
        Ok(set.is_some())
    }

    async fn save_order(&self, order: &Order) -> GrocerResult<()> {
        let json = serde_json::to_string(order)?;
        let mut conn = self.conn().await?;
        conn.set_ex::<_, _, ()>(order_key(&order.order_id), &json, self.order_ttl_secs)
            .await
            .map_err(|e| GrocerError::Session(e.to_string()))?;
        conn.rpush::<_, _, ()>(user_orders_key(&order.payer_phone), &order.order_id)
            .await
            .map_err(|e| GrocerError::Session(e.to_string()))?;
        metrics::counter!("orders.saved").increment(1);
        Ok(())
    }

    async fn load_order(&self, order_id: &str) -> GrocerResult<Option<Order>> {
        let mut conn = self.conn().await?;
        let data: Option<String> = conn
            .get(order_key(order_id))
            .await
            .map_err(|e| GrocerError::Session(e.to_string()))?;
        match data {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn list_order_ids(&self, sender: &str) -> GrocerResult<Vec<String>> {
        let mut conn = self.conn().await?;
        let ids: Vec<String> = conn
            .lrange(user_orders_key(sender), 0, -1)
            .await
            .map_err(|e| GrocerError::Session(e.to_string()))?;
        Ok(ids)
    }
}
