//! Order sessions persisted in a string key-value store.
//!
//! Each order is stored as JSON under `{key_prefix}{order_number}`, and the
//! most recently saved order number under a separate pointer key.

use crate::error::{OrderError, Result};
use crate::state::OrderState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use srb_core::config::OrderConfig;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// String storage the sessions are kept in, such as browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
    /// Every key currently stored
    fn keys(&self) -> Vec<String>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// A persisted order: its state plus save metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    #[serde(flatten)]
    pub state: OrderState,
    /// When the order was saved
    pub timestamp: DateTime<Utc>,
    /// Save time in epoch milliseconds
    pub last_activity: i64,
}

/// Saves and restores orders in a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    store: S,
    key_prefix: String,
    last_order_key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Session store with the default key layout.
    pub fn new(store: S) -> Self {
        Self::with_config(store, &OrderConfig::default())
    }

    pub fn with_config(store: S, config: &OrderConfig) -> Self {
        Self {
            store,
            key_prefix: config.key_prefix.clone(),
            last_order_key: config.last_order_key.clone(),
        }
    }

    fn key(&self, order_number: &str) -> String {
        format!("{}{}", self.key_prefix, order_number)
    }

    /// Save an order, stamping it with the current time.
    pub fn save(&mut self, state: &OrderState) -> Result<OrderRecord> {
        self.save_at(state, Utc::now())
    }

    /// Save an order stamped with `now`.
    pub fn save_at(&mut self, state: &OrderState, now: DateTime<Utc>) -> Result<OrderRecord> {
        let order_number = state
            .order_number
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or(OrderError::MissingOrderNumber)?
            .to_string();

        let record = OrderRecord {
            state: state.clone(),
            timestamp: now,
            last_activity: now.timestamp_millis(),
        };
        let json = serde_json::to_string(&record)?;

        let key = self.key(&order_number);
        self.store.set(&key, json);
        self.store.set(&self.last_order_key, order_number.clone());
        debug!(order_number = %order_number, step = state.current_step, "order session saved");

        Ok(record)
    }

    /// Load an order.
    pub fn load(&self, order_number: &str) -> Result<OrderRecord> {
        let raw = self
            .store
            .get(&self.key(order_number))
            .ok_or_else(|| OrderError::SessionNotFound(order_number.to_string()))?;

        serde_json::from_str(&raw).map_err(|source| OrderError::CorruptSession {
            order_number: order_number.to_string(),
            source,
        })
    }

    /// Load an order, treating missing and unreadable sessions alike.
    pub fn find(&self, order_number: &str) -> Option<OrderRecord> {
        match self.load(order_number) {
            Ok(record) => Some(record),
            Err(OrderError::SessionNotFound(_)) => None,
            Err(e) => {
                warn!(order_number = %order_number, error = %e, "failed to load order session");
                None
            }
        }
    }

    /// Number of the most recently saved order.
    pub fn last_order_number(&self) -> Option<String> {
        self.store.get(&self.last_order_key)
    }

    /// The most recently saved order, if it can still be read.
    pub fn resume_last(&self) -> Option<OrderRecord> {
        self.last_order_number().and_then(|n| self.find(&n))
    }

    /// Every readable stored order, newest first.
    pub fn all_orders(&self) -> Vec<OrderRecord> {
        let mut orders: Vec<OrderRecord> = self
            .store
            .keys()
            .into_iter()
            .filter(|key| key.starts_with(&self.key_prefix))
            .filter_map(|key| {
                let raw = self.store.get(&key)?;
                match serde_json::from_str::<OrderRecord>(&raw) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        warn!(key = %key, error = %e, "skipping unreadable order session");
                        None
                    }
                }
            })
            .collect();

        orders.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        orders
    }

    /// Delete an order. Returns whether it existed.
    pub fn remove(&mut self, order_number: &str) -> bool {
        let key = self.key(order_number);
        if self.store.get(&key).is_none() {
            return false;
        }

        self.store.remove(&key);
        if self.last_order_number().as_deref() == Some(order_number) {
            self.store.remove(&self.last_order_key);
        }
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::Pricing;
    use crate::validation::FormData;
    use chrono::{Duration, TimeZone};

    fn order(number: &str) -> OrderState {
        let mut state = OrderState::new();
        state.order_number = Some(number.to_string());
        state
    }

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 7, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_save_and_load() {
        let mut sessions = SessionStore::new(MemoryStore::new());
        let mut state = order("SRB-TEST-001");
        state.set_step(2).unwrap();
        state.set_quantity(2, &Pricing::default());
        state.form_data = FormData {
            first_name: Some("Anna".into()),
            ..FormData::default()
        };

        sessions.save_at(&state, base_time()).unwrap();

        let raw = sessions.store().get("order_SRB-TEST-001").unwrap();
        assert!(raw.contains("\"currentStep\":2"));
        assert!(raw.contains("\"lastActivity\""));
        assert_eq!(sessions.last_order_number().as_deref(), Some("SRB-TEST-001"));

        let loaded = sessions.load("SRB-TEST-001").unwrap();
        assert_eq!(loaded.state, state);
        assert_eq!(loaded.state.total_amount, Some(449));
        assert_eq!(loaded.timestamp, base_time());
        assert_eq!(loaded.last_activity, base_time().timestamp_millis());
    }

    #[test]
    fn test_save_requires_order_number() {
        let mut sessions = SessionStore::new(MemoryStore::new());
        assert!(matches!(
            sessions.save(&OrderState::new()),
            Err(OrderError::MissingOrderNumber)
        ));
        assert!(sessions.store().is_empty());
    }

    #[test]
    fn test_missing_session() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(matches!(
            sessions.load("NOPE"),
            Err(OrderError::SessionNotFound(n)) if n == "NOPE"
        ));
        assert!(sessions.find("NOPE").is_none());
    }

    #[test]
    fn test_corrupt_session() {
        let mut store = MemoryStore::new();
        store.set("order_INVALID", "invalid json data".to_string());
        let sessions = SessionStore::new(store);

        assert!(matches!(
            sessions.load("INVALID"),
            Err(OrderError::CorruptSession { .. })
        ));
        assert!(sessions.find("INVALID").is_none());
    }

    #[test]
    fn test_all_orders_newest_first() {
        let mut sessions = SessionStore::new(MemoryStore::new());
        for i in 0..5 {
            let mut state = order(&format!("SRB-{}", i));
            state.current_step = (i % 3) + 1;
            sessions
                .save_at(&state, base_time() + Duration::minutes(i64::from(i)))
                .unwrap();
        }
        sessions
            .store_mut()
            .set("order_BROKEN", "{not json".to_string());

        let orders = sessions.all_orders();
        assert_eq!(orders.len(), 5);
        assert_eq!(orders[0].state.order_number.as_deref(), Some("SRB-4"));
        assert!(orders.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn test_all_orders_empty_store() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(sessions.all_orders().is_empty());
    }

    #[test]
    fn test_remove() {
        let mut sessions = SessionStore::new(MemoryStore::new());
        sessions.save(&order("A")).unwrap();
        sessions.save(&order("B")).unwrap();

        assert!(sessions.remove("A"));
        assert!(!sessions.remove("A"));
        assert_eq!(sessions.last_order_number().as_deref(), Some("B"));

        assert!(sessions.remove("B"));
        assert_eq!(sessions.last_order_number(), None);
        assert!(sessions.store().is_empty());
    }

    #[test]
    fn test_resume_last() {
        let mut sessions = SessionStore::new(MemoryStore::new());
        assert!(sessions.resume_last().is_none());
        sessions.save(&order("SRB-1")).unwrap();
        assert_eq!(
            sessions.resume_last().unwrap().state.order_number.as_deref(),
            Some("SRB-1")
        );
    }

    #[test]
    fn test_custom_key_layout() {
        let config = OrderConfig {
            key_prefix: "srb_".to_string(),
            last_order_key: "srbLast".to_string(),
            ..OrderConfig::default()
        };
        let mut sessions = SessionStore::with_config(MemoryStore::new(), &config);
        sessions.save(&order("X1")).unwrap();
        assert!(sessions.store().get("srb_X1").is_some());
        assert_eq!(sessions.store().get("srbLast").as_deref(), Some("X1"));
    }

    #[test]
    fn test_reads_legacy_session_json() {
        let mut store = MemoryStore::new();
        store.set(
            "order_SRB-250307-1200-ABC123-M7XK2P1C",
            r#"{"quantity":3,"currentStep":2,"formData":{"firstName":"Erik"},
                "orderNumber":"SRB-250307-1200-ABC123-M7XK2P1C","totalAmount":649,
                "sessionId":null,"timestamp":"2025-03-07T12:00:00.000Z","lastActivity":1741348800000}"#
                .to_string(),
        );
        let sessions = SessionStore::new(store);
        let record = sessions.load("SRB-250307-1200-ABC123-M7XK2P1C").unwrap();
        assert_eq!(record.state.quantity, 3);
        assert_eq!(record.state.total_amount, Some(649));
        assert_eq!(record.state.form_data.first_name.as_deref(), Some("Erik"));
        assert_eq!(record.timestamp, base_time());
    }
}
