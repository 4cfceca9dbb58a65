//! In-memory order store.
//!
//! Holds all orders in a thread-safe map and assigns sequential identifiers
//! with an atomic counter, so concurrent create calls never produce
//! duplicate ids. Orders are never mutated after insertion.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{TimeZone, Utc};
use dashmap::DashMap;

use crate::models::{FruitItem, FruitOrder, NewOrderRequest, ORDER_STATUS_PENDING};

/// Thread-safe in-memory store for fruit orders.
///
/// Safe under arbitrary concurrent use: the map supports concurrent
/// reads/writes and the id counter is a single atomic `fetch_add`.
pub struct OrderStore {
    /// Map from order id to stored order
    orders: DashMap<String, FruitOrder>,
    /// Next id to hand out. Starts at 2: the seed order owns `ord-001`,
    /// so the first generated id is `ord-002` and can never collide.
    next_id: AtomicU64,
}

impl OrderStore {
    /// Create a store pre-populated with the seed order `ord-001`
    /// (customer "Alice", Apple x3 and Banana x6).
    pub fn new() -> Self {
        let store = Self {
            orders: DashMap::new(),
            next_id: AtomicU64::new(2),
        };

        let seed = FruitOrder {
            id: "ord-001".to_string(),
            customer_name: "Alice".to_string(),
            items: vec![
                FruitItem {
                    fruit: "Apple".to_string(),
                    quantity: 3,
                },
                FruitItem {
                    fruit: "Banana".to_string(),
                    quantity: 6,
                },
            ],
            status: ORDER_STATUS_PENDING.to_string(),
            created_at: Utc
                .with_ymd_and_hms(2025, 1, 10, 9, 30, 0)
                .single()
                .expect("valid seed timestamp"),
        };
        store.orders.insert(seed.id.clone(), seed);

        store
    }

    /// Add a new order to the store and return the stored value.
    ///
    /// No validation happens here; callers must have validated the request.
    /// The id counter is incremented exactly once per call.
    pub fn add(&self, new_order: NewOrderRequest) -> FruitOrder {
        let order = FruitOrder {
            id: self.generate_id(),
            customer_name: new_order.customer_name,
            items: new_order.items,
            status: ORDER_STATUS_PENDING.to_string(),
            created_at: Utc::now(),
        };

        self.orders.insert(order.id.clone(), order.clone());
        order
    }

    /// Look up an order by exact id.
    pub fn get(&self, order_id: &str) -> Option<FruitOrder> {
        self.orders.get(order_id).map(|entry| entry.value().clone())
    }

    /// Return a page of orders sorted ascending by creation time.
    ///
    /// Ties on `created_at` are broken by id, which matches insertion order
    /// since ids are sequential. Never errors: an out-of-range offset just
    /// yields an empty vec.
    pub fn get_paged(&self, offset: usize, limit: usize) -> Vec<FruitOrder> {
        let mut all: Vec<FruitOrder> = self
            .orders
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        all.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        all.into_iter().skip(offset).take(limit).collect()
    }

    /// Current number of stored orders, evaluated at call time.
    pub fn total(&self) -> usize {
        self.orders.len()
    }

    /// Generate the next order id: fixed prefix + zero-padded counter,
    /// minimum 3 digits (`ord-002`, `ord-047`, `ord-1234`).
    fn generate_id(&self) -> String {
        let next = self.next_id.fetch_add(1, Ordering::SeqCst);
        format!("ord-{:03}", next)
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn new_order(customer: &str) -> NewOrderRequest {
        NewOrderRequest {
            customer_name: customer.to_string(),
            items: vec![FruitItem {
                fruit: "Apple".to_string(),
                quantity: 1,
            }],
        }
    }

    #[test]
    fn test_store_starts_with_seed_order() {
        let store = OrderStore::new();
        assert_eq!(store.total(), 1);

        let seed = store.get("ord-001").expect("seed order must exist");
        assert_eq!(seed.customer_name, "Alice");
        assert_eq!(seed.status, "Pending");
        assert_eq!(seed.items.len(), 2);
        assert_eq!(seed.items[0].fruit, "Apple");
        assert_eq!(seed.items[0].quantity, 3);
        assert_eq!(seed.items[1].fruit, "Banana");
        assert_eq!(seed.items[1].quantity, 6);
        assert_eq!(
            seed.created_at,
            Utc.with_ymd_and_hms(2025, 1, 10, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_generated_ids_skip_the_seed() {
        let store = OrderStore::new();
        let first = store.add(new_order("Bob"));
        let second = store.add(new_order("Carol"));
        assert_eq!(first.id, "ord-002");
        assert_eq!(second.id, "ord-003");
        assert_eq!(store.total(), 3);
    }

    #[test]
    fn test_add_copies_items_verbatim_and_sets_pending() {
        let store = OrderStore::new();
        let order = store.add(NewOrderRequest {
            customer_name: "Bob".to_string(),
            items: vec![
                FruitItem {
                    fruit: "Mango".to_string(),
                    quantity: 4,
                },
                FruitItem {
                    fruit: "Kiwi".to_string(),
                    quantity: 1,
                },
            ],
        });

        assert_eq!(order.status, "Pending");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].fruit, "Mango");
        assert_eq!(order.items[1].quantity, 1);

        // The stored value matches what add() returned.
        let stored = store.get(&order.id).unwrap();
        assert_eq!(stored, order);
    }

    #[test]
    fn test_get_is_exact_match_only() {
        let store = OrderStore::new();
        assert!(store.get("ord-001").is_some());
        assert!(store.get("ord").is_none());
        assert!(store.get("ord-0011").is_none());
        assert!(store.get("").is_none());
    }

    #[test]
    fn test_get_paged_sorts_by_created_at_ascending() {
        let store = OrderStore::new();
        store.add(new_order("Bob"));
        store.add(new_order("Carol"));
        store.add(new_order("Dave"));

        let page = store.get_paged(0, 100);
        assert_eq!(page.len(), 4);
        // Seed has a fixed 2025-01-10 timestamp, so it sorts first.
        assert_eq!(page[0].id, "ord-001");
        for window in page.windows(2) {
            assert!(window[0].created_at <= window[1].created_at);
        }
    }

    #[test]
    fn test_get_paged_respects_offset_and_limit() {
        let store = OrderStore::new();
        for i in 0..9 {
            store.add(new_order(&format!("customer-{}", i)));
        }

        assert_eq!(store.get_paged(0, 5).len(), 5);
        assert_eq!(store.get_paged(8, 5).len(), 2);
        assert_eq!(store.get_paged(10, 5), vec![]);
        assert_eq!(store.get_paged(1000, 5), vec![]);
        assert!(store.get_paged(0, 0).is_empty());
    }

    #[test]
    fn test_concurrent_adds_produce_distinct_ids() {
        let store = Arc::new(OrderStore::new());
        let mut handles = Vec::new();

        for t in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                let mut ids = Vec::new();
                for i in 0..50 {
                    let order = store.add(new_order(&format!("c-{}-{}", t, i)));
                    ids.push(order.id);
                }
                ids
            }));
        }

        let mut all_ids = HashSet::new();
        all_ids.insert("ord-001".to_string());
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(all_ids.insert(id), "duplicate id generated");
            }
        }

        assert_eq!(all_ids.len(), 8 * 50 + 1);
        assert_eq!(store.total(), 8 * 50 + 1);
    }
}
