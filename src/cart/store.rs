//! Cart State Management
//!
//! The cart store is the only mutable shared state in the service. It owns
//! every cart for the lifetime of the process; nothing is persisted.

use super::models::CartItem;
use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;

/// Shared handle to the cart store, safe to pass between request tasks
pub type SharedCartStore = Arc<CartStore>;

/// A rejected cart mutation. The store is left untouched whenever one of
/// these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("user_id must not be empty")]
    EmptyUserId,

    #[error("quantity must be positive, got {0}")]
    InvalidQuantity(i32),
}

/// In-memory store of all carts, keyed by user id.
///
/// DashMap shards the key space, so operations on one user's cart are
/// serialized against each other while unrelated users never contend.
/// Each cart holds its items in insertion order.
pub struct CartStore {
    carts: DashMap<String, Vec<CartItem>>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Creates a store with no carts
    pub fn new() -> Self {
        Self {
            carts: DashMap::new(),
        }
    }

    /// Appends `item` to the cart for `user_id`, creating the cart on first
    /// use.
    ///
    /// The entry guard holds the shard lock for the whole read-modify-write,
    /// so concurrent adds for the same user cannot lose updates and a
    /// concurrent read never observes a half-applied append.
    pub fn add_item(&self, user_id: &str, item: CartItem) -> Result<(), CartError> {
        if user_id.is_empty() {
            return Err(CartError::EmptyUserId);
        }
        if item.quantity <= 0 {
            return Err(CartError::InvalidQuantity(item.quantity));
        }

        self.carts.entry(user_id.to_owned()).or_default().push(item);
        Ok(())
    }

    /// Drops the cart for `user_id`. Removing an absent cart is a no-op.
    pub fn empty_cart(&self, user_id: &str) {
        self.carts.remove(user_id);
    }

    /// Returns a snapshot of the cart for `user_id`, or an empty list when
    /// the user has no cart. Absence is not an error.
    pub fn get_cart(&self, user_id: &str) -> Vec<CartItem> {
        self.carts
            .get(user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Number of carts currently held
    pub fn cart_count(&self) -> usize {
        self.carts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, quantity: i32) -> CartItem {
        CartItem {
            product_id: product_id.into(),
            quantity,
        }
    }

    #[test]
    fn add_item_preserves_insertion_order() {
        let store = CartStore::new();
        store.add_item("1", item("aaa", 1)).unwrap();
        store.add_item("1", item("bbb", 2)).unwrap();
        store.add_item("1", item("ccc", 3)).unwrap();

        let products: Vec<String> = store
            .get_cart("1")
            .into_iter()
            .map(|i| i.product_id)
            .collect();
        assert_eq!(products, ["aaa", "bbb", "ccc"]);
    }

    #[test]
    fn repeated_product_ids_stay_distinct_lines() {
        let store = CartStore::new();
        store.add_item("1", item("www", 2)).unwrap();
        store.add_item("1", item("www", 2)).unwrap();

        assert_eq!(store.get_cart("1"), [item("www", 2), item("www", 2)]);
    }

    #[test]
    fn get_cart_for_unknown_user_is_empty_not_an_error() {
        let store = CartStore::new();
        assert!(store.get_cart("nobody").is_empty());
    }

    #[test]
    fn get_cart_returns_a_snapshot() {
        let store = CartStore::new();
        store.add_item("1", item("aaa", 1)).unwrap();

        let mut snapshot = store.get_cart("1");
        snapshot.push(item("bbb", 9));

        assert_eq!(store.get_cart("1"), [item("aaa", 1)]);
    }

    #[test]
    fn invalid_quantity_is_rejected_and_store_unchanged() {
        let store = CartStore::new();
        store.add_item("1", item("aaa", 1)).unwrap();

        assert_eq!(
            store.add_item("1", item("bbb", 0)),
            Err(CartError::InvalidQuantity(0))
        );
        assert_eq!(
            store.add_item("1", item("bbb", -4)),
            Err(CartError::InvalidQuantity(-4))
        );

        assert_eq!(store.get_cart("1"), [item("aaa", 1)]);
        assert_eq!(store.cart_count(), 1);
    }

    #[test]
    fn empty_user_id_is_rejected() {
        let store = CartStore::new();
        assert_eq!(store.add_item("", item("aaa", 1)), Err(CartError::EmptyUserId));
        assert_eq!(store.cart_count(), 0);
    }

    #[test]
    fn empty_cart_removes_only_the_addressed_cart() {
        let store = CartStore::new();
        store.add_item("1", item("aaa", 1)).unwrap();
        store.add_item("2", item("bbb", 2)).unwrap();

        store.empty_cart("1");

        assert!(store.get_cart("1").is_empty());
        assert_eq!(store.get_cart("2"), [item("bbb", 2)]);
    }

    #[test]
    fn empty_cart_for_unknown_user_is_a_noop() {
        let store = CartStore::new();
        store.add_item("1", item("aaa", 1)).unwrap();

        store.empty_cart("99");

        assert_eq!(store.cart_count(), 1);
        assert_eq!(store.get_cart("1"), [item("aaa", 1)]);
    }

    #[test]
    fn concurrent_adds_for_one_user_lose_no_updates() {
        const THREADS: usize = 8;
        const ADDS_PER_THREAD: usize = 50;

        let store = Arc::new(CartStore::new());

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for n in 0..ADDS_PER_THREAD {
                        store
                            .add_item("1", CartItem {
                                product_id: format!("p-{}-{}", t, n),
                                quantity: 1,
                            })
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.get_cart("1").len(), THREADS * ADDS_PER_THREAD);
    }
}
