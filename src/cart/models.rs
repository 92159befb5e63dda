//! Cart Service Wire Models
//!
//! Request and response shapes of the `shop.CartService` contract. Field
//! names are carried on the wire as-is (the contract preserves case).

use serde::{Deserialize, Serialize};

/// One line in a user's cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Product identifier
    pub product_id: String,

    /// Number of units; must be positive to be accepted
    pub quantity: i32,
}

/// Parameters for the AddItem method
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    /// Owner of the cart to add to
    pub user_id: String,

    /// The line to append
    pub item: CartItem,
}

/// Parameters for the EmptyCart and GetCart methods
#[derive(Debug, Deserialize)]
pub struct UserIdRequest {
    /// Owner of the cart being addressed
    pub user_id: String,
}

/// Response body for the GetCart method
#[derive(Debug, Serialize)]
pub struct Cart {
    /// Owner of this cart
    pub user_id: String,

    /// Current lines, in insertion order
    pub items: Vec<CartItem>,
}
