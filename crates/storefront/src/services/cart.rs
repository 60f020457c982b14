//! Cart state backed by visitor storage.
//!
//! The cart is a flat list of [`CartItem`]s stored as one JSON value under
//! [`CART_ITEMS_KEY`]. There is no incremental update: every mutation writes
//! the whole remaining list back.

use sharp_style_core::{CartItem, CartItemId, Price};
use tracing::instrument;

use crate::storage::{CART_ITEMS_KEY, KeyValueStore, StorageError};

/// Load the visitor's cart on first mount.
///
/// - No storage medium: empty cart.
/// - Nothing stored yet: the demo item, written back immediately.
/// - Stored but unreadable or malformed: empty cart.
///
/// Never fails; problems are logged and degrade to an empty cart.
#[instrument(skip(store))]
pub async fn load_initial_cart<S: KeyValueStore>(store: Option<&S>) -> Vec<CartItem> {
    let Some(store) = store else {
        return Vec::new();
    };

    match store.get(CART_ITEMS_KEY).await {
        Ok(Some(raw)) if !raw.is_empty() => decode_cart(&raw),
        Ok(_) => {
            let demo = vec![CartItem::demo()];
            if let Err(e) = persist_cart(store, &demo).await {
                tracing::warn!(error = %e, "Failed to persist demo cart");
            }
            demo
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read stored cart");
            Vec::new()
        }
    }
}

/// Remove the line with `id` and persist the remaining list.
///
/// Removing an id that is not in the cart returns the cart unchanged (it is
/// still written back).
///
/// # Errors
///
/// Returns `StorageError` if the store rejects the write.
#[instrument(skip_all, fields(id = %id))]
pub async fn remove_item<S: KeyValueStore>(
    store: Option<&S>,
    items: &[CartItem],
    id: CartItemId,
) -> Result<Vec<CartItem>, StorageError> {
    let remaining: Vec<CartItem> = items.iter().filter(|item| item.id != id).cloned().collect();

    if let Some(store) = store {
        persist_cart(store, &remaining).await?;
    }

    Ok(remaining)
}

/// Sum of `unit_price × quantity` over all lines.
#[must_use]
pub fn compute_subtotal(items: &[CartItem]) -> Price {
    items.iter().map(CartItem::line_total).sum()
}

/// Total number of units across all lines.
#[must_use]
pub fn item_count(items: &[CartItem]) -> u32 {
    items.iter().map(|item| item.quantity).sum()
}

/// Parse a stored cart, falling back to empty on malformed data.
#[must_use]
pub fn decode_cart(raw: &str) -> Vec<CartItem> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Stored cart is malformed, starting empty");
        Vec::new()
    })
}

/// Serialize a cart for storage.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_cart(items: &[CartItem]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(items)?)
}

async fn persist_cart<S: KeyValueStore>(store: &S, items: &[CartItem]) -> Result<(), StorageError> {
    store.set(CART_ITEMS_KEY, encode_cart(items)?).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::storage::testing::ReadOnlyStorage;

    fn item(id: i32, price: i64, quantity: u32) -> CartItem {
        CartItem {
            id: CartItemId::new(id),
            name: format!("Item {id}"),
            unit_price: Price::from_units(price),
            quantity,
            image_ref: String::new(),
        }
    }

    #[tokio::test]
    async fn test_load_seeds_demo_item_when_nothing_stored() {
        let store = MemoryStorage::new();
        let cart = load_initial_cart(Some(&store)).await;

        assert_eq!(cart, vec![CartItem::demo()]);
        let stored = store.peek(CART_ITEMS_KEY).unwrap();
        assert_eq!(decode_cart(&stored), cart);
    }

    #[tokio::test]
    async fn test_load_without_storage_is_empty() {
        let cart = load_initial_cart::<MemoryStorage>(None).await;
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_load_reads_stored_cart() {
        let stored = vec![item(3, 100, 2), item(5, 50, 1)];
        let store = MemoryStorage::with_entry(CART_ITEMS_KEY, &encode_cart(&stored).unwrap());

        assert_eq!(load_initial_cart(Some(&store)).await, stored);
    }

    #[tokio::test]
    async fn test_load_keeps_emptied_cart_empty() {
        let store = MemoryStorage::with_entry(CART_ITEMS_KEY, "[]");
        assert!(load_initial_cart(Some(&store)).await.is_empty());
    }

    #[tokio::test]
    async fn test_load_malformed_json_is_empty() {
        let store = MemoryStorage::with_entry(CART_ITEMS_KEY, "{not json");
        assert!(load_initial_cart(Some(&store)).await.is_empty());
    }

    #[tokio::test]
    async fn test_load_demo_survives_write_failure() {
        let store = ReadOnlyStorage::default();
        assert_eq!(load_initial_cart(Some(&store)).await, vec![CartItem::demo()]);
    }

    #[tokio::test]
    async fn test_remove_item_persists_remaining() {
        let store = MemoryStorage::new();
        let cart = vec![item(1, 10, 1), item(2, 20, 1), item(3, 30, 1)];

        let remaining = remove_item(Some(&store), &cart, CartItemId::new(2))
            .await
            .unwrap();

        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|i| i.id != CartItemId::new(2)));
        let stored = decode_cart(&store.peek(CART_ITEMS_KEY).unwrap());
        assert_eq!(stored, remaining);
    }

    #[tokio::test]
    async fn test_remove_missing_id_is_noop() {
        let store = MemoryStorage::new();
        let cart = vec![item(1, 10, 1), item(2, 20, 1)];

        let once = remove_item(Some(&store), &cart, CartItemId::new(9))
            .await
            .unwrap();
        assert_eq!(once, cart);

        let twice = remove_item(Some(&store), &once, CartItemId::new(9))
            .await
            .unwrap();
        assert_eq!(twice, cart);
    }

    #[tokio::test]
    async fn test_remove_propagates_write_failure() {
        let store = ReadOnlyStorage::default();
        let cart = vec![item(1, 10, 1)];
        let result = remove_item(Some(&store), &cart, CartItemId::new(1)).await;
        assert!(matches!(result, Err(StorageError::WriteRejected(_))));
    }

    #[tokio::test]
    async fn test_remove_without_storage_still_filters() {
        let cart = vec![item(1, 10, 1), item(2, 20, 1)];
        let remaining = remove_item::<MemoryStorage>(None, &cart, CartItemId::new(1))
            .await
            .unwrap();
        assert_eq!(remaining, vec![item(2, 20, 1)]);
    }

    #[test]
    fn test_compute_subtotal() {
        assert_eq!(compute_subtotal(&[]), Price::ZERO);

        let cart = vec![item(1, 990, 1), item(2, 275, 3), item(3, 5, 0)];
        assert_eq!(compute_subtotal(&cart), Price::from_units(990 + 275 * 3));
    }

    #[test]
    fn test_item_count() {
        let cart = vec![item(1, 990, 2), item(2, 275, 3)];
        assert_eq!(item_count(&cart), 5);
        assert_eq!(item_count(&[]), 0);
    }

    #[test]
    fn test_cart_json_roundtrip() {
        let cart = vec![CartItem::demo(), item(7, 120, 4)];
        let encoded = encode_cart(&cart).unwrap();
        assert_eq!(decode_cart(&encoded), cart);
        assert_eq!(encode_cart(&decode_cart(&encoded)).unwrap(), encoded);
    }
}
