use crate::core::presenter;
use crate::domain::model::{InventoryItem, ModalViewModel, StockLevel, StockStats};

impl InventoryItem {
    /// On-hand inventory plus everything still in containers.
    pub fn available_stock(&self) -> i64 {
        self.kenneth_inventory + self.total_container_qty
    }

    pub fn stock_level(&self) -> StockLevel {
        let available = self.available_stock();
        if available <= 0 {
            StockLevel::OutOfStock
        } else if available <= self.buffer_qty {
            StockLevel::LowStock
        } else {
            StockLevel::InStock
        }
    }

    pub fn has_incoming(&self) -> bool {
        self.total_container_qty > 0
    }

    /// The strings a "show details" trigger on this row would carry.
    /// A missing details column is sent as the `"null"` sentinel.
    pub fn modal_trigger(&self) -> (String, String, String) {
        (
            self.sku.clone(),
            self.container_details
                .clone()
                .unwrap_or_else(|| "null".to_string()),
            self.total_container_qty.to_string(),
        )
    }

    pub fn modal(&self) -> ModalViewModel {
        let (sku, details, qty) = self.modal_trigger();
        presenter::present(&sku, &details, &qty)
    }
}

impl StockStats {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a InventoryItem>) -> Self {
        items
            .into_iter()
            .fold(StockStats::default(), |mut stats, item| {
                stats.total_skus += 1;
                match item.stock_level() {
                    StockLevel::InStock => stats.in_stock += 1,
                    StockLevel::LowStock => stats.low_stock += 1,
                    StockLevel::OutOfStock => stats.out_of_stock += 1,
                }
                stats
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(on_hand: i64, incoming: i64, buffer: i64) -> InventoryItem {
        serde_json::from_value(serde_json::json!({
            "sku": "SKU-1",
            "kenneth_inventory": on_hand,
            "total_container_qty": incoming,
            "buffer_qty": buffer,
        }))
        .unwrap()
    }

    #[test]
    fn test_stock_levels() {
        assert_eq!(item(0, 0, 10).stock_level(), StockLevel::OutOfStock);
        assert_eq!(item(-5, 2, 0).stock_level(), StockLevel::OutOfStock);
        assert_eq!(item(4, 6, 10).stock_level(), StockLevel::LowStock);
        assert_eq!(item(4, 7, 10).stock_level(), StockLevel::InStock);
    }

    #[test]
    fn test_null_counts_are_zero() {
        let item: InventoryItem = serde_json::from_value(serde_json::json!({
            "sku": "SKU-1",
            "last_count": null,
            "kenneth_inventory": null,
            "total_container_qty": 40,
            "buffer_qty": null,
        }))
        .unwrap();
        assert_eq!(item.kenneth_inventory, 0);
        assert_eq!(item.last_count, 0);
        assert_eq!(item.available_stock(), 40);
        assert_eq!(item.stock_level(), StockLevel::InStock);
    }

    #[test]
    fn test_has_incoming() {
        assert!(item(0, 1, 0).has_incoming());
        assert!(!item(10, 0, 0).has_incoming());
    }

    #[test]
    fn test_missing_details_open_as_no_data() {
        let view = item(1, 200, 0).modal();
        assert!(view.entries.is_empty());
        assert_eq!(view.total_quantity, "200");
    }

    #[test]
    fn test_stats_count_each_level() {
        let items = vec![item(0, 0, 0), item(5, 0, 10), item(50, 0, 10), item(1, 100, 0)];
        let stats = StockStats::from_items(&items);
        assert_eq!(
            stats,
            StockStats {
                total_skus: 4,
                in_stock: 2,
                low_stock: 1,
                out_of_stock: 1,
            }
        );
    }
}
