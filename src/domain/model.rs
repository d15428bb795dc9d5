use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One incoming shipment parsed out of a container-details field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentEntry {
    /// The group's ASCII digit run, exactly as written.
    pub quantity: String,
    /// Opaque label, usually a `M/D/YY` date. Never validated.
    pub arrival_date: String,
}

impl ShipmentEntry {
    pub fn new(quantity: impl ToString, arrival_date: impl Into<String>) -> Self {
        Self {
            quantity: quantity.to_string(),
            arrival_date: arrival_date.into(),
        }
    }

    /// Numeric quantity, or `None` when the digit run does not fit a `u64`.
    pub fn quantity_value(&self) -> Option<u64> {
        self.quantity.parse().ok()
    }
}

/// A display row in the container modal.
///
/// Quantities are display strings: the fallback row carries the caller's
/// total quantity verbatim, which is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalRow {
    pub quantity: String,
    pub arrival_date: String,
}

impl From<ShipmentEntry> for ArrivalRow {
    fn from(entry: ShipmentEntry) -> Self {
        Self {
            quantity: entry.quantity,
            arrival_date: entry.arrival_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalViewModel {
    pub sku_label: String,
    pub total_quantity: String,
    pub entries: Vec<ArrivalRow>,
    /// Set when the details text could not be parsed and is shown raw.
    pub fallback_text: Option<String>,
}

impl ModalViewModel {
    /// True when the modal should show the "no container details" message.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    InStock,
    LowStock,
    OutOfStock,
}

/// An inventory row as returned by the dashboard's search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default)]
    pub id: Option<String>,
    pub sku: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub last_count_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub last_count: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_container_qty: i64,
    #[serde(default)]
    pub container_details: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub kenneth_inventory: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub buffer_qty: i64,
    #[serde(default)]
    pub stock_status: Option<String>,
    #[serde(default)]
    pub inventory_remark: Option<String>,
    #[serde(default)]
    pub file_date: Option<NaiveDate>,
}

/// The server sends empty count columns as `null`; they count as zero.
fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockStats {
    pub total_skus: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

/// Body of `GET /check-session`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}

/// Body of `POST /delete-file/<id>`, for both success and failure statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFileResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub duration_ms: u64,
}
