use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lightweight reference to another record, as embedded by the REST backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

/// Active/inactive flag carried by most catalogue records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
        }
    }
}

impl Default for RecordStatus {
    fn default() -> Self {
        RecordStatus::Active
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a customer order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Publication state of a blog post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublishState {
    Draft,
    Published,
}

impl PublishState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishState::Draft => "Draft",
            PublishState::Published => "Published",
        }
    }
}

impl fmt::Display for PublishState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sellable print product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<NamedRef>,
    pub brand: Option<NamedRef>,
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub parent: Option<NamedRef>,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub website: Option<String>,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub id: i64,
    pub name: String,
    pub hex_code: String, // "#RRGGBB"
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: i64,
    pub name: String,
    pub status: RecordStatus,
}

/// Delivery window offered at checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTime {
    pub id: i64,
    pub name: String,
    pub min_days: u32,
    pub max_days: u32,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
}

/// Customer details embedded in an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCustomer {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub customer: OrderCustomer,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charity {
    pub id: i64,
    pub name: String,
    pub registration_number: Option<String>,
    pub status: RecordStatus,
}

/// A donation made to a charity, optionally on behalf of a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: i64,
    pub charity: NamedRef,
    pub customer: Option<NamedRef>,
    pub amount: f64,
    pub donated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub author: NamedRef,
    pub status: PublishState,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// List payload as returned by the REST backend.
///
/// Some endpoints return a bare array, others wrap it as `{ "data": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub fn into_records(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(records) => records,
            ListEnvelope::Wrapped { data } => data,
        }
    }
}

/// Product fields submitted by the add/edit wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub sku: String,
    pub description: String,
    pub category_id: i64,
    pub brand_id: Option<i64>,
    pub price: f64,
    pub stock: u32,
    pub image_urls: Vec<String>,
    pub status: RecordStatus,
}

/// Create or update request produced by the product wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ProductUpsert {
    Create { product: ProductPayload },
    Update { id: i64, product: ProductPayload },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_accepts_bare_array() {
        let json = r#"[{"id": 1, "name": "Glossy", "status": "Active"}]"#;
        let envelope: ListEnvelope<Label> = serde_json::from_str(json).unwrap();
        let labels = envelope.into_records();

        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].name, "Glossy");
        assert_eq!(labels[0].status, RecordStatus::Active);
    }

    #[test]
    fn test_list_envelope_accepts_wrapped_array() {
        let json = r##"{"data": [
            {"id": 1, "name": "Red", "hex_code": "#FF0000", "status": "Active"},
            {"id": 2, "name": "Teal", "hex_code": "#008080", "status": "Inactive"}
        ]}"##;
        let envelope: ListEnvelope<Color> = serde_json::from_str(json).unwrap();
        let colors = envelope.into_records();

        assert_eq!(colors.len(), 2);
        assert_eq!(colors[1].status, RecordStatus::Inactive);
    }

    #[test]
    fn test_order_with_nested_customer() {
        let json = r#"{
            "id": 7,
            "order_number": "MP-0007",
            "customer": {"id": 3, "name": "John Smith", "email": "john@example.com"},
            "items": [{"product_id": 11, "product_name": "Business cards", "quantity": 2, "unit_price": 19.5}],
            "total": 39.0,
            "status": "Shipped",
            "placed_at": "2025-03-01T10:00:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.customer.name, "John Smith");
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.status, OrderStatus::Shipped);
    }

    #[test]
    fn test_product_upsert_is_tagged() {
        let payload = ProductPayload {
            name: "Poster".to_string(),
            sku: "PST-A2".to_string(),
            description: String::new(),
            category_id: 4,
            brand_id: None,
            price: 12.0,
            stock: 50,
            image_urls: Vec::new(),
            status: RecordStatus::Active,
        };

        let value = serde_json::to_value(ProductUpsert::Update { id: 9, product: payload }).unwrap();
        assert_eq!(value["action"], "update");
        assert_eq!(value["id"], 9);
        assert_eq!(value["product"]["sku"], "PST-A2");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(RecordStatus::Inactive.to_string(), "Inactive");
        assert_eq!(OrderStatus::Cancelled.to_string(), "Cancelled");
        assert_eq!(PublishState::Draft.to_string(), "Draft");
    }
}
