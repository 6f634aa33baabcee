//! Field accessors and REST bindings for the admin resources.
//!
//! Each record answers the dot-paths its list screen searches and filters
//! on. Unknown paths resolve to `None`, same as a missing JSON key.

use serde::de::DeserializeOwned;
use shared::{
    BlogPost, Brand, Category, Charity, Color, Customer, DeliveryTime, Donation, Label, NamedRef, Order, Product,
};
use std::borrow::Cow;

use crate::table::record::{decimal, display, opt_text, text, timestamp};
use crate::table::{FieldPath, TableConfig, TableRecord};

/// A record type with its own list screen and REST collection
pub trait AdminResource: TableRecord + DeserializeOwned + Clone + PartialEq + 'static {
    /// Path segment under `/api/`
    const COLLECTION: &'static str;
    /// Screen heading
    const TITLE: &'static str;

    fn table_config() -> TableConfig;

    /// Values offered by the status dropdown; empty hides it
    fn status_options() -> &'static [&'static str] {
        &["Active", "Inactive"]
    }
}

fn named_ref<'a>(reference: &'a NamedRef, rest: &[&str]) -> Option<Cow<'a, str>> {
    match rest {
        ["id"] => display(reference.id),
        ["name"] => text(&reference.name),
        _ => None,
    }
}

fn opt_named_ref<'a>(reference: &'a Option<NamedRef>, rest: &[&str]) -> Option<Cow<'a, str>> {
    reference.as_ref().and_then(|r| named_ref(r, rest))
}

impl TableRecord for Product {
    fn field_text(&self, path: &FieldPath) -> Option<Cow<'_, str>> {
        match path.segments()?.as_slice() {
            ["id"] => display(self.id),
            ["name"] => text(&self.name),
            ["sku"] => text(&self.sku),
            ["description"] => text(&self.description),
            ["category", rest @ ..] => opt_named_ref(&self.category, rest),
            ["brand", rest @ ..] => opt_named_ref(&self.brand, rest),
            ["price"] => decimal(self.price),
            ["stock"] => display(self.stock),
            ["status"] => text(self.status.as_str()),
            _ => None,
        }
    }
}

impl AdminResource for Product {
    const COLLECTION: &'static str = "products";
    const TITLE: &'static str = "Products";

    fn table_config() -> TableConfig {
        TableConfig::new()
            .searchable(["name", "sku", "category.name", "brand.name"])
            .with_status_field("status")
    }
}

impl TableRecord for Category {
    fn field_text(&self, path: &FieldPath) -> Option<Cow<'_, str>> {
        match path.segments()?.as_slice() {
            ["id"] => display(self.id),
            ["name"] => text(&self.name),
            ["slug"] => text(&self.slug),
            ["parent", rest @ ..] => opt_named_ref(&self.parent, rest),
            ["status"] => text(self.status.as_str()),
            _ => None,
        }
    }
}

impl AdminResource for Category {
    const COLLECTION: &'static str = "categories";
    const TITLE: &'static str = "Categories";

    fn table_config() -> TableConfig {
        TableConfig::new()
            .searchable(["name", "slug", "parent.name"])
            .with_status_field("status")
    }
}

impl TableRecord for Brand {
    fn field_text(&self, path: &FieldPath) -> Option<Cow<'_, str>> {
        match path.segments()?.as_slice() {
            ["id"] => display(self.id),
            ["name"] => text(&self.name),
            ["website"] => opt_text(&self.website),
            ["status"] => text(self.status.as_str()),
            _ => None,
        }
    }
}

impl AdminResource for Brand {
    const COLLECTION: &'static str = "brands";
    const TITLE: &'static str = "Brands";

    fn table_config() -> TableConfig {
        TableConfig::new().searchable(["name", "website"]).with_status_field("status")
    }
}

impl TableRecord for Color {
    fn field_text(&self, path: &FieldPath) -> Option<Cow<'_, str>> {
        match path.segments()?.as_slice() {
            ["id"] => display(self.id),
            ["name"] => text(&self.name),
            ["hex_code"] => text(&self.hex_code),
            ["status"] => text(self.status.as_str()),
            _ => None,
        }
    }
}

impl AdminResource for Color {
    const COLLECTION: &'static str = "colors";
    const TITLE: &'static str = "Colors";

    fn table_config() -> TableConfig {
        TableConfig::new().searchable(["name", "hex_code"]).with_status_field("status")
    }
}

impl TableRecord for Label {
    fn field_text(&self, path: &FieldPath) -> Option<Cow<'_, str>> {
        match path.segments()?.as_slice() {
            ["id"] => display(self.id),
            ["name"] => text(&self.name),
            ["status"] => text(self.status.as_str()),
            _ => None,
        }
    }
}

impl AdminResource for Label {
    const COLLECTION: &'static str = "labels";
    const TITLE: &'static str = "Labels";

    fn table_config() -> TableConfig {
        TableConfig::new().searchable(["name"]).with_status_field("status")
    }
}

impl TableRecord for DeliveryTime {
    fn field_text(&self, path: &FieldPath) -> Option<Cow<'_, str>> {
        match path.segments()?.as_slice() {
            ["id"] => display(self.id),
            ["name"] => text(&self.name),
            ["min_days"] => display(self.min_days),
            ["max_days"] => display(self.max_days),
            ["status"] => text(self.status.as_str()),
            _ => None,
        }
    }
}

impl AdminResource for DeliveryTime {
    const COLLECTION: &'static str = "delivery-times";
    const TITLE: &'static str = "Delivery Times";

    fn table_config() -> TableConfig {
        TableConfig::new().searchable(["name"]).with_status_field("status")
    }
}

impl TableRecord for Customer {
    fn field_text(&self, path: &FieldPath) -> Option<Cow<'_, str>> {
        match path.segments()?.as_slice() {
            ["id"] => display(self.id),
            ["name"] => text(&self.name),
            ["email"] => text(&self.email),
            ["phone"] => opt_text(&self.phone),
            ["company"] => opt_text(&self.company),
            ["status"] => text(self.status.as_str()),
            ["created_at"] => timestamp(&self.created_at),
            _ => None,
        }
    }
}

impl AdminResource for Customer {
    const COLLECTION: &'static str = "customers";
    const TITLE: &'static str = "Customers";

    fn table_config() -> TableConfig {
        TableConfig::new()
            .searchable(["name", "email", "phone", "company"])
            .with_status_field("status")
    }
}

impl TableRecord for Order {
    fn field_text(&self, path: &FieldPath) -> Option<Cow<'_, str>> {
        match path.segments()?.as_slice() {
            ["id"] => display(self.id),
            ["order_number"] => text(&self.order_number),
            ["customer", "id"] => display(self.customer.id),
            ["customer", "name"] => text(&self.customer.name),
            ["customer", "email"] => text(&self.customer.email),
            ["items", index, field] => {
                let item = self.items.get(index.parse::<usize>().ok()?)?;
                match *field {
                    "product_id" => display(item.product_id),
                    "product_name" => text(&item.product_name),
                    "quantity" => display(item.quantity),
                    "unit_price" => decimal(item.unit_price),
                    _ => None,
                }
            }
            ["total"] => decimal(self.total),
            ["status"] => text(self.status.as_str()),
            ["placed_at"] => timestamp(&self.placed_at),
            _ => None,
        }
    }
}

impl AdminResource for Order {
    const COLLECTION: &'static str = "orders";
    const TITLE: &'static str = "Orders";

    fn table_config() -> TableConfig {
        TableConfig::new()
            .searchable(["order_number", "customer.name", "customer.email"])
            .with_status_field("status")
    }

    fn status_options() -> &'static [&'static str] {
        &["Pending", "Processing", "Shipped", "Delivered", "Cancelled"]
    }
}

impl TableRecord for Charity {
    fn field_text(&self, path: &FieldPath) -> Option<Cow<'_, str>> {
        match path.segments()?.as_slice() {
            ["id"] => display(self.id),
            ["name"] => text(&self.name),
            ["registration_number"] => opt_text(&self.registration_number),
            ["status"] => text(self.status.as_str()),
            _ => None,
        }
    }
}

impl AdminResource for Charity {
    const COLLECTION: &'static str = "charities";
    const TITLE: &'static str = "Charities";

    fn table_config() -> TableConfig {
        TableConfig::new()
            .searchable(["name", "registration_number"])
            .with_status_field("status")
    }
}

impl TableRecord for Donation {
    fn field_text(&self, path: &FieldPath) -> Option<Cow<'_, str>> {
        match path.segments()?.as_slice() {
            ["id"] => display(self.id),
            ["charity", rest @ ..] => named_ref(&self.charity, rest),
            ["customer", rest @ ..] => opt_named_ref(&self.customer, rest),
            ["amount"] => decimal(self.amount),
            ["donated_at"] => timestamp(&self.donated_at),
            _ => None,
        }
    }
}

impl AdminResource for Donation {
    const COLLECTION: &'static str = "donations";
    const TITLE: &'static str = "Donations";

    fn table_config() -> TableConfig {
        TableConfig::new().searchable(["charity.name", "customer.name"])
    }

    fn status_options() -> &'static [&'static str] {
        &[]
    }
}

impl TableRecord for BlogPost {
    fn field_text(&self, path: &FieldPath) -> Option<Cow<'_, str>> {
        match path.segments()?.as_slice() {
            ["id"] => display(self.id),
            ["title"] => text(&self.title),
            ["slug"] => text(&self.slug),
            ["author", rest @ ..] => named_ref(&self.author, rest),
            ["status"] => text(self.status.as_str()),
            ["published_at"] => self.published_at.as_ref().and_then(timestamp),
            ["tags"] => display(self.tags.join(",")),
            _ => None,
        }
    }
}

impl AdminResource for BlogPost {
    const COLLECTION: &'static str = "blog-posts";
    const TITLE: &'static str = "Blog Posts";

    fn table_config() -> TableConfig {
        TableConfig::new()
            .searchable(["title", "author.name", "tags"])
            .with_status_field("status")
    }

    fn status_options() -> &'static [&'static str] {
        &["Draft", "Published"]
    }
}
