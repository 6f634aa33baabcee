//! Column layouts for each list screen.

use chrono::{DateTime, Utc};
use shared::{
    BlogPost, Brand, Category, Charity, Color, Customer, DeliveryTime, Donation, Label, NamedRef, Order, Product,
};
use yew::prelude::*;

use crate::components::data_table::Column;

fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

fn date(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

fn badge(status: &str) -> Html {
    html! {
        <span class={classes!("status-badge", status.to_lowercase())}>{status.to_string()}</span>
    }
}

fn opt_name(reference: &Option<NamedRef>) -> Html {
    reference.as_ref().map(|r| html! { {r.name.clone()} }).unwrap_or_else(|| html! { {"-"} })
}

pub fn products() -> Vec<Column<Product>> {
    vec![
        Column::new("Name", |p| html! { {p.name.clone()} }),
        Column::new("SKU", |p| html! { {p.sku.clone()} }),
        Column::new("Category", |p| opt_name(&p.category)),
        Column::new("Brand", |p| opt_name(&p.brand)),
        Column::new("Price", |p| html! { {money(p.price)} }),
        Column::new("Stock", |p| html! { {p.stock} }),
        Column::new("Status", |p| badge(p.status.as_str())),
    ]
}

pub fn categories() -> Vec<Column<Category>> {
    vec![
        Column::new("Name", |c| html! { {c.name.clone()} }),
        Column::new("Slug", |c| html! { {c.slug.clone()} }),
        Column::new("Parent", |c| opt_name(&c.parent)),
        Column::new("Status", |c| badge(c.status.as_str())),
    ]
}

pub fn brands() -> Vec<Column<Brand>> {
    vec![
        Column::new("Name", |b| html! { {b.name.clone()} }),
        Column::new("Website", |b| match &b.website {
            Some(url) => html! { <a href={url.clone()} target="_blank">{url.clone()}</a> },
            None => html! {},
        }),
        Column::new("Status", |b| badge(b.status.as_str())),
    ]
}

pub fn colors() -> Vec<Column<Color>> {
    vec![
        Column::new("Name", |c| html! { {c.name.clone()} }),
        Column::new("Swatch", |c| {
            html! {
                <span class="color-swatch" style={format!("background-color: {}", c.hex_code)}></span>
            }
        }),
        Column::new("Hex", |c| html! { {c.hex_code.clone()} }),
        Column::new("Status", |c| badge(c.status.as_str())),
    ]
}

pub fn labels() -> Vec<Column<Label>> {
    vec![
        Column::new("Name", |l| html! { {l.name.clone()} }),
        Column::new("Status", |l| badge(l.status.as_str())),
    ]
}

pub fn delivery_times() -> Vec<Column<DeliveryTime>> {
    vec![
        Column::new("Name", |d| html! { {d.name.clone()} }),
        Column::new("Window", |d| html! { {format!("{}-{} days", d.min_days, d.max_days)} }),
        Column::new("Status", |d| badge(d.status.as_str())),
    ]
}

pub fn customers() -> Vec<Column<Customer>> {
    vec![
        Column::new("Name", |c| html! { {c.name.clone()} }),
        Column::new("Email", |c| html! { {c.email.clone()} }),
        Column::new("Phone", |c| html! { {c.phone.clone().unwrap_or_default()} }),
        Column::new("Company", |c| html! { {c.company.clone().unwrap_or_default()} }),
        Column::new("Joined", |c| html! { {date(&c.created_at)} }),
        Column::new("Status", |c| badge(c.status.as_str())),
    ]
}

pub fn orders() -> Vec<Column<Order>> {
    vec![
        Column::new("Order", |o| html! { {o.order_number.clone()} }),
        Column::new("Customer", |o| html! { {o.customer.name.clone()} }),
        Column::new("Items", |o| html! { {o.items.iter().map(|item| item.quantity).sum::<u32>()} }),
        Column::new("Total", |o| html! { {money(o.total)} }),
        Column::new("Placed", |o| html! { {date(&o.placed_at)} }),
        Column::new("Status", |o| badge(o.status.as_str())),
    ]
}

pub fn charities() -> Vec<Column<Charity>> {
    vec![
        Column::new("Name", |c| html! { {c.name.clone()} }),
        Column::new("Registration", |c| html! { {c.registration_number.clone().unwrap_or_default()} }),
        Column::new("Status", |c| badge(c.status.as_str())),
    ]
}

pub fn donations() -> Vec<Column<Donation>> {
    vec![
        Column::new("Charity", |d| html! { {d.charity.name.clone()} }),
        Column::new("Donor", |d| opt_name(&d.customer)),
        Column::new("Amount", |d| html! { {money(d.amount)} }),
        Column::new("Date", |d| html! { {date(&d.donated_at)} }),
    ]
}

pub fn blog_posts() -> Vec<Column<BlogPost>> {
    vec![
        Column::new("Title", |b| html! { {b.title.clone()} }),
        Column::new("Author", |b| html! { {b.author.name.clone()} }),
        Column::new("Tags", |b| html! { {b.tags.join(", ")} }),
        Column::new("Published", |b| html! { {b.published_at.as_ref().map(date).unwrap_or_default()} }),
        Column::new("Status", |b| badge(b.status.as_str())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_money_and_date() {
        assert_eq!(money(1234.5), "$1234.50");
        let at = DateTime::parse_from_rfc3339("2024-03-09T17:45:00Z").unwrap().with_timezone(&Utc);
        assert_eq!(date(&at), "2024-03-09");
    }

    #[wasm_bindgen_test]
    fn test_every_screen_has_a_status_column_when_filterable() {
        assert!(products().iter().any(|c| c.header == "Status"));
        assert!(orders().iter().any(|c| c.header == "Status"));
        assert!(!donations().iter().any(|c| c.header == "Status"));
    }
}
