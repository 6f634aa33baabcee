pub mod columns;
pub mod products;
pub mod resource_list;

use admin_domain::AdminResource;
use shared::{
    BlogPost, Brand, Category, Charity, Color, Customer, DeliveryTime, Donation, Label, Order, Product,
};
use yew::prelude::*;

use crate::services::api::ApiClient;
use products::ProductsPage;
use resource_list::ResourceList;

/// List screens reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Products,
    Categories,
    Brands,
    Colors,
    Labels,
    DeliveryTimes,
    Customers,
    Orders,
    Charities,
    Donations,
    BlogPosts,
}

impl Screen {
    pub const ALL: [Screen; 11] = [
        Screen::Products,
        Screen::Categories,
        Screen::Brands,
        Screen::Colors,
        Screen::Labels,
        Screen::DeliveryTimes,
        Screen::Customers,
        Screen::Orders,
        Screen::Charities,
        Screen::Donations,
        Screen::BlogPosts,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Products => Product::TITLE,
            Screen::Categories => Category::TITLE,
            Screen::Brands => Brand::TITLE,
            Screen::Colors => Color::TITLE,
            Screen::Labels => Label::TITLE,
            Screen::DeliveryTimes => DeliveryTime::TITLE,
            Screen::Customers => Customer::TITLE,
            Screen::Orders => Order::TITLE,
            Screen::Charities => Charity::TITLE,
            Screen::Donations => Donation::TITLE,
            Screen::BlogPosts => BlogPost::TITLE,
        }
    }

    pub fn render(self, client: &ApiClient, page_size: usize) -> Html {
        let client = client.clone();
        match self {
            Screen::Products => html! { <ProductsPage {client} {page_size} /> },
            Screen::Categories => html! {
                <ResourceList<Category> {client} columns={columns::categories()} {page_size} />
            },
            Screen::Brands => html! {
                <ResourceList<Brand> {client} columns={columns::brands()} {page_size} />
            },
            Screen::Colors => html! {
                <ResourceList<Color> {client} columns={columns::colors()} {page_size} />
            },
            Screen::Labels => html! {
                <ResourceList<Label> {client} columns={columns::labels()} {page_size} />
            },
            Screen::DeliveryTimes => html! {
                <ResourceList<DeliveryTime> {client} columns={columns::delivery_times()} {page_size} />
            },
            Screen::Customers => html! {
                <ResourceList<Customer> {client} columns={columns::customers()} {page_size} />
            },
            Screen::Orders => html! {
                <ResourceList<Order> {client} columns={columns::orders()} {page_size} />
            },
            Screen::Charities => html! {
                <ResourceList<Charity> {client} columns={columns::charities()} {page_size} />
            },
            Screen::Donations => html! {
                <ResourceList<Donation> {client} columns={columns::donations()} {page_size} />
            },
            Screen::BlogPosts => html! {
                <ResourceList<BlogPost> {client} columns={columns::blog_posts()} {page_size} />
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_screen_titles_are_unique() {
        let titles: HashSet<_> = Screen::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(titles.len(), Screen::ALL.len());
        assert_eq!(Screen::DeliveryTimes.title(), "Delivery Times");
    }
}
