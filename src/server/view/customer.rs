use axum::response::Html;
use dioxus::prelude::*;

use crate::{
    model::{menu::MenuItemDto, restaurant::RestaurantDto, user::CustomerDto},
    server::view::{
        components::{Layout, Message},
        format_price, render,
    },
};

#[component]
fn CustomerGreeting(customer: Option<CustomerDto>) -> Element {
    rsx! {
        nav { class: "navbar",
            a { href: "/customer/home", "Canteens" }
            if let Some(customer) = customer {
                span { class: "navbar-user", "{customer.name}" }
            }
        }
    }
}

#[component]
fn RestaurantMenu(
    msg: String,
    restaurant: RestaurantDto,
    customer: Option<CustomerDto>,
    menu_items: Vec<MenuItemDto>,
) -> Element {
    rsx! {
        Layout { title: "{restaurant.restaurant_name}", page: "restaurant",
            CustomerGreeting { customer: customer }
            main {
                Message { msg: msg.clone() }
                h1 { "{restaurant.restaurant_name}" }
                p { "{restaurant.restaurant_address}" }
                p { "{restaurant.restaurant_phone}" }
                ul { class: "menu",
                    for item in menu_items.iter().filter(|item| item.is_available) {
                        li { key: "{item.id}",
                            span { class: "menu-item-name", "{item.name}" }
                            span { class: "menu-item-price", {format_price(item.price)} }
                            if let Some(description) = item.description.clone() {
                                p { "{description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Restaurant page as seen by a customer, unavailable menu items are hidden
pub fn restaurant_page(
    restaurant: RestaurantDto,
    customer: Option<CustomerDto>,
    menu_items: Vec<MenuItemDto>,
) -> Html<String> {
    render(rsx! {
        RestaurantMenu {
            msg: String::new(),
            restaurant: restaurant,
            customer: customer,
            menu_items: menu_items,
        }
    })
}

#[component]
fn CustomerHome(
    msg: String,
    customer: Option<CustomerDto>,
    restaurants: Vec<RestaurantDto>,
) -> Element {
    rsx! {
        Layout { title: "Canteens", page: "customer-home",
            CustomerGreeting { customer: customer }
            main {
                Message { msg: msg.clone() }
                h1 { "Canteens" }
                ul { class: "restaurants",
                    for restaurant in restaurants.iter() {
                        li { key: "{restaurant.id}",
                            a { href: "/restaurant/{restaurant.id}", "{restaurant.restaurant_name}" }
                            span { "{restaurant.restaurant_address}" }
                        }
                    }
                }
            }
        }
    }
}

pub fn customer_home_page(
    msg: &str,
    customer: Option<CustomerDto>,
    restaurants: Vec<RestaurantDto>,
) -> Html<String> {
    render(rsx! {
        CustomerHome {
            msg: msg.to_string(),
            customer: customer,
            restaurants: restaurants,
        }
    })
}
