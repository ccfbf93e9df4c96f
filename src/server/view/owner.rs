use axum::response::Html;
use dioxus::prelude::*;

use crate::{
    model::{menu::MenuItemDto, order::OrderView, restaurant::RestaurantDto, user::OwnerDto},
    server::view::{
        components::{Layout, Message, OrderTable, OwnerNavbar},
        format_price, render,
    },
};

/// Everything an owner page shows about the signed in owner
#[derive(Clone, PartialEq, Debug)]
pub struct OwnerPage {
    pub msg: String,
    pub owner: OwnerDto,
    pub restaurant: RestaurantDto,
}

#[component]
fn OrdersPage(
    title: String,
    page: String,
    heading: String,
    ctx: OwnerPage,
    orders: Vec<OrderView>,
) -> Element {
    rsx! {
        Layout { title: "{title}", page: "{page}",
            OwnerNavbar {
                owner: ctx.owner.clone(),
                restaurant_name: ctx.restaurant.restaurant_name.clone(),
            }
            main {
                Message { msg: ctx.msg.clone() }
                section { class: "restaurant-summary",
                    h1 { "{ctx.restaurant.restaurant_name}" }
                    p { "{ctx.restaurant.restaurant_address}" }
                    p { "{ctx.restaurant.restaurant_phone}" }
                }
                h2 { "{heading}" }
                OrderTable { orders: orders }
            }
        }
    }
}

/// Owner home page (dashboard) listing every order
pub fn owner_home_page(ctx: OwnerPage, orders: Vec<OrderView>) -> Html<String> {
    render(rsx! {
        OrdersPage {
            title: "Dashboard",
            page: "owner-home",
            heading: "All Orders",
            ctx: ctx,
            orders: orders,
        }
    })
}

pub fn current_orders_page(ctx: OwnerPage, orders: Vec<OrderView>) -> Html<String> {
    render(rsx! {
        OrdersPage {
            title: "Current Orders",
            page: "owner-current-orders",
            heading: "Current Orders",
            ctx: ctx,
            orders: orders,
        }
    })
}

pub fn completed_orders_page(ctx: OwnerPage, orders: Vec<OrderView>) -> Html<String> {
    render(rsx! {
        OrdersPage {
            title: "Completed Orders",
            page: "owner-completed-orders",
            heading: "Completed Orders",
            ctx: ctx,
            orders: orders,
        }
    })
}

#[component]
fn UpdateMenu(ctx: OwnerPage, menu_items: Vec<MenuItemDto>) -> Element {
    rsx! {
        Layout { title: "Update Menu", page: "owner-update-menu",
            OwnerNavbar {
                owner: ctx.owner.clone(),
                restaurant_name: ctx.restaurant.restaurant_name.clone(),
            }
            main {
                Message { msg: ctx.msg.clone() }
                h1 { "Menu" }
                if menu_items.is_empty() {
                    p { class: "empty", "No menu items yet." }
                } else {
                    table { class: "table",
                        thead {
                            tr {
                                th { "Item" }
                                th { "Description" }
                                th { "Price" }
                                th { "Available" }
                            }
                        }
                        tbody {
                            for item in menu_items.iter() {
                                tr { key: "{item.id}",
                                    td { "{item.name}" }
                                    td { {item.description.clone().unwrap_or_default()} }
                                    td { {format_price(item.price)} }
                                    td {
                                        if item.is_available {
                                            "Yes"
                                        } else {
                                            "No"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn update_menu_page(ctx: OwnerPage, menu_items: Vec<MenuItemDto>) -> Html<String> {
    render(rsx! {
        UpdateMenu { ctx: ctx, menu_items: menu_items }
    })
}

#[component]
fn AddRestaurant(owner_id: String, msg: String) -> Element {
    rsx! {
        Layout { title: "Add Restaurant", page: "add-new-restaurant",
            main {
                h1 { "Add your restaurant" }
                Message { msg: msg.clone() }
                form { method: "post", action: "/restaurant",
                    input { r#type: "hidden", name: "ownerId", value: "{owner_id}" }
                    label { r#for: "restaurantName", "Name" }
                    input { id: "restaurantName", name: "restaurantName" }
                    label { r#for: "email", "Email" }
                    input { id: "email", r#type: "email", name: "email" }
                    label { r#for: "restaurantPhone", "Phone" }
                    input { id: "restaurantPhone", name: "restaurantPhone", maxlength: "10" }
                    label { r#for: "restaurantAddress", "Address" }
                    input { id: "restaurantAddress", name: "restaurantAddress" }
                    label { r#for: "restaurantZip", "Zip code" }
                    input { id: "restaurantZip", name: "restaurantZip", maxlength: "6" }
                    label { r#for: "password", "Restaurant login password" }
                    input { id: "password", r#type: "password", name: "password" }
                    button { r#type: "submit", "Create" }
                }
            }
        }
    }
}

/// Add restaurant form, pre-filled with the owner ID
pub fn add_restaurant_page(owner_id: &str, msg: &str) -> Html<String> {
    render(rsx! {
        AddRestaurant { owner_id: owner_id.to_string(), msg: msg.to_string() }
    })
}
