use dioxus::prelude::*;

use crate::{
    model::{order::OrderView, user::OwnerDto},
    server::view::format_price,
};

/// Document shell shared by every page.
///
/// `page` is written to the body's `data-page` attribute to identify the rendered view.
#[component]
pub fn Layout(title: String, page: String, children: Element) -> Element {
    rsx! {
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                meta {
                    name: "viewport",
                    content: "width=device-width, initial-scale=1",
                }
                title { "{title} | Canteen" }
            }
            body { "data-page": "{page}", {children} }
        }
    }
}

#[component]
pub fn Message(msg: String) -> Element {
    rsx! {
        if !msg.is_empty() {
            div { class: "alert", role: "alert", "{msg}" }
        }
    }
}

#[component]
pub fn OwnerNavbar(owner: OwnerDto, restaurant_name: String) -> Element {
    rsx! {
        nav { class: "navbar",
            span { class: "navbar-brand", "{restaurant_name}" }
            a { href: "/restaurant/dashboard", "Dashboard" }
            a { href: "/restaurant/current-orders", "Current Orders" }
            a { href: "/restaurant/completed-orders", "Completed Orders" }
            a { href: "/restaurant/update-menu", "Menu" }
            span { class: "navbar-user", "{owner.name}" }
            a { href: "/restaurant/logout", "Logout" }
        }
    }
}

#[component]
pub fn OrderTable(orders: Vec<OrderView>) -> Element {
    rsx! {
        if orders.is_empty() {
            p { class: "empty", "No orders to show." }
        } else {
            table { class: "table",
                thead {
                    tr {
                        th { "Order" }
                        th { "Items" }
                        th { "Total" }
                        th { "Status" }
                        th { "Pickup" }
                        th { "Requests" }
                        th { "Placed" }
                    }
                }
                tbody {
                    for order in orders.iter() {
                        tr { key: "{order.order_id}",
                            td { "#{order.order_id}" }
                            td {
                                ul {
                                    for item in order.order_items.iter() {
                                        li { "{item.quantity} x {item.menu_item_name}" }
                                    }
                                }
                            }
                            td { {format_price(order.total_price)} }
                            td { class: "order-status", "{order.status}" }
                            td { {order.expected_pickup_time.clone().unwrap_or_default()} }
                            td { {order.description.clone().unwrap_or_default()} }
                            td { "{order.date} {order.time}" }
                        }
                    }
                }
            }
        }
    }
}
