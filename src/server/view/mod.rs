//! Server rendered pages.
//!
//! Pages are Dioxus components rendered to HTML strings with `dioxus-ssr`. Each page module
//! exposes plain functions returning [`Html`] so controllers never touch the virtual DOM.
//! All text interpolated through `rsx!` is escaped by the renderer.

pub mod components;
pub mod customer;
pub mod login;
pub mod owner;

use axum::response::Html;
use dioxus::prelude::*;

/// Renders a page element into a complete HTML document.
pub fn render(element: Element) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>{}",
        dioxus_ssr::render_element(element)
    ))
}

/// Formats a price with two decimal places.
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}
