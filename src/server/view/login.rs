use axum::response::Html;
use dioxus::prelude::*;

use crate::server::view::{
    components::{Layout, Message},
    render,
};

/// Which kind of account a login page is for
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoginAudience {
    Owner,
    Customer,
}

impl LoginAudience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Customer => "Customer",
        }
    }

    fn login_path(&self) -> &'static str {
        match self {
            Self::Owner => "/owner/login",
            Self::Customer => "/customer/login",
        }
    }
}

#[component]
fn Login(user: String, action: String, msg: String) -> Element {
    rsx! {
        Layout { title: "{user} Login", page: "login",
            main { class: "login",
                h1 { "{user} Login" }
                Message { msg: msg.clone() }
                form { method: "post", action: "{action}",
                    label { r#for: "email", "Email" }
                    input { id: "email", r#type: "email", name: "email", required: true }
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        name: "password",
                        required: true,
                    }
                    button { r#type: "submit", "Login" }
                }
            }
        }
    }
}

/// Login page for the given audience with an optional message
pub fn login_page(audience: LoginAudience, msg: &str) -> Html<String> {
    render(rsx! {
        Login {
            user: audience.as_str().to_string(),
            action: audience.login_path().to_string(),
            msg: msg.to_string(),
        }
    })
}
