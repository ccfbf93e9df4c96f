use serde::{Deserialize, Serialize};

/// Lifecycle state of a customer order, stored as text in the database
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OrderStatus {
    Pending,
    Accepted,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Preparing => "Preparing",
            Self::Ready => "Ready",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Orders in a terminal state are listed as completed, everything else is current
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Stored values of every terminal status
    pub fn terminal_values() -> Vec<&'static str> {
        Self::ALL
            .into_iter()
            .filter(OrderStatus::is_terminal)
            .map(|status| status.as_str())
            .collect()
    }
}

/// Which orders of a restaurant an owner page lists
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OrderFilter {
    All,
    Current,
    Completed,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemView {
    pub menu_item_name: String,
    pub quantity: i32,
}

/// An order reshaped for the owner order listings
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub order_id: i32,
    pub order_items: Vec<OrderItemView>,
    pub canteen_name: String,
    pub restaurant_address: String,
    pub order_status: String,
    pub total_price: f64,
    pub status: String,
    pub expected_pickup_time: Option<String>,
    pub description: Option<String>,
    pub date: String,
    pub time: String,
}
