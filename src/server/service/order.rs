use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::{
    model::order::{OrderFilter, OrderItemView, OrderView},
    server::{
        data::{menu_item::MenuItemRepository, order::OrderRepository},
        error::Error,
        model::db::{OrderItemModel, OrderModel, RestaurantModel},
        util::time::{format_order_date, format_order_time},
    },
};

/// Builds the order listings shown on owner pages.
pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the orders of a restaurant reshaped for display.
    ///
    /// Menu item names for every order are resolved with a single query. Order items whose
    /// menu item no longer exists are left out of the listing.
    ///
    /// # Arguments
    /// - `restaurant` - Restaurant the orders were placed at
    /// - `filter` - Which orders to include
    ///
    /// # Returns
    /// - `Ok(Vec<OrderView>)` - Orders oldest first
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_orders(
        &self,
        restaurant: &RestaurantModel,
        filter: OrderFilter,
    ) -> Result<Vec<OrderView>, Error> {
        let order_repo = OrderRepository::new(self.db);
        let menu_item_repo = MenuItemRepository::new(self.db);

        let orders = order_repo
            .get_many_with_items_by_restaurant_id(restaurant.id, filter)
            .await?;

        let menu_item_ids: Vec<i32> = orders
            .iter()
            .flat_map(|(_, items)| items.iter().map(|item| item.menu_item_id))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let menu_item_names: HashMap<i32, String> = menu_item_repo
            .get_many_by_ids(&menu_item_ids)
            .await?
            .into_iter()
            .map(|menu_item| (menu_item.id, menu_item.name))
            .collect();

        Ok(orders
            .into_iter()
            .map(|(order, items)| order_view(restaurant, order, items, &menu_item_names))
            .collect())
    }
}

fn order_view(
    restaurant: &RestaurantModel,
    order: OrderModel,
    items: Vec<OrderItemModel>,
    menu_item_names: &HashMap<i32, String>,
) -> OrderView {
    let order_items = items
        .into_iter()
        .filter_map(|item| match menu_item_names.get(&item.menu_item_id) {
            Some(name) => Some(OrderItemView {
                menu_item_name: name.clone(),
                quantity: item.quantity,
            }),
            None => {
                tracing::debug!(
                    order_id = %order.id,
                    menu_item_id = %item.menu_item_id,
                    "Skipping order item referencing a removed menu item"
                );

                None
            }
        })
        .collect();

    OrderView {
        order_id: order.id,
        order_items,
        canteen_name: restaurant.restaurant_name.clone(),
        restaurant_address: restaurant.restaurant_address.clone(),
        order_status: order.order_status.clone(),
        total_price: order.order_total,
        status: order.order_status,
        expected_pickup_time: order.expected_pick_up_time,
        description: order.table_requests,
        date: format_order_date(order.created_date),
        time: format_order_time(order.created_date),
    }
}
