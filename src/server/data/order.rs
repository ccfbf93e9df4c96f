use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    model::order::{OrderFilter, OrderStatus},
    server::model::db::{OrderItemModel, OrderModel},
};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Orders of a restaurant matching the filter, each with its order items
    ///
    /// Orders are returned oldest first.
    pub async fn get_many_with_items_by_restaurant_id(
        &self,
        restaurant_id: i32,
        filter: OrderFilter,
    ) -> Result<Vec<(OrderModel, Vec<OrderItemModel>)>, DbErr> {
        let query = entity::prelude::CustomerOrder::find()
            .filter(entity::customer_order::Column::RestaurantId.eq(restaurant_id));

        let query = match filter {
            OrderFilter::All => query,
            OrderFilter::Current => query.filter(
                entity::customer_order::Column::OrderStatus
                    .is_not_in(OrderStatus::terminal_values()),
            ),
            OrderFilter::Completed => query.filter(
                entity::customer_order::Column::OrderStatus.is_in(OrderStatus::terminal_values()),
            ),
        };

        query
            .order_by_asc(entity::customer_order::Column::Id)
            .find_with_related(entity::prelude::OrderItem)
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await
    }
}
