use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::OrderModel, TestContext};

impl TestContext {
    pub fn order<'a>(&'a self) -> OrderFixtures<'a> {
        OrderFixtures { setup: self }
    }
}

pub struct OrderFixtures<'a> {
    setup: &'a TestContext,
}

/// Creation date of every fixture order, 5 March 2024 at 14:07:09.
pub fn fixture_order_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|date| date.and_hms_opt(14, 7, 9))
        .unwrap_or_default()
}

impl<'a> OrderFixtures<'a> {
    /// Insert an order with the provided status and `(menu_item_id, quantity)` items.
    ///
    /// The order total is left at zero, it isn't derived from the items.
    pub async fn insert_order(
        &self,
        restaurant_id: i32,
        customer_id: i32,
        status: &str,
        items: &[(i32, i32)],
    ) -> Result<OrderModel, TestError> {
        let order = entity::prelude::CustomerOrder::insert(entity::customer_order::ActiveModel {
            restaurant_id: ActiveValue::Set(restaurant_id),
            customer_id: ActiveValue::Set(customer_id),
            order_total: ActiveValue::Set(0.0),
            order_status: ActiveValue::Set(status.to_string()),
            expected_pick_up_time: ActiveValue::Set(Some("12:30".to_string())),
            table_requests: ActiveValue::Set(Some("Window seat".to_string())),
            created_date: ActiveValue::Set(fixture_order_date()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        for (menu_item_id, quantity) in items {
            entity::prelude::OrderItem::insert(entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                menu_item_id: ActiveValue::Set(*menu_item_id),
                quantity: ActiveValue::Set(*quantity),
                ..Default::default()
            })
            .exec(&self.setup.db)
            .await?;
        }

        Ok(order)
    }
}
