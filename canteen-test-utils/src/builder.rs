//! Declarative test builder.
//!
//! Configuration methods are chained on [`TestBuilder`] and applied during `build()`.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_canteen_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_canteen_tables: false,
        }
    }

    /// Add every canteen table to the test database.
    ///
    /// Creates Owner, Customer, Restaurant, MenuItem, CustomerOrder and OrderItem in
    /// dependency order.
    pub fn with_canteen_tables(mut self) -> Self {
        self.include_canteen_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables. Tables are created in the order added,
    /// so parents must come before children.
    ///
    /// ```no_run
    /// use canteen_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), canteen_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Owner)
    ///     .with_table(Restaurant)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context, creating all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError::DbErr)` - Database connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_canteen_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Owner),
                schema.create_table_from_entity(entity::prelude::Customer),
                schema.create_table_from_entity(entity::prelude::Restaurant),
                schema.create_table_from_entity(entity::prelude::MenuItem),
                schema.create_table_from_entity(entity::prelude::CustomerOrder),
                schema.create_table_from_entity(entity::prelude::OrderItem),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
