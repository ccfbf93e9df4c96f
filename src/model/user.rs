use serde::{Deserialize, Serialize};

/// Restaurant owner account as shown on owner pages
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub id: i32,
    pub user_name: String,
    pub name: String,
    pub email: String,
}

/// Customer account as shown on customer pages
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: i32,
    pub user_name: String,
    pub name: String,
}

impl From<entity::owner::Model> for OwnerDto {
    fn from(owner: entity::owner::Model) -> Self {
        Self {
            id: owner.id,
            user_name: owner.user_name,
            name: owner.name,
            email: owner.email,
        }
    }
}

impl From<entity::customer::Model> for CustomerDto {
    fn from(customer: entity::customer::Model) -> Self {
        Self {
            id: customer.id,
            user_name: customer.user_name,
            name: customer.name,
        }
    }
}
