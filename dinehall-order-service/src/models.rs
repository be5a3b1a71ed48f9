use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::schema::{eating_tables, foods, order_foods, orders, waiters};

#[derive(Queryable, Selectable, Identifiable, Debug, PartialEq, Serialize, ToSchema)]
#[diesel(table_name = eating_tables)]
pub struct EatingTable {
    pub id: i32,
    pub available: bool,
    #[serde(skip)]
    pub waiter_id: Option<i32>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = eating_tables)]
pub struct NewEatingTable {
    pub available: bool,
    pub waiter_id: Option<i32>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, PartialEq, Serialize)]
#[diesel(table_name = waiters)]
pub struct Waiter {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = waiters)]
pub struct NewWaiter {
    pub name: String,
}

#[derive(Queryable, Selectable, Identifiable, Debug, PartialEq, Serialize, ToSchema)]
#[diesel(table_name = foods)]
pub struct Food {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String)]
    pub price: BigDecimal,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = foods)]
pub struct NewFood {
    pub name: String,
    pub price: BigDecimal,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, PartialEq)]
#[diesel(belongs_to(EatingTable, foreign_key = table_id))]
#[diesel(table_name = orders)]
pub struct Order {
    pub id: i32,
    pub table_id: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub table_id: i32,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Insertable, Debug, PartialEq)]
#[diesel(belongs_to(Order))]
#[diesel(belongs_to(Food))]
#[diesel(table_name = order_foods)]
#[diesel(primary_key(order_id, food_id))]
pub struct OrderFood {
    pub order_id: i32,
    pub food_id: i32,
}

/// An order as it goes over the wire, with its attached foods inlined.
#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct OrderDetail {
    /// Unique identifier for the order
    pub id: i32,
    /// Table the order is running against
    pub table_id: i32,
    /// When the order was opened
    pub datetime: DateTime<Utc>,
    /// Whether the order is still open
    pub active: bool,
    /// Foods attached to the order
    pub foods: Vec<Food>,
}

impl OrderDetail {
    pub fn from_parts(order: Order, foods: Vec<Food>) -> Self {
        OrderDetail {
            id: order.id,
            table_id: order.table_id,
            datetime: order.created_at,
            active: order.active,
            foods,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    /// Table to open the order against
    pub table_id: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderFoodRequest {
    /// Food to attach or detach
    pub food_id: Option<i32>,
    /// Order to mutate
    pub order_id: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ViewOrderRequest {
    /// Order to fetch; omit to list every order
    pub order_id: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CloseOrderRequest {
    /// Order to close
    pub order_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}
