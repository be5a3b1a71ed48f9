use std::sync::Arc;

use diesel::{delete, insert_into, prelude::*, update, PgConnection};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::models::{EatingTable, Food, NewOrder, Order, OrderDetail, OrderFood};
use crate::schema;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Table not found")]
    TableNotFound,
    #[error("Table is not available")]
    TableUnavailable,
    #[error("Order not found")]
    OrderNotFound,
    #[error("Food not found")]
    FoodNotFound,
    #[error("Unexpected internal error")]
    Internal(#[from] diesel::result::Error),
}

/// Repository over the dining schema. Holds the single connection opened at
/// startup; requests serialize on it.
#[derive(Clone)]
pub struct OrderStore {
    conn: Arc<Mutex<PgConnection>>,
}

impl OrderStore {
    pub fn new(conn: PgConnection) -> Self {
        OrderStore {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    pub async fn list_available_tables(&self) -> Result<Vec<EatingTable>, StoreError> {
        use schema::eating_tables::dsl::*;

        let conn = &mut *self.conn.lock().await;
        let tables = eating_tables
            .filter(available.eq(true))
            .select(EatingTable::as_select())
            .order(id.asc())
            .load(conn)?;
        Ok(tables)
    }

    pub async fn list_foods(&self) -> Result<Vec<Food>, StoreError> {
        use schema::foods::dsl::*;

        let conn = &mut *self.conn.lock().await;
        let menu = foods
            .select(Food::as_select())
            .order(id.asc())
            .load(conn)?;
        Ok(menu)
    }

    /// Marks the table unavailable and opens an order against it, in one
    /// transaction. The row lock keeps two reservations of the same table
    /// from both observing `available = true`.
    pub async fn reserve_table(&self, table_id: i32) -> Result<OrderDetail, StoreError> {
        let conn = &mut *self.conn.lock().await;
        conn.transaction(|conn| {
            let table = schema::eating_tables::table
                .select(EatingTable::as_select())
                .find(table_id)
                .for_update()
                .get_result::<EatingTable>(conn)
                .optional()?
                .ok_or(StoreError::TableNotFound)?;
            if !table.available {
                return Err(StoreError::TableUnavailable);
            }

            update(schema::eating_tables::table)
                .set(schema::eating_tables::available.eq(false))
                .filter(schema::eating_tables::id.eq(table_id))
                .execute(conn)?;

            let order = insert_into(schema::orders::table)
                .values(NewOrder { table_id })
                .returning(Order::as_returning())
                .get_result::<Order>(conn)?;

            Ok(OrderDetail::from_parts(order, Vec::new()))
        })
    }

    /// Attaches a food to an order. Attaching a food that is already on the
    /// order leaves the association unchanged.
    pub async fn add_food_to_order(
        &self,
        order_id: i32,
        food_id: i32,
    ) -> Result<OrderDetail, StoreError> {
        let conn = &mut *self.conn.lock().await;
        conn.transaction(|conn| {
            let order = find_order(conn, order_id)?;
            schema::foods::table
                .select(Food::as_select())
                .find(food_id)
                .get_result::<Food>(conn)
                .optional()?
                .ok_or(StoreError::FoodNotFound)?;

            insert_into(schema::order_foods::table)
                .values(OrderFood { order_id, food_id })
                .on_conflict_do_nothing()
                .execute(conn)?;

            load_order_detail(conn, order)
        })
    }

    /// Detaches a food from an order. Removing a food that is not attached
    /// is a no-op, not an error.
    pub async fn remove_food_from_order(
        &self,
        order_id: i32,
        food_id: i32,
    ) -> Result<OrderDetail, StoreError> {
        let conn = &mut *self.conn.lock().await;
        conn.transaction(|conn| {
            let order = find_order(conn, order_id)?;

            delete(
                schema::order_foods::table
                    .filter(schema::order_foods::order_id.eq(order_id))
                    .filter(schema::order_foods::food_id.eq(food_id)),
            )
            .execute(conn)?;

            load_order_detail(conn, order)
        })
    }

    pub async fn get_order(&self, order_id: i32) -> Result<OrderDetail, StoreError> {
        let conn = &mut *self.conn.lock().await;
        let order = find_order(conn, order_id)?;
        load_order_detail(conn, order)
    }

    pub async fn list_orders(&self) -> Result<Vec<OrderDetail>, StoreError> {
        let conn = &mut *self.conn.lock().await;
        let all_orders = schema::orders::table
            .select(Order::as_select())
            .order(schema::orders::id.asc())
            .load::<Order>(conn)?;

        let attached: Vec<(OrderFood, Food)> = OrderFood::belonging_to(&all_orders)
            .inner_join(schema::foods::table)
            .select((OrderFood::as_select(), Food::as_select()))
            .load(conn)?;

        Ok(attached
            .grouped_by(&all_orders)
            .into_iter()
            .zip(all_orders)
            .map(|(foods, order)| {
                let foods = foods.into_iter().map(|(_, food)| food).collect();
                OrderDetail::from_parts(order, foods)
            })
            .collect())
    }

    /// Closes an order. Closing an already-closed order succeeds and leaves
    /// it closed. Food mutations stay permitted on closed orders.
    pub async fn close_order(&self, order_id: i32) -> Result<OrderDetail, StoreError> {
        let conn = &mut *self.conn.lock().await;
        conn.transaction(|conn| {
            find_order(conn, order_id)?;

            let order = update(schema::orders::table)
                .set(schema::orders::active.eq(false))
                .filter(schema::orders::id.eq(order_id))
                .returning(Order::as_returning())
                .get_result::<Order>(conn)?;

            load_order_detail(conn, order)
        })
    }
}

fn find_order(conn: &mut PgConnection, order_id: i32) -> Result<Order, StoreError> {
    schema::orders::table
        .select(Order::as_select())
        .find(order_id)
        .get_result::<Order>(conn)
        .optional()?
        .ok_or(StoreError::OrderNotFound)
}

fn load_order_detail(conn: &mut PgConnection, order: Order) -> Result<OrderDetail, StoreError> {
    let foods = OrderFood::belonging_to(&order)
        .inner_join(schema::foods::table)
        .select(Food::as_select())
        .order(schema::foods::id.asc())
        .load::<Food>(conn)?;
    Ok(OrderDetail::from_parts(order, foods))
}
