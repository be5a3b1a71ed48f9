use bigdecimal::BigDecimal;
use diesel::{insert_into, prelude::*, sql_query};
use diesel_migrations::MigrationHarness;
use tracing::info;

use dinehall_order_service::establish_connection;
use dinehall_order_service::models::{NewEatingTable, NewFood, NewWaiter, Waiter};
use dinehall_order_service::schema;

use super::MIGRATIONS;

/// Resets every table (identities included) and inserts the demo dataset:
/// one waiter, two open tables, a two-item menu.
pub fn main() -> anyhow::Result<()> {
    let conn = &mut establish_connection();
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("failed to run migrations: {e}"))?;

    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        sql_query(
            "TRUNCATE order_foods, orders, eating_tables, foods, waiters RESTART IDENTITY CASCADE",
        )
        .execute(conn)?;

        let waiter = insert_into(schema::waiters::table)
            .values(NewWaiter {
                name: "John Waiter".to_string(),
            })
            .returning(Waiter::as_returning())
            .get_result::<Waiter>(conn)?;

        insert_into(schema::eating_tables::table)
            .values(vec![
                NewEatingTable {
                    available: true,
                    waiter_id: Some(waiter.id),
                },
                NewEatingTable {
                    available: true,
                    waiter_id: None,
                },
            ])
            .execute(conn)?;

        insert_into(schema::foods::table)
            .values(vec![
                NewFood {
                    name: "Pizza".to_string(),
                    price: "10.99".parse::<BigDecimal>().expect("literal price"),
                },
                NewFood {
                    name: "Burger".to_string(),
                    price: "8.49".parse::<BigDecimal>().expect("literal price"),
                },
            ])
            .execute(conn)?;

        Ok(())
    })?;

    info!("Seeded demo dataset");
    Ok(())
}
