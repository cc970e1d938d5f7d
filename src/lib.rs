use std::env;

use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_async::{AsyncConnection, AsyncPgConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use dotenvy::dotenv;

pub mod error;
pub mod handlers;
pub mod models;
pub mod schema;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub async fn establish_connection() -> AsyncPgConnection {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    AsyncPgConnection::establish(&database_url).await.unwrap()
}

pub async fn run_migrations() {
    let conn = establish_connection().await;
    let mut async_wrapper: AsyncConnectionWrapper<AsyncPgConnection> =
        AsyncConnectionWrapper::from(conn);
    tokio::task::spawn_blocking(move || {
        async_wrapper.run_pending_migrations(MIGRATIONS).unwrap();
    })
    .await
    .expect("Error while run migration");
}

#[cfg(test)]
pub(crate) mod testing {
    use diesel::insert_into;
    use diesel_async::{AsyncPgConnection, RunQueryDsl};
    use tokio::sync::OnceCell;

    use crate::{establish_connection, models, run_migrations, schema};

    static MIGRATED: OnceCell<()> = OnceCell::const_new();

    pub async fn setup_database() -> AsyncPgConnection {
        MIGRATED.get_or_init(run_migrations).await;

        establish_connection().await
    }

    pub async fn insert_restaurant(
        conn: &mut AsyncPgConnection,
        name: &str,
        address: &str,
    ) -> models::Restaurant {
        insert_into(schema::restaurants::table)
            .values(models::NewRestaurant {
                name: name.to_string(),
                address: address.to_string(),
            })
            .get_result(conn)
            .await
            .unwrap()
    }

    pub async fn insert_pizza(
        conn: &mut AsyncPgConnection,
        name: &str,
        ingredients: &str,
    ) -> models::Pizza {
        insert_into(schema::pizzas::table)
            .values(models::NewPizza {
                name: name.to_string(),
                ingredients: ingredients.to_string(),
            })
            .get_result(conn)
            .await
            .unwrap()
    }

    pub async fn insert_restaurant_pizza(
        conn: &mut AsyncPgConnection,
        price: i32,
        pizza_id: i32,
        restaurant_id: i32,
    ) -> models::RestaurantPizza {
        insert_into(schema::restaurant_pizzas::table)
            .values(models::NewRestaurantPizza {
                price,
                pizza_id,
                restaurant_id,
            })
            .get_result(conn)
            .await
            .unwrap()
    }
}
