use axum::{response::Json, routing::get, Router};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::instrument;

use crate::error::ApiError;
use crate::{establish_connection, models};

pub fn router() -> Router {
    Router::new().route("/pizzas", get(list_pizzas))
}

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "List of pizzas", body = Vec<models::Pizza>),
    ),
    tag = "pizzas"
)]
#[instrument]
pub async fn list_pizzas() -> Result<Json<Vec<models::Pizza>>, ApiError> {
    use crate::schema::pizzas::dsl::*;

    let conn = &mut establish_connection().await;
    let results = pizzas.select(models::Pizza::as_select()).load(conn).await?;

    Ok(Json(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{insert_pizza, setup_database};

    #[tokio::test]
    async fn test_list_pizzas() {
        let conn = &mut setup_database().await;

        let margherita =
            insert_pizza(conn, "Margherita", "Dough, Tomato Sauce, Mozzarella, Basil").await;
        let diavola =
            insert_pizza(conn, "Diavola", "Dough, Tomato Sauce, Mozzarella, Spicy Salami").await;

        let Json(results) = list_pizzas().await.unwrap();

        assert!(results
            .iter()
            .any(|p| p.id == margherita.id && p.ingredients == margherita.ingredients));
        assert!(results.iter().any(|p| p.id == diavola.id && p.name == "Diavola"));
    }
}
