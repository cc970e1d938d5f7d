use axum::{http::StatusCode, response::Json, routing::post, Router};
use diesel::{insert_into, prelude::*};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::error::{ApiError, ApiErrorResponse, ValidationErrorResponse};
use crate::{establish_connection, models, schema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Price in dollars, between 1 and 30 inclusive
    pub price: i32,
    /// ID of an existing pizza
    pub pizza_id: i32,
    /// ID of an existing restaurant
    pub restaurant_id: i32,
}

/// Newly created offering with both referenced records expanded.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaResponse {
    /// Unique identifier for the offering
    pub id: i32,
    /// Price in dollars
    pub price: i32,
    /// ID of the pizza
    pub pizza_id: i32,
    /// ID of the restaurant
    pub restaurant_id: i32,
    /// The pizza being offered
    pub pizza: models::Pizza,
    /// The restaurant offering it
    pub restaurant: models::Restaurant,
}

pub fn router() -> Router {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Offering created", body = RestaurantPizzaResponse),
        (status = 400, description = "Price out of range", body = ValidationErrorResponse),
        (status = 404, description = "Referenced restaurant or pizza does not exist", body = ApiErrorResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument]
pub async fn create_restaurant_pizza(
    Json(payload): Json<CreateRestaurantPizzaRequest>,
) -> Result<(StatusCode, Json<RestaurantPizzaResponse>), ApiError> {
    if payload.price < 1 || payload.price > 30 {
        return Err(ApiError::Validation);
    }

    let conn = &mut establish_connection().await;

    let pizza = match schema::pizzas::table
        .find(payload.pizza_id)
        .select(models::Pizza::as_select())
        .first(conn)
        .await
    {
        Ok(pizza) => pizza,
        Err(diesel::result::Error::NotFound) => return Err(ApiError::ReferenceNotFound),
        Err(err) => return Err(err.into()),
    };
    let restaurant = match schema::restaurants::table
        .find(payload.restaurant_id)
        .select(models::Restaurant::as_select())
        .first(conn)
        .await
    {
        Ok(restaurant) => restaurant,
        Err(diesel::result::Error::NotFound) => return Err(ApiError::ReferenceNotFound),
        Err(err) => return Err(err.into()),
    };

    let values = models::NewRestaurantPizza {
        price: payload.price,
        pizza_id: pizza.id,
        restaurant_id: restaurant.id,
    };
    let created: models::RestaurantPizza = conn
        .transaction::<_, ApiError, _>(|conn| {
            async move {
                let restaurant_pizza = insert_into(schema::restaurant_pizzas::table)
                    .values(values)
                    .get_result(conn)
                    .await?;
                Ok(restaurant_pizza)
            }
            .scope_boxed()
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RestaurantPizzaResponse {
            id: created.id,
            price: created.price,
            pizza_id: created.pizza_id,
            restaurant_id: created.restaurant_id,
            pizza,
            restaurant,
        }),
    ))
}
