use axum::{extract::Path, http::StatusCode, response::Json, routing::get, Router};
use diesel::{delete, prelude::*};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::error::{ApiError, ApiErrorResponse};
use crate::{establish_connection, models, schema};

/// Restaurant detail with its offerings expanded.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantDetailResponse {
    /// Unique identifier for the restaurant
    pub id: i32,
    /// Name of the restaurant
    pub name: String,
    /// Street address of the restaurant
    pub address: String,
    /// Offerings of this restaurant, each with its pizza expanded
    pub restaurant_pizzas: Vec<RestaurantPizzaSummary>,
}

/// One offering nested under a restaurant detail.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaSummary {
    /// Unique identifier for the offering
    pub id: i32,
    /// The pizza being offered
    pub pizza: models::Pizza,
}

pub fn router() -> Router {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List of restaurants", body = Vec<models::Restaurant>),
    ),
    tag = "restaurants"
)]
#[instrument]
pub async fn list_restaurants() -> Result<Json<Vec<models::Restaurant>>, ApiError> {
    use crate::schema::restaurants::dsl::*;

    let conn = &mut establish_connection().await;
    let results = restaurants
        .select(models::Restaurant::as_select())
        .load(conn)
        .await?;

    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant detail", body = RestaurantDetailResponse),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID"),
    ),
    tag = "restaurants"
)]
#[instrument]
pub async fn get_restaurant(
    Path(restaurant_id): Path<i32>,
) -> Result<Json<RestaurantDetailResponse>, ApiError> {
    let conn = &mut establish_connection().await;

    let restaurant = match schema::restaurants::table
        .find(restaurant_id)
        .select(models::Restaurant::as_select())
        .first(conn)
        .await
    {
        Ok(restaurant) => restaurant,
        Err(diesel::result::Error::NotFound) => return Err(ApiError::RestaurantNotFound),
        Err(err) => return Err(err.into()),
    };

    let restaurant_pizzas = models::RestaurantPizza::belonging_to(&restaurant)
        .select(models::RestaurantPizza::as_select())
        .load(conn)
        .await?;

    let mut entries = Vec::with_capacity(restaurant_pizzas.len());
    for restaurant_pizza in restaurant_pizzas {
        let pizza = schema::pizzas::table
            .find(restaurant_pizza.pizza_id)
            .select(models::Pizza::as_select())
            .first(conn)
            .await?;
        entries.push(RestaurantPizzaSummary {
            id: restaurant_pizza.id,
            pizza,
        });
    }

    Ok(Json(RestaurantDetailResponse {
        id: restaurant.id,
        name: restaurant.name,
        address: restaurant.address,
        restaurant_pizzas: entries,
    }))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 204, description = "Restaurant deleted"),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID"),
    ),
    tag = "restaurants"
)]
#[instrument]
pub async fn delete_restaurant(Path(restaurant_id): Path<i32>) -> Result<StatusCode, ApiError> {
    let conn = &mut establish_connection().await;

    let restaurant = match schema::restaurants::table
        .find(restaurant_id)
        .select(models::Restaurant::as_select())
        .first(conn)
        .await
    {
        Ok(restaurant) => restaurant,
        Err(diesel::result::Error::NotFound) => return Err(ApiError::RestaurantNotFound),
        Err(err) => return Err(err.into()),
    };

    let rid = restaurant.id;
    conn.transaction::<_, ApiError, _>(|conn| {
        async move {
            delete(
                schema::restaurant_pizzas::table
                    .filter(schema::restaurant_pizzas::restaurant_id.eq(rid)),
            )
            .execute(conn)
            .await?;
            delete(schema::restaurants::table.find(rid))
                .execute(conn)
                .await?;
            Ok(())
        }
        .scope_boxed()
    })
    .await?;

    Ok(StatusCode::NO_CONTENT)
}
