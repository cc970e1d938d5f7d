use axum::Router;
use utoipa::OpenApi;

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

// Re-export routers for easier importing
pub use pizza::router as pizza_router;
pub use restaurant::router as restaurant_router;
pub use restaurant_pizza::router as restaurant_pizza_router;

pub fn api_router() -> Router {
    Router::new()
        .merge(restaurant_router())
        .merge(pizza_router())
        .merge(restaurant_pizza_router())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::delete_restaurant,
        pizza::list_pizzas,
        restaurant_pizza::create_restaurant_pizza,
    ),
    components(
        schemas(
            crate::models::Restaurant,
            crate::models::Pizza,
            restaurant::RestaurantDetailResponse,
            restaurant::RestaurantPizzaSummary,
            restaurant_pizza::CreateRestaurantPizzaRequest,
            restaurant_pizza::RestaurantPizzaResponse,
            crate::error::ApiErrorResponse,
            crate::error::ValidationErrorResponse,
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant management endpoints"),
        (name = "pizzas", description = "Pizza listing endpoints"),
        (name = "restaurant_pizzas", description = "Restaurant pizza offering endpoints")
    ),
    info(
        title = "Pizza Restaurants API",
        description = "API for restaurants and the pizzas they offer",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
