use diesel::insert_into;
use diesel_async::RunQueryDsl;
use dotenvy::dotenv;
use tracing::info;

use pizza_restaurants_service::{establish_connection, models, run_migrations, schema};

pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    run_migrations().await;

    let conn = &mut establish_connection().await;

    let restaurants: Vec<models::Restaurant> = insert_into(schema::restaurants::table)
        .values(vec![
            models::NewRestaurant {
                name: "Luigi's Brick Oven".to_string(),
                address: "12 Mulberry Street".to_string(),
            },
            models::NewRestaurant {
                name: "Capri Corner".to_string(),
                address: "48 Bleecker Street".to_string(),
            },
            models::NewRestaurant {
                name: "The Dough Room".to_string(),
                address: "230 Driggs Avenue".to_string(),
            },
        ])
        .get_results(conn)
        .await?;

    let pizzas: Vec<models::Pizza> = insert_into(schema::pizzas::table)
        .values(vec![
            models::NewPizza {
                name: "Margherita".to_string(),
                ingredients: "Dough, Tomato Sauce, Mozzarella, Basil".to_string(),
            },
            models::NewPizza {
                name: "Diavola".to_string(),
                ingredients: "Dough, Tomato Sauce, Mozzarella, Spicy Salami".to_string(),
            },
            models::NewPizza {
                name: "Quattro Formaggi".to_string(),
                ingredients: "Dough, Mozzarella, Gorgonzola, Parmesan, Fontina".to_string(),
            },
            models::NewPizza {
                name: "Marinara".to_string(),
                ingredients: "Dough, Tomato Sauce, Garlic, Oregano".to_string(),
            },
        ])
        .get_results(conn)
        .await?;

    let offerings = vec![
        models::NewRestaurantPizza {
            price: 12,
            pizza_id: pizzas[0].id,
            restaurant_id: restaurants[0].id,
        },
        models::NewRestaurantPizza {
            price: 15,
            pizza_id: pizzas[1].id,
            restaurant_id: restaurants[0].id,
        },
        models::NewRestaurantPizza {
            price: 11,
            pizza_id: pizzas[0].id,
            restaurant_id: restaurants[1].id,
        },
        models::NewRestaurantPizza {
            price: 17,
            pizza_id: pizzas[2].id,
            restaurant_id: restaurants[1].id,
        },
        models::NewRestaurantPizza {
            price: 9,
            pizza_id: pizzas[3].id,
            restaurant_id: restaurants[2].id,
        },
        models::NewRestaurantPizza {
            price: 14,
            pizza_id: pizzas[1].id,
            restaurant_id: restaurants[2].id,
        },
    ];
    insert_into(schema::restaurant_pizzas::table)
        .values(&offerings)
        .execute(conn)
        .await?;

    info!(
        "seeded {} restaurants, {} pizzas, {} offerings",
        restaurants.len(),
        pizzas.len(),
        offerings.len()
    );

    Ok(())
}
