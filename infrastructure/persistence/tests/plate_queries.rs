//! Runs against a throwaway database created by `sqlx::test` from `DATABASE_URL`.

use sqlx::PgPool;

use business::domain::plate::model::{NewPlateProps, Plate};
use business::domain::plate::repository::{PlateQueryRepository, PlateRepository};
use business::domain::plate::value_objects::PlateCategory;
use business::domain::restaurant::model::{NewRestaurant, NewRestaurantProps};
use business::domain::restaurant::repository::RestaurantRepository;
use business::domain::shared::pagination::PageRequest;
use business::domain::shared::value_objects::UserId;
use persistence::plate::repository::PlateRepositoryPostgres;
use persistence::restaurant::repository::RestaurantRepositoryPostgres;

async fn seed_restaurant(pool: &PgPool) -> i64 {
    let restaurant = NewRestaurant::new(NewRestaurantProps {
        name: "Pizza Palace".to_string(),
        nit: "123456789".to_string(),
        address: "Main Street 1".to_string(),
        phone: "+1234567890".to_string(),
        logo_url: "https://img.example/pizza.png".to_string(),
        owner_id: UserId::new(10),
    })
    .unwrap();

    RestaurantRepositoryPostgres::new(pool.clone())
        .save(&restaurant)
        .await
        .unwrap()
        .id
}

async fn seed_plate(
    repository: &PlateRepositoryPostgres,
    restaurant_id: i64,
    name: &str,
    category: PlateCategory,
    active: bool,
) -> Plate {
    let plate = Plate::new(NewPlateProps {
        name: name.to_string(),
        price: Some(12000),
        description: format!("{} of the house", name),
        image_url: format!("https://img.example/{}.png", name.to_lowercase()),
        category: Some(category),
        restaurant_id: Some(restaurant_id),
    })
    .unwrap();

    let mut saved = repository.save(&plate).await.unwrap();
    if !active {
        saved.active = false;
        saved = repository.save(&saved).await.unwrap();
    }
    saved
}

fn names(plates: &[Plate]) -> Vec<&str> {
    plates.iter().map(|p| p.name.as_str()).collect()
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn should_list_only_active_plates_ordered_by_name(pool: PgPool) {
    let restaurant_id = seed_restaurant(&pool).await;
    let repository = PlateRepositoryPostgres::new(pool.clone());
    seed_plate(&repository, restaurant_id, "Tiramisu", PlateCategory::Dessert, true).await;
    seed_plate(&repository, restaurant_id, "Arepa", PlateCategory::Starter, true).await;
    seed_plate(&repository, restaurant_id, "Lasagna", PlateCategory::Main, false).await;
    seed_plate(&repository, restaurant_id, "Brownie", PlateCategory::Dessert, true).await;

    let plates = repository
        .find_active_by_restaurant(restaurant_id, None, PageRequest::new(0, 10))
        .await
        .unwrap();

    assert_eq!(names(&plates), vec!["Arepa", "Brownie", "Tiramisu"]);
    assert!(plates.iter().all(|p| p.active));
    assert!(plates.iter().all(|p| p.restaurant_id == restaurant_id));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn should_filter_active_plates_by_category(pool: PgPool) {
    let restaurant_id = seed_restaurant(&pool).await;
    let repository = PlateRepositoryPostgres::new(pool.clone());
    seed_plate(&repository, restaurant_id, "Tiramisu", PlateCategory::Dessert, true).await;
    seed_plate(&repository, restaurant_id, "Flan", PlateCategory::Dessert, false).await;
    seed_plate(&repository, restaurant_id, "Arepa", PlateCategory::Starter, true).await;
    seed_plate(&repository, restaurant_id, "Brownie", PlateCategory::Dessert, true).await;

    let plates = repository
        .find_active_by_restaurant(
            restaurant_id,
            Some(PlateCategory::Dessert),
            PageRequest::new(0, 10),
        )
        .await
        .unwrap();

    assert_eq!(names(&plates), vec!["Brownie", "Tiramisu"]);
    assert!(plates.iter().all(|p| p.category == PlateCategory::Dessert));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn should_page_through_active_plates(pool: PgPool) {
    let restaurant_id = seed_restaurant(&pool).await;
    let repository = PlateRepositoryPostgres::new(pool.clone());
    for name in ["Empanada", "Arepa", "Dumplings", "Churros", "Brownie"] {
        seed_plate(&repository, restaurant_id, name, PlateCategory::Starter, true).await;
    }

    let second_page = repository
        .find_active_by_restaurant(restaurant_id, None, PageRequest::new(1, 2))
        .await
        .unwrap();
    let last_page = repository
        .find_active_by_restaurant(restaurant_id, None, PageRequest::new(2, 2))
        .await
        .unwrap();

    assert_eq!(names(&second_page), vec!["Churros", "Dumplings"]);
    assert_eq!(names(&last_page), vec!["Empanada"]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn should_return_empty_list_for_unknown_restaurant(pool: PgPool) {
    let restaurant_id = seed_restaurant(&pool).await;
    let repository = PlateRepositoryPostgres::new(pool.clone());
    seed_plate(&repository, restaurant_id, "Arepa", PlateCategory::Starter, true).await;

    let plates = repository
        .find_active_by_restaurant(restaurant_id + 1000, None, PageRequest::new(0, 10))
        .await
        .unwrap();

    assert!(plates.is_empty());
}
