use sqlx::FromRow;

use business::domain::restaurant::model::Restaurant;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct RestaurantEntity {
    pub id: i64,
    pub name: String,
    pub nit: String,
    pub address: String,
    pub phone: String,
    pub logo_url: String,
    pub owner_id: i64,
}

impl RestaurantEntity {
    pub fn into_domain(self) -> Restaurant {
        Restaurant::from_repository(
            self.id,
            self.name,
            self.nit,
            self.address,
            self.phone,
            self.logo_url,
            UserId::new(self.owner_id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_row_into_restaurant() {
        let entity = RestaurantEntity {
            id: 3,
            name: "Pizza Palace".to_string(),
            nit: "123456789".to_string(),
            address: "Main Street 1".to_string(),
            phone: "+1234567890".to_string(),
            logo_url: "https://img.example/pizza.png".to_string(),
            owner_id: 100,
        };

        let restaurant = entity.into_domain();

        assert_eq!(restaurant.id, 3);
        assert_eq!(restaurant.nit, "123456789");
        assert!(restaurant.is_owned_by(UserId::new(100)));
    }
}
