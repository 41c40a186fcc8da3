use poem_openapi::Object;

use business::domain::restaurant::model::Restaurant;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    /// Restaurant name (may contain digits, but not only digits)
    pub name: String,
    /// Tax identification number, unique across restaurants
    pub nit: String,
    pub address: String,
    /// Up to 13 digits, optionally prefixed by '+'
    pub phone: String,
    pub logo_url: String,
    /// Users-service id of the owner; must hold the OWNER role
    pub owner_id: i64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub id: i64,
    pub name: String,
    pub nit: String,
    pub address: String,
    pub phone: String,
    pub logo_url: String,
    pub owner_id: i64,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            nit: restaurant.nit,
            address: restaurant.address,
            phone: restaurant.phone,
            logo_url: restaurant.logo_url,
            owner_id: restaurant.owner_id.value(),
        }
    }
}

/// Public listing entry.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct RestaurantListItem {
    pub name: String,
    pub logo_url: String,
}

impl From<Restaurant> for RestaurantListItem {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            name: restaurant.name,
            logo_url: restaurant.logo_url,
        }
    }
}
