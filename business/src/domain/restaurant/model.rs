use super::errors::RestaurantError;
use super::validation::{is_valid_name, is_valid_phone};
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub nit: String,
    pub address: String,
    pub phone: String,
    pub logo_url: String,
    pub owner_id: UserId,
}

impl Restaurant {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        nit: String,
        address: String,
        phone: String,
        logo_url: String,
        owner_id: UserId,
    ) -> Self {
        Self {
            id,
            name,
            nit,
            address,
            phone,
            logo_url,
            owner_id,
        }
    }

    /// Ownership predicate behind every plate mutation.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// A restaurant that passed field validation but has no id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurant {
    pub name: String,
    pub nit: String,
    pub address: String,
    pub phone: String,
    pub logo_url: String,
    pub owner_id: UserId,
}

pub struct NewRestaurantProps {
    pub name: String,
    pub nit: String,
    pub address: String,
    pub phone: String,
    pub logo_url: String,
    pub owner_id: UserId,
}

impl NewRestaurant {
    /// Checks the name and then the phone; the first failure wins.
    pub fn new(props: NewRestaurantProps) -> Result<Self, RestaurantError> {
        if !is_valid_name(&props.name) {
            return Err(RestaurantError::NameOnlyDigits);
        }

        if !is_valid_phone(&props.phone) {
            return Err(RestaurantError::InvalidPhone);
        }

        Ok(Self {
            name: props.name,
            nit: props.nit,
            address: props.address,
            phone: props.phone,
            logo_url: props.logo_url,
            owner_id: props.owner_id,
        })
    }
}
