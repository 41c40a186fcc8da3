use crate::domain::plate::errors::PlateError;
use crate::domain::restaurant::model::Restaurant;
use crate::domain::restaurant::repository::RestaurantQueryRepository;
use crate::domain::shared::value_objects::UserId;

/// Mutation being authorized; selects the error reported on mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateAction {
    Create,
    Update,
}

impl PlateAction {
    fn forbidden(self) -> PlateError {
        match self {
            PlateAction::Create => PlateError::CreateRequiresOwner,
            PlateAction::Update => PlateError::UpdateRequiresOwner,
        }
    }
}

/// Resolves the restaurant from storage and checks that `caller` owns it.
///
/// Every plate mutation goes through here; ownership is never taken from
/// the request or from a previously loaded restaurant.
pub async fn ensure_restaurant_owner(
    restaurants: &dyn RestaurantQueryRepository,
    restaurant_id: i64,
    caller: UserId,
    action: PlateAction,
) -> Result<Restaurant, PlateError> {
    let restaurant = restaurants
        .find_by_id(restaurant_id)
        .await?
        .ok_or(PlateError::RestaurantNotFound)?;

    if !restaurant.is_owned_by(caller) {
        return Err(action.forbidden());
    }

    Ok(restaurant)
}
