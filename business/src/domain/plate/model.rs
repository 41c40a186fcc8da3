use super::errors::PlateError;
use super::value_objects::PlateCategory;

#[derive(Debug, Clone, PartialEq)]
pub struct Plate {
    /// `None` until the plate has been persisted.
    pub id: Option<i64>,
    pub name: String,
    pub price: i32,
    pub description: String,
    pub image_url: String,
    pub category: PlateCategory,
    pub active: bool,
    pub restaurant_id: i64,
}

pub struct NewPlateProps {
    pub name: String,
    pub price: Option<i32>,
    pub description: String,
    pub image_url: String,
    pub category: Option<PlateCategory>,
    pub restaurant_id: Option<i64>,
}

impl Plate {
    /// Validates the fields in a fixed order and builds an active, unsaved plate.
    pub fn new(props: NewPlateProps) -> Result<Self, PlateError> {
        if props.name.trim().is_empty() {
            return Err(PlateError::NameRequired);
        }
        let price = validate_price(props.price)?;
        validate_description(&props.description)?;
        if props.image_url.trim().is_empty() {
            return Err(PlateError::ImageUrlRequired);
        }
        let category = props.category.ok_or(PlateError::CategoryRequired)?;
        let restaurant_id = props.restaurant_id.ok_or(PlateError::RestaurantIdRequired)?;

        Ok(Self {
            id: None,
            name: props.name,
            price,
            description: props.description,
            image_url: props.image_url,
            category,
            active: true,
            restaurant_id,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: i64,
        name: String,
        price: i32,
        description: String,
        image_url: String,
        category: PlateCategory,
        active: bool,
        restaurant_id: i64,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            price,
            description,
            image_url,
            category,
            active,
            restaurant_id,
        }
    }

    /// Replaces price and description; every other field is left as is.
    pub fn change_details(
        &mut self,
        price: Option<i32>,
        description: Option<String>,
    ) -> Result<(), PlateError> {
        let price = validate_price(price)?;
        let description = description.unwrap_or_default();
        validate_description(&description)?;

        self.price = price;
        self.description = description;
        Ok(())
    }
}

fn validate_price(price: Option<i32>) -> Result<i32, PlateError> {
    match price {
        Some(p) if p > 0 => Ok(p),
        _ => Err(PlateError::PriceNotPositive),
    }
}

fn validate_description(description: &str) -> Result<(), PlateError> {
    if description.trim().is_empty() {
        return Err(PlateError::DescriptionRequired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn margherita() -> NewPlateProps {
        NewPlateProps {
            name: "Margherita".to_string(),
            price: Some(15000),
            description: "Tomato, mozzarella and basil".to_string(),
            image_url: "https://img.example/margherita.png".to_string(),
            category: Some(PlateCategory::Main),
            restaurant_id: Some(1),
        }
    }

    #[test]
    fn should_create_active_unsaved_plate() {
        let plate = Plate::new(margherita()).unwrap();

        assert_eq!(plate.id, None);
        assert!(plate.active);
        assert_eq!(plate.price, 15000);
        assert_eq!(plate.restaurant_id, 1);
    }

    #[test]
    fn should_reject_fields_in_order() {
        let mut props = margherita();
        props.name = " ".to_string();
        props.price = None;
        assert!(matches!(Plate::new(props), Err(PlateError::NameRequired)));

        let mut props = margherita();
        props.price = Some(0);
        props.description = String::new();
        assert!(matches!(Plate::new(props), Err(PlateError::PriceNotPositive)));

        let mut props = margherita();
        props.description = "\t".to_string();
        props.image_url = String::new();
        assert!(matches!(
            Plate::new(props),
            Err(PlateError::DescriptionRequired)
        ));

        let mut props = margherita();
        props.image_url = " ".to_string();
        props.category = None;
        assert!(matches!(Plate::new(props), Err(PlateError::ImageUrlRequired)));

        let mut props = margherita();
        props.category = None;
        props.restaurant_id = None;
        assert!(matches!(Plate::new(props), Err(PlateError::CategoryRequired)));

        let mut props = margherita();
        props.restaurant_id = None;
        assert!(matches!(
            Plate::new(props),
            Err(PlateError::RestaurantIdRequired)
        ));
    }

    #[test]
    fn should_change_only_price_and_description() {
        let mut plate = Plate::from_repository(
            7,
            "Tiramisu".to_string(),
            9000,
            "Coffee dessert".to_string(),
            "https://img.example/tiramisu.png".to_string(),
            PlateCategory::Dessert,
            false,
            3,
        );

        plate
            .change_details(Some(9500), Some("Mascarpone and coffee".to_string()))
            .unwrap();

        assert_eq!(plate.price, 9500);
        assert_eq!(plate.description, "Mascarpone and coffee");
        assert_eq!(plate.name, "Tiramisu");
        assert_eq!(plate.category, PlateCategory::Dessert);
        assert!(!plate.active);
        assert_eq!(plate.restaurant_id, 3);
    }

    #[test]
    fn should_leave_plate_untouched_when_change_is_invalid() {
        let mut plate = Plate::from_repository(
            7,
            "Tiramisu".to_string(),
            9000,
            "Coffee dessert".to_string(),
            "https://img.example/tiramisu.png".to_string(),
            PlateCategory::Dessert,
            true,
            3,
        );

        let result = plate.change_details(Some(9500), None);

        assert!(matches!(result, Err(PlateError::DescriptionRequired)));
        assert_eq!(plate.price, 9000);
    }

    proptest! {
        #[test]
        fn non_positive_prices_are_rejected(price in i32::MIN..=0) {
            let mut props = margherita();
            props.price = Some(price);
            prop_assert!(matches!(Plate::new(props), Err(PlateError::PriceNotPositive)));
        }

        #[test]
        fn positive_prices_are_kept(price in 1..=i32::MAX) {
            let mut props = margherita();
            props.price = Some(price);
            prop_assert_eq!(Plate::new(props).unwrap().price, price);
        }
    }
}
