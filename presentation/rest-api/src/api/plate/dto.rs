use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::plate::model::Plate;
use business::domain::plate::value_objects::PlateCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum PlateCategoryDto {
    #[oai(rename = "starter")]
    Starter,
    #[oai(rename = "main")]
    Main,
    #[oai(rename = "dessert")]
    Dessert,
}

impl From<PlateCategory> for PlateCategoryDto {
    fn from(category: PlateCategory) -> Self {
        match category {
            PlateCategory::Starter => PlateCategoryDto::Starter,
            PlateCategory::Main => PlateCategoryDto::Main,
            PlateCategory::Dessert => PlateCategoryDto::Dessert,
        }
    }
}

impl From<PlateCategoryDto> for PlateCategory {
    fn from(dto: PlateCategoryDto) -> Self {
        match dto {
            PlateCategoryDto::Starter => PlateCategory::Starter,
            PlateCategoryDto::Main => PlateCategory::Main,
            PlateCategoryDto::Dessert => PlateCategory::Dessert,
        }
    }
}

/// Presence of price, category and restaurant is checked by the use case so
/// the caller gets the domain message instead of a parse error.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreatePlateRequest {
    pub name: String,
    /// Price in whole currency units, greater than zero
    pub price: Option<i32>,
    pub description: String,
    pub image_url: String,
    pub category: Option<PlateCategoryDto>,
    pub restaurant_id: Option<i64>,
}

/// Only price and description can change after creation.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdatePlateRequest {
    pub price: Option<i32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PlateStatusRequest {
    pub active: bool,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PlateResponse {
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i64>,
    pub name: String,
    pub price: i32,
    pub description: String,
    pub image_url: String,
    pub category: PlateCategoryDto,
    pub active: bool,
    pub restaurant_id: i64,
}

impl From<Plate> for PlateResponse {
    fn from(plate: Plate) -> Self {
        Self {
            id: plate.id,
            name: plate.name,
            price: plate.price,
            description: plate.description,
            image_url: plate.image_url,
            category: plate.category.into(),
            active: plate.active,
            restaurant_id: plate.restaurant_id,
        }
    }
}
