use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::restaurant::model::{NewRestaurant, Restaurant};
use business::domain::restaurant::repository::{
    RestaurantQueryRepository, RestaurantRepository,
};
use business::domain::shared::pagination::PageRequest;

use super::entity::RestaurantEntity;
use crate::error::map_sqlx_error;

const COLUMNS: &str = "id, name, nit, address, phone, logo_url, owner_id";

pub struct RestaurantRepositoryPostgres {
    pool: PgPool,
}

impl RestaurantRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for RestaurantRepositoryPostgres {
    async fn exists_by_tax_id(&self, nit: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM restaurants WHERE nit = $1)")
            .bind(nit)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn save(&self, restaurant: &NewRestaurant) -> Result<Restaurant, RepositoryError> {
        let entity = sqlx::query_as::<_, RestaurantEntity>(&format!(
            r#"INSERT INTO restaurants (name, nit, address, phone, logo_url, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}"#
        ))
        .bind(&restaurant.name)
        .bind(&restaurant.nit)
        .bind(&restaurant.address)
        .bind(&restaurant.phone)
        .bind(&restaurant.logo_url)
        .bind(restaurant.owner_id.value())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }
}

#[async_trait]
impl RestaurantQueryRepository for RestaurantRepositoryPostgres {
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, RepositoryError> {
        let entity = sqlx::query_as::<_, RestaurantEntity>(&format!(
            "SELECT {COLUMNS} FROM restaurants WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(RestaurantEntity::into_domain))
    }

    async fn find_all_ordered_by_name(
        &self,
        page: PageRequest,
    ) -> Result<Vec<Restaurant>, RepositoryError> {
        let entities = sqlx::query_as::<_, RestaurantEntity>(&format!(
            "SELECT {COLUMNS} FROM restaurants ORDER BY name ASC, id ASC LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(page.size()))
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
