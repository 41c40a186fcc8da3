use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::plate::model::Plate;
use business::domain::plate::repository::{PlateQueryRepository, PlateRepository};
use business::domain::plate::value_objects::PlateCategory;
use business::domain::shared::pagination::PageRequest;

use super::entity::PlateEntity;
use crate::error::map_sqlx_error;

const COLUMNS: &str = "id, name, price, description, image_url, category, active, restaurant_id";

pub struct PlateRepositoryPostgres {
    pool: PgPool,
}

impl PlateRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, plate: &Plate) -> Result<PlateEntity, RepositoryError> {
        sqlx::query_as::<_, PlateEntity>(&format!(
            r#"INSERT INTO plates (name, price, description, image_url, category, active, restaurant_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}"#
        ))
        .bind(&plate.name)
        .bind(plate.price)
        .bind(&plate.description)
        .bind(&plate.image_url)
        .bind(plate.category.to_string())
        .bind(plate.active)
        .bind(plate.restaurant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    /// Name, category and restaurant are immutable after creation.
    async fn update(&self, id: i64, plate: &Plate) -> Result<PlateEntity, RepositoryError> {
        sqlx::query_as::<_, PlateEntity>(&format!(
            r#"UPDATE plates SET price = $2, description = $3, image_url = $4, active = $5
            WHERE id = $1
            RETURNING {COLUMNS}"#
        ))
        .bind(id)
        .bind(plate.price)
        .bind(&plate.description)
        .bind(&plate.image_url)
        .bind(plate.active)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl PlateRepository for PlateRepositoryPostgres {
    async fn exists_by_name_and_restaurant(
        &self,
        name: &str,
        restaurant_id: i64,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM plates WHERE name = $1 AND restaurant_id = $2)",
        )
        .bind(name)
        .bind(restaurant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn save(&self, plate: &Plate) -> Result<Plate, RepositoryError> {
        let entity = match plate.id {
            None => self.insert(plate).await?,
            Some(id) => self.update(id, plate).await?,
        };

        entity.into_domain()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Plate>, RepositoryError> {
        sqlx::query_as::<_, PlateEntity>(&format!("SELECT {COLUMNS} FROM plates WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .map(PlateEntity::into_domain)
            .transpose()
    }
}

#[async_trait]
impl PlateQueryRepository for PlateRepositoryPostgres {
    async fn find_active_by_restaurant(
        &self,
        restaurant_id: i64,
        category: Option<PlateCategory>,
        page: PageRequest,
    ) -> Result<Vec<Plate>, RepositoryError> {
        // A NULL category parameter disables the filter.
        let entities = sqlx::query_as::<_, PlateEntity>(&format!(
            r#"SELECT {COLUMNS} FROM plates
            WHERE restaurant_id = $1 AND active = TRUE AND ($2::TEXT IS NULL OR category = $2)
            ORDER BY name ASC, id ASC
            LIMIT $3 OFFSET $4"#
        ))
        .bind(restaurant_id)
        .bind(category.map(|c| c.to_string()))
        .bind(i64::from(page.size()))
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entities.into_iter().map(PlateEntity::into_domain).collect()
    }
}
