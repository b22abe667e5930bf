use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::car::errors::CarError;
use crate::domain::car::models::Car;
use crate::domain::car::models::CarId;
use crate::domain::car::models::CarSize;
use crate::domain::car::ports::CarRepository;

#[derive(sqlx::FromRow)]
struct CarRow {
    id: Uuid,
    name: String,
    price: i64,
    size: String,
    image: Option<String>,
    available: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<CarRow> for Car {
    type Error = CarError;

    fn try_from(r: CarRow) -> Result<Self, Self::Error> {
        Ok(Car {
            id: CarId(r.id),
            name: r.name,
            price: r.price,
            size: r.size.parse::<CarSize>()?,
            image: r.image,
            available: r.available,
            created_at: r.created_at,
        })
    }
}

pub struct PostgresCarRepository {
    pool: PgPool,
}

impl PostgresCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PostgresCarRepository {
    async fn create(&self, car: Car) -> Result<Car, CarError> {
        sqlx::query(
            r#"
            INSERT INTO cars (id, name, price, size, image, available, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(car.id.0)
        .bind(&car.name)
        .bind(car.price)
        .bind(car.size.as_str())
        .bind(&car.image)
        .bind(car.available)
        .bind(car.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CarError::DatabaseError(e.to_string()))?;

        Ok(car)
    }

    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Car>, CarError> {
        let rows = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, name, price, size, image, available, created_at
            FROM cars
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CarError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Car::try_from).collect()
    }

    async fn count(&self) -> Result<u64, CarError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CarError::DatabaseError(e.to_string()))?;

        Ok(count.unsigned_abs())
    }
}
