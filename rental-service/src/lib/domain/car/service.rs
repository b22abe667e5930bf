use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::car::errors::CarError;
use crate::domain::car::models::Car;
use crate::domain::car::models::CarId;
use crate::domain::car::models::CarPage;
use crate::domain::car::models::CreateCarCommand;
use crate::domain::car::models::PageRequest;
use crate::domain::car::models::Pagination;
use crate::domain::car::ports::CarRepository;
use crate::domain::car::ports::CarServicePort;

/// Domain service implementation for the car catalogue.
pub struct CarService<CR>
where
    CR: CarRepository,
{
    repository: Arc<CR>,
}

impl<CR> CarService<CR>
where
    CR: CarRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CarServicePort for CarService<CR>
where
    CR: CarRepository,
{
    async fn list_cars(&self, request: PageRequest) -> Result<CarPage, CarError> {
        let count = self.repository.count().await?;
        let cars = self
            .repository
            .list(request.offset(), request.limit())
            .await?;

        Ok(CarPage {
            cars,
            pagination: Pagination::new(request, count),
        })
    }

    async fn create_car(&self, command: CreateCarCommand) -> Result<Car, CarError> {
        let car = Car {
            id: CarId::new(),
            name: command.name,
            price: command.price,
            size: command.size,
            image: command.image,
            available: true,
            created_at: Utc::now(),
        };

        let created_car = self.repository.create(car).await?;
        tracing::info!(car_id = %created_car.id, name = %created_car.name, "Car created");

        Ok(created_car)
    }
}
