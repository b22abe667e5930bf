use async_trait::async_trait;

use crate::domain::car::errors::CarError;
use crate::domain::car::models::Car;
use crate::domain::car::models::CarPage;
use crate::domain::car::models::CreateCarCommand;
use crate::domain::car::models::PageRequest;

/// Port for car catalogue operations.
#[async_trait]
pub trait CarServicePort: Send + Sync + 'static {
    /// Retrieve one page of cars, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_cars(&self, request: PageRequest) -> Result<CarPage, CarError>;

    /// Add a car to the catalogue.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_car(&self, command: CreateCarCommand) -> Result<Car, CarError>;
}

/// Persistence operations for cars.
#[async_trait]
pub trait CarRepository: Send + Sync + 'static {
    async fn create(&self, car: Car) -> Result<Car, CarError>;

    /// Retrieve at most `limit` cars after skipping `offset`, newest first.
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Car>, CarError>;

    /// Total number of cars.
    async fn count(&self) -> Result<u64, CarError>;
}
