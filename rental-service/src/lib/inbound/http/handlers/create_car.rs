use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use super::CarData;
use crate::car::errors::CarAttributeError;
use crate::car::errors::CarError;
use crate::domain::car::models::CarSize;
use crate::domain::car::models::CreateCarCommand;
use crate::inbound::http::router::AppState;

pub async fn create_car(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateCarRequest>,
) -> Result<ApiSuccess<CarData>, ApiError> {
    let command = body.try_into_command().map_err(CarError::from)?;

    state
        .car_service
        .create_car(command)
        .await
        .map_err(ApiError::from)
        .map(|ref car| ApiSuccess::new(StatusCode::CREATED, car.into()))
}

/// HTTP request body for adding a car (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCarRequest {
    name: String,
    price: i64,
    size: String,
    #[serde(default)]
    image: Option<String>,
}

impl CreateCarRequest {
    fn try_into_command(self) -> Result<CreateCarCommand, CarAttributeError> {
        let size = self.size.parse::<CarSize>()?;
        CreateCarCommand::new(self.name, self.price, size, self.image)
    }
}
