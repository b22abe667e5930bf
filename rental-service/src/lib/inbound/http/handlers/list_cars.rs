use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiQuery;
use super::ApiSuccess;
use super::CarData;
use crate::car::errors::CarError;
use crate::domain::car::models::CarPage;
use crate::domain::car::models::PageRequest;
use crate::domain::car::models::Pagination;
use crate::inbound::http::router::AppState;

pub async fn list_cars(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListCarsParams>,
) -> Result<ApiSuccess<ListCarsResponseData>, ApiError> {
    let request = PageRequest::new(params.page, params.page_size).map_err(CarError::from)?;

    state
        .car_service
        .list_cars(request)
        .await
        .map_err(ApiError::from)
        .map(|ref page| ApiSuccess::new(StatusCode::OK, page.into()))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCarsParams {
    page: Option<u32>,
    page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListCarsResponseData {
    pub cars: Vec<CarData>,
    pub meta: MetaData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaData {
    pub pagination: PaginationData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationData {
    pub page: u32,
    pub page_count: u64,
    pub page_size: u32,
    pub count: u64,
}

impl From<&Pagination> for PaginationData {
    fn from(pagination: &Pagination) -> Self {
        Self {
            page: pagination.page,
            page_count: pagination.page_count,
            page_size: pagination.page_size,
            count: pagination.count,
        }
    }
}

impl From<&CarPage> for ListCarsResponseData {
    fn from(page: &CarPage) -> Self {
        Self {
            cars: page.cars.iter().map(CarData::from).collect(),
            meta: MetaData {
                pagination: (&page.pagination).into(),
            },
        }
    }
}
