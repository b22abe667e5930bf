use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::car::errors::CarAttributeError;
use crate::domain::car::errors::PageError;

/// Rentable car listed in the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: CarId,
    pub name: String,
    pub price: i64,
    pub size: CarSize,
    pub image: Option<String>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

/// Car unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarId(pub Uuid);

impl CarId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CarId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarSize {
    Small,
    Medium,
    Large,
}

impl CarSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarSize::Small => "SMALL",
            CarSize::Medium => "MEDIUM",
            CarSize::Large => "LARGE",
        }
    }
}

impl FromStr for CarSize {
    type Err = CarAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SMALL" => Ok(CarSize::Small),
            "MEDIUM" => Ok(CarSize::Medium),
            "LARGE" => Ok(CarSize::Large),
            _ => Err(CarAttributeError::UnknownSize(s.to_string())),
        }
    }
}

impl fmt::Display for CarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    pub const DEFAULT_PAGE_SIZE: u32 = 10;
    pub const MAX_PAGE_SIZE: u32 = 100;

    /// Build a page request; missing values fall back to page 1 and
    /// [`Self::DEFAULT_PAGE_SIZE`].
    ///
    /// # Errors
    /// * `PageOutOfRange` - Page is 0
    /// * `PageSizeOutOfRange` - Page size is 0 or above [`Self::MAX_PAGE_SIZE`]
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Result<Self, PageError> {
        let page = page.unwrap_or(1);
        let page_size = page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE);

        if page == 0 {
            return Err(PageError::PageOutOfRange);
        }
        if page_size == 0 || page_size > Self::MAX_PAGE_SIZE {
            return Err(PageError::PageSizeOutOfRange {
                max: Self::MAX_PAGE_SIZE,
                actual: page_size,
            });
        }

        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u64,
    pub count: u64,
}

impl Pagination {
    pub fn new(request: PageRequest, count: u64) -> Self {
        Self {
            page: request.page(),
            page_size: request.page_size(),
            page_count: count.div_ceil(request.limit()),
            count,
        }
    }
}

/// One page of the car catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct CarPage {
    pub cars: Vec<Car>,
    pub pagination: Pagination,
}

/// Command to add a car to the catalogue with validated fields.
#[derive(Debug)]
pub struct CreateCarCommand {
    pub name: String,
    pub price: i64,
    pub size: CarSize,
    pub image: Option<String>,
}

impl CreateCarCommand {
    /// # Errors
    /// * `EmptyName` - Name is blank
    /// * `NegativePrice` - Price is below zero
    pub fn new(
        name: String,
        price: i64,
        size: CarSize,
        image: Option<String>,
    ) -> Result<Self, CarAttributeError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CarAttributeError::EmptyName);
        }
        if price < 0 {
            return Err(CarAttributeError::NegativePrice(price));
        }

        Ok(Self {
            name,
            price,
            size,
            image,
        })
    }
}
