//! In-process storage backing the service when no database is configured,
//! and the integration tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::car::errors::CarError;
use crate::domain::car::models::Car;
use crate::domain::car::ports::CarRepository;
use crate::domain::user::models::Role;
use crate::domain::user::models::RoleId;
use crate::domain::user::models::RoleName;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::RoleRepository;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::AuthError;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        let mut users = self.users.write().await;

        // Check and insert under one write lock so concurrent registrations cannot both win
        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailAlreadyTaken(user.email.to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }
}

/// Role table; `seeded()` mirrors the rows inserted by the SQL migration.
#[derive(Debug)]
pub struct InMemoryRoleRepository {
    roles: Vec<Role>,
}

impl InMemoryRoleRepository {
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            Role {
                id: RoleId(1),
                name: RoleName::Public,
            },
            Role {
                id: RoleId(2),
                name: RoleName::Admin,
            },
            Role {
                id: RoleId(3),
                name: RoleName::Customer,
            },
        ])
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn find_by_id(&self, id: &RoleId) -> Result<Option<Role>, AuthError> {
        Ok(self.roles.iter().find(|r| r.id == *id).cloned())
    }

    async fn find_by_name(&self, name: RoleName) -> Result<Option<Role>, AuthError> {
        Ok(self.roles.iter().find(|r| r.name == name).cloned())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCarRepository {
    cars: RwLock<Vec<Car>>,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn create(&self, car: Car) -> Result<Car, CarError> {
        self.cars.write().await.push(car.clone());
        Ok(car)
    }

    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Car>, CarError> {
        let mut cars = self.cars.read().await.clone();
        cars.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(cars.into_iter().skip(offset).take(limit).collect())
    }

    async fn count(&self) -> Result<u64, CarError> {
        Ok(self.cars.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;
    use crate::domain::car::models::CarId;
    use crate::domain::car::models::CarSize;
    use crate::domain::user::models::EmailAddress;

    fn user(email: &str) -> User {
        User {
            id: UserId::new(),
            name: "A".to_string(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$2b$04$hash".to_string(),
            image: None,
            role_id: RoleId(3),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_user_email_unique() {
        let repository = InMemoryUserRepository::new();

        repository.create(user("a@x.com")).await.unwrap();
        let result = repository.create(user("A@X.com")).await;

        assert!(matches!(result, Err(AuthError::EmailAlreadyTaken(_))));
    }

    #[tokio::test]
    async fn test_user_lookups() {
        let repository = InMemoryUserRepository::new();
        let created = repository.create(user("a@x.com")).await.unwrap();

        let by_id = repository.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(by_id.email.as_str(), "a@x.com");
        assert!(repository.find_by_email("a@x.com").await.unwrap().is_some());
        assert!(repository.find_by_email("b@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seeded_roles() {
        let roles = InMemoryRoleRepository::seeded();

        let customer = roles.find_by_name(RoleName::Customer).await.unwrap().unwrap();
        assert_eq!(customer.id, RoleId(3));
        assert!(roles.find_by_id(&RoleId(42)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_car_listing_newest_first() {
        let repository = InMemoryCarRepository::new();
        let now = Utc::now();

        for i in 0..3 {
            repository
                .create(Car {
                    id: CarId::new(),
                    name: format!("car-{}", i),
                    price: 100,
                    size: CarSize::Small,
                    image: None,
                    available: true,
                    created_at: now + Duration::seconds(i),
                })
                .await
                .unwrap();
        }

        let page = repository.list(1, 5).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].name, "car-1");
        assert_eq!(page[1].name, "car-0");
        assert_eq!(repository.count().await.unwrap(), 3);
    }
}
