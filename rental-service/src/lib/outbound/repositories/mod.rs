pub mod car;
pub mod memory;
pub mod user;

pub use car::PostgresCarRepository;
pub use memory::InMemoryCarRepository;
pub use memory::InMemoryRoleRepository;
pub use memory::InMemoryUserRepository;
pub use user::PostgresRoleRepository;
pub use user::PostgresUserRepository;
