pub mod errors;
pub mod handler;
pub mod window;

pub use errors::JwtError;
pub use handler::JwtHandler;
pub use window::TokenWindow;
