pub mod errors;
pub mod products;

pub use self::errors::{ServiceError, ServiceResult};
