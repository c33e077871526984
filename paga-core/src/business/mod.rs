pub mod messages;
pub mod method;
pub mod service;
pub mod types;
pub mod validation;

pub use method::ServiceMethod;
pub use service::{ServiceRequest, ServiceResponse};
pub use validation::{Validate, ValidationError};
