use serde::{de::DeserializeOwned, Serialize};

use super::{validation::Validate, ServiceMethod};

/// A request contract bound to its method endpoint and response shape.
pub trait ServiceRequest: Serialize + Validate {
    const METHOD: ServiceMethod;
    /// `Default` doubles as the shape's key layout when aligning a body.
    type Response: ServiceResponse + DeserializeOwned + Serialize + Default;

    /// Correlation value the platform echoes back, if this shape carries one.
    fn reference_number(&self) -> Option<&str>;
}

/// Common read surface over every response contract.
///
/// Success codes are declared per shape. Only shapes whose documentation
/// fixes a success code answer [`ServiceResponse::is_success`]; for the rest
/// the caller has to interpret `response_code` itself.
pub trait ServiceResponse {
    fn response_code(&self) -> &str;
    fn reference_number(&self) -> &str;
    fn message(&self) -> &str;

    fn success_code(&self) -> Option<&'static str> {
        None
    }

    fn is_success(&self) -> Option<bool> {
        self.success_code().map(|code| code == self.response_code())
    }
}

macro_rules! impl_service_response {
    ($response:ty, message = $message:ident $(, success = $code:literal)?) => {
        impl $crate::business::ServiceResponse for $response {
            fn response_code(&self) -> &str {
                &self.response_code
            }
            fn reference_number(&self) -> &str {
                &self.reference_number
            }
            fn message(&self) -> &str {
                &self.$message
            }
            $(
                fn success_code(&self) -> Option<&'static str> {
                    Some($code)
                }
            )?
        }
    };
    ($response:ty) => {
        impl $crate::business::ServiceResponse for $response {
            fn response_code(&self) -> &str {
                &self.response_code
            }
            fn reference_number(&self) -> &str {
                &self.reference_number
            }
            fn message(&self) -> &str {
                ""
            }
        }
    };
}

pub(crate) use impl_service_response;
