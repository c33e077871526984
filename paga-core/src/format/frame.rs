use crate::business::{ServiceMethod, ServiceRequest};

use super::error::{GenericError, PagaError};

/// A validated request ready to be posted to its method endpoint.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceCall {
    pub method: ServiceMethod,
    pub reference_number: Option<String>,
    pub payload: serde_json::Value,
}

impl ServiceCall {
    pub fn new<R: ServiceRequest>(request: &R) -> Result<Self, PagaError> {
        request.validate()?;
        let payload =
            serde_json::to_value(request).map_err(|_| PagaError::Other(GenericError::ParsingError))?;
        Ok(Self {
            method: R::METHOD,
            reference_number: request.reference_number().map(str::to_string),
            payload,
        })
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.method.path())
    }
}

/// A response body received for a method, not yet bound to its contract.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceResult {
    pub method: ServiceMethod,
    pub payload: serde_json::Value,
}
