use crate::business::{
    types::RawResponse,
    validation::{Validate, ValidationError},
    ServiceMethod, ServiceRequest,
};

// No parameters have been published for this method yet.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentTransactionHistoryRequest {}

impl Validate for RecentTransactionHistoryRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl ServiceRequest for RecentTransactionHistoryRequest {
    const METHOD: ServiceMethod = ServiceMethod::RecentTransactionHistory;
    type Response = RawResponse;

    fn reference_number(&self) -> Option<&str> {
        None
    }
}
