use crate::business::{
    types::RawResponse,
    validation::{Validate, ValidationError},
    ServiceMethod, ServiceRequest,
};

// No parameters have been published for this method yet.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHistoryRequest {}

impl Validate for TransactionHistoryRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl ServiceRequest for TransactionHistoryRequest {
    const METHOD: ServiceMethod = ServiceMethod::TransactionHistory;
    type Response = RawResponse;

    fn reference_number(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_as_empty_object() {
        let req = TransactionHistoryRequest {};
        assert_eq!(req.validate(), Ok(()));
        assert_eq!(serde_json::to_string(&req).unwrap(), "{}");
    }
}
