use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::business::{ServiceMethod, ServiceRequest, ServiceResponse};

use super::{
    error::PagaError,
    frame::{ServiceCall, ServiceResult},
};

pub trait EncodeDecode {
    fn encode(&self) -> String;
}

impl EncodeDecode for ServiceCall {
    fn encode(&self) -> String {
        self.payload.to_string()
    }
}

impl EncodeDecode for ServiceResult {
    fn encode(&self) -> String {
        self.payload.to_string()
    }
}

impl ServiceResult {
    pub fn decode(method: ServiceMethod, body: &str) -> Result<Self, PagaError> {
        let payload: serde_json::Value =
            serde_json::from_str(body).map_err(|e| PagaError::Malformed {
                method,
                reason: format!("JSON parse error: {}", e),
            })?;
        if !payload.is_object() {
            return Err(PagaError::Malformed {
                method,
                reason: "Expected JSON object".into(),
            });
        }
        Ok(Self { method, payload })
    }

    /// Binds the payload to `T`, first moving keys onto the spelling `T`
    /// serializes with (see [`align_keys`]).
    pub fn into_response<T: DeserializeOwned + Serialize + Default>(
        mut self,
    ) -> Result<T, PagaError> {
        let method = self.method;
        if let (Ok(Value::Object(shape)), Value::Object(payload)) =
            (serde_json::to_value(T::default()), &mut self.payload)
        {
            align_keys(payload, &shape);
        }
        serde_json::from_value(self.payload).map_err(|e| PagaError::Malformed {
            method,
            reason: e.to_string(),
        })
    }
}

/// Renames payload keys that differ from a key of `shape` only in ASCII case,
/// or that use the correct spelling of `refernceNumber`.
///
/// When the shape's own spelling is already present and not null the other
/// spelling is dropped; otherwise it takes the shape's place.
fn align_keys(payload: &mut Map<String, Value>, shape: &Map<String, Value>) {
    let foreign: Vec<String> = payload
        .keys()
        .filter(|key| !shape.contains_key(key.as_str()))
        .cloned()
        .collect();
    for key in foreign {
        let wanted = match key.as_str() {
            "referenceNumber" => "refernceNumber",
            other => other,
        };
        let Some(target) = shape.keys().find(|k| k.eq_ignore_ascii_case(wanted)) else {
            continue;
        };
        let Some(value) = payload.remove(&key) else {
            continue;
        };
        if payload.get(target).is_none_or(Value::is_null) {
            payload.insert(target.clone(), value);
        }
    }
}

/// Decodes the body returned for `request` and checks that the platform
/// echoed its reference number.
///
/// An empty echoed reference is accepted: shapes without a published
/// contract may not carry one.
pub fn decode_response<R: ServiceRequest>(
    request: &R,
    body: &str,
) -> Result<R::Response, PagaError> {
    let response: R::Response = ServiceResult::decode(R::METHOD, body)?.into_response()?;
    if let Some(sent) = request.reference_number() {
        let received = response.reference_number();
        if !received.is_empty() && received != sent {
            return Err(PagaError::ReferenceMismatch {
                method: R::METHOD,
                sent: sent.to_string(),
                received: received.to_string(),
            });
        }
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::{
        messages::{
            money_transfer::MoneyTransferRequest,
            register_customer::{RegisterCustomerRequest, RegisterCustomerResponse},
            transaction_history::TransactionHistoryRequest,
        },
        ValidationError,
    };

    fn register() -> RegisterCustomerRequest {
        RegisterCustomerRequest {
            reference_number: "TX1001".into(),
            customer_principal: "08011112222".into(),
            customer_credentials: "08011112222".into(),
            customer_first_name: "Ada".into(),
            customer_last_name: "Obi".into(),
            customer_date_of_birth: "01/01/1985".into(),
            account_details: None,
        }
    }

    #[test]
    fn call_is_built_only_from_valid_requests() {
        let call = ServiceCall::new(&MoneyTransferRequest::new("TX1001", 500.0, "08011112222")).unwrap();
        assert_eq!(call.method, ServiceMethod::MoneyTransfer);
        assert_eq!(call.reference_number.as_deref(), Some("TX1001"));
        assert_eq!(
            call.url("https://example.test/paga-webservices/business-rest/secured/"),
            "https://example.test/paga-webservices/business-rest/secured/moneyTransfer"
        );
        assert!(call.encode().contains("\"destinationAccount\":\"08011112222\""));

        let err = ServiceCall::new(&MoneyTransferRequest::new("TX1001", 0.0, "08011112222")).unwrap_err();
        assert!(matches!(
            err,
            PagaError::Validation(ValidationError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn decodes_documented_register_customer_payload() {
        let res = decode_response(
            &register(),
            r#"{"responseCode":"0","refernceNumber":"TX1001","message":"SUCCESS"}"#,
        )
        .unwrap();
        assert_eq!(
            res,
            RegisterCustomerResponse {
                reference_number: "TX1001".into(),
                message: "SUCCESS".into(),
                response_code: "0".into(),
            }
        );
    }

    #[test]
    fn rejects_foreign_reference() {
        let err = decode_response(
            &register(),
            r#"{"responseCode":"0","refernceNumber":"TX9999","message":"SUCCESS"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            PagaError::ReferenceMismatch {
                method: ServiceMethod::RegisterCustomer,
                sent: "TX1001".into(),
                received: "TX9999".into(),
            }
        );
    }

    #[test]
    fn rejects_non_object_bodies() {
        for body in ["not json", "[1,2]", "\"0\""] {
            assert!(matches!(
                decode_response(&register(), body),
                Err(PagaError::Malformed { .. })
            ));
        }
    }

    #[test]
    fn wrong_field_type_is_malformed() {
        let err = decode_response(&register(), r#"{"responseCode":{"code":0}}"#).unwrap_err();
        assert!(matches!(
            err,
            PagaError::Malformed {
                method: ServiceMethod::RegisterCustomer,
                ..
            }
        ));
    }

    #[test]
    fn numeric_code_and_nulls_decode() {
        let res = decode_response(
            &register(),
            r#"{"responseCode":0,"refernceNumber":null,"message":null}"#,
        )
        .unwrap();
        assert_eq!(res.response_code, "0");
        assert_eq!(res.reference_number, "");
        assert_eq!(res.is_success(), Some(true));
    }

    #[test]
    fn keys_are_matched_without_regard_to_case() {
        let res = decode_response(
            &MoneyTransferRequest::new("TX1001", 500.0, "08011112222"),
            r#"{"ResponseCode":"0","referenceNumber":"TX1001","fee":12.5,"message":"ok",
                "TransactionId":"JX12P"}"#,
        )
        .unwrap();
        assert_eq!(res.response_code, "0");
        assert_eq!(res.reference_number, "TX1001");
        assert_eq!(res.fee, 12.5);
        assert_eq!(res.message, "ok");
        assert_eq!(res.transaction_id, "JX12P");
    }

    #[test]
    fn both_spellings_of_one_field_decode_once() {
        let res = decode_response(
            &MoneyTransferRequest::new("TX1001", 500.0, "08011112222"),
            r#"{"responseCode":"0","refernceNumber":"TX1001","Fee":10.0,"fee":10.0,
                "Message":null,"message":"sent"}"#,
        )
        .unwrap();
        assert_eq!(res.fee, 10.0);
        assert_eq!(res.message, "sent");

        let res = decode_response(
            &register(),
            r#"{"responseCode":"0","refernceNumber":"TX1001","referenceNumber":"TX9999"}"#,
        )
        .unwrap();
        assert_eq!(res.reference_number, "TX1001");
    }

    #[test]
    fn history_passes_body_through() {
        let res = decode_response(
            &TransactionHistoryRequest {},
            r#"{"responseCode":"0","items":[{"amount":10.0}]}"#,
        )
        .unwrap();
        assert_eq!(res.response_code(), "0");
        assert_eq!(res.0["items"][0]["amount"], 10.0);
    }

    #[test]
    fn result_encodes_payload_only() {
        let body = r#"{"responseCode":"0","refernceNumber":"TX1001","message":"SUCCESS"}"#;
        let result = ServiceResult::decode(ServiceMethod::RegisterCustomer, body).unwrap();
        assert_eq!(result.method, ServiceMethod::RegisterCustomer);
        let back = ServiceResult::decode(ServiceMethod::RegisterCustomer, &result.encode()).unwrap();
        assert_eq!(back, result);
    }
}
