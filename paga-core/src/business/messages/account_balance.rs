use crate::business::{
    types::RawResponse,
    validation::{self, Validate, ValidationError},
    ServiceMethod, ServiceRequest,
};

/// Balance inquiry for the business or a customer account.
///
/// The platform has not published a response shape for this method, so the
/// body is handed back as a [`RawResponse`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountBalanceRequest {
    pub reference_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_principal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_credentials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_funds: Option<String>,
    #[serde(rename = "Locale", alias = "locale", skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Validate for AccountBalanceRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::reference("referenceNumber", &self.reference_number)?;
        validation::credential_pair(
            ("accountPrincipal", &self.account_principal),
            ("accountCredentials", &self.account_credentials),
        )?;
        validation::locale("Locale", &self.locale)
    }
}

impl ServiceRequest for AccountBalanceRequest {
    const METHOD: ServiceMethod = ServiceMethod::AccountBalance;
    type Response = RawResponse;

    fn reference_number(&self) -> Option<&str> {
        Some(&self.reference_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_alone_is_enough() {
        let req = AccountBalanceRequest {
            reference_number: "BAL1".into(),
            ..Default::default()
        };
        assert_eq!(req.validate(), Ok(()));
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "referenceNumber": "BAL1" })
        );
    }

    #[test]
    fn locale_keeps_capitalised_wire_name() {
        let req = AccountBalanceRequest {
            reference_number: "BAL1".into(),
            locale: Some("en-NG".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["Locale"], "en-NG");

        let bad = AccountBalanceRequest {
            locale: Some("en_NG".into()),
            ..req
        };
        assert!(matches!(
            bad.validate(),
            Err(ValidationError::InvalidLocale { field: "Locale", .. })
        ));
    }
}
