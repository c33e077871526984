use chrono::NaiveDate;
use validator::{ValidateEmail, ValidateLength, ValidateRange};

/// Reasons a request contract is refused before it is sent.
///
/// Field names are reported by their wire spelling so a caller can map the
/// error straight back onto the payload it built.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("`{field}` must be a non-empty alphanumeric value, got {value:?}")]
    InvalidReference { field: &'static str, value: String },
    #[error("`{field}` must be a positive finite amount, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },
    #[error("`{principal}` and `{credentials}` must be supplied together")]
    IncompleteCredentials {
        principal: &'static str,
        credentials: &'static str,
    },
    #[error("`{field}` must be a date in dd/mm/yyyy format, got {value:?}")]
    InvalidDate { field: &'static str, value: String },
    #[error("`{field}` must be a ten digit NUBAN account number, got {value:?}")]
    InvalidAccountNumber { field: &'static str, value: String },
    #[error("`{field}` is not a valid email address: {value:?}")]
    InvalidEmail { field: &'static str, value: String },
    #[error("`{field}` is not a valid IETF language tag: {value:?}")]
    InvalidLocale { field: &'static str, value: String },
    #[error("`{field}` must contain only letters, spaces, hyphens or apostrophes, got {value:?}")]
    InvalidName { field: &'static str, value: String },
    #[error("`{field}` must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
    #[error("at least one of `recipientPhoneNumber` or `recipientEmail` is required")]
    MissingRecipientContact,
}

/// Standalone validation for a contract, kept apart from its field layout.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) const DATE_OF_BIRTH_FORMAT: &str = "%d/%m/%Y";
const DATE_OF_BIRTH_LEN: u64 = 10;
const NUBAN_DIGITS: u64 = 10;

/// An optional text field counts as supplied only when it holds something
/// other than whitespace.
pub(crate) fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

pub(crate) fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

pub(crate) fn reference(field: &'static str, value: &str) -> Result<(), ValidationError> {
    required(field, value)?;
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidReference {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn amount(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || !value.validate_range(None, None, Some(0.0), None) {
        return Err(ValidationError::InvalidAmount { field, value });
    }
    Ok(())
}

pub(crate) fn credential_pair(
    principal: (&'static str, &Option<String>),
    credentials: (&'static str, &Option<String>),
) -> Result<(), ValidationError> {
    if is_present(principal.1) != is_present(credentials.1) {
        return Err(ValidationError::IncompleteCredentials {
            principal: principal.0,
            credentials: credentials.0,
        });
    }
    Ok(())
}

pub(crate) fn parse_date_of_birth(value: &str) -> Option<NaiveDate> {
    // %d and %m accept single digits, the wire format does not
    if !value.validate_length(None, None, Some(DATE_OF_BIRTH_LEN)) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_OF_BIRTH_FORMAT).ok()
}

pub(crate) fn date_of_birth(field: &'static str, value: &str) -> Result<(), ValidationError> {
    required(field, value)?;
    match parse_date_of_birth(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        }),
    }
}

pub(crate) fn nuban(field: &'static str, value: &str) -> Result<(), ValidationError> {
    required(field, value)?;
    if !value.validate_length(None, None, Some(NUBAN_DIGITS))
        || !value.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ValidationError::InvalidAccountNumber {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn email(field: &'static str, value: &Option<String>) -> Result<(), ValidationError> {
    let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) else {
        return Ok(());
    };
    if !value.validate_email() {
        return Err(ValidationError::InvalidEmail {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Personal names: letters with single spaces, hyphens or apostrophes
/// between them. No digits or other symbols.
pub(crate) fn personal_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    required(field, value)?;
    let trimmed = value.trim();
    let letters_only = trimmed
        .split([' ', '-', '\''])
        .all(|part| !part.is_empty() && part.chars().all(char::is_alphabetic));
    if !letters_only {
        return Err(ValidationError::InvalidName {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn locale(field: &'static str, value: &Option<String>) -> Result<(), ValidationError> {
    let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) else {
        return Ok(());
    };
    let mut subtags = value.split('-');
    let primary_ok = subtags
        .next()
        .is_some_and(|p| (2..=8).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphabetic()));
    let rest_ok = subtags.all(|s| (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric()));
    if !(primary_ok && rest_ok) {
        return Err(ValidationError::InvalidLocale {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn recipient_contact(
    phone: &Option<String>,
    email_address: &Option<String>,
) -> Result<(), ValidationError> {
    if !is_present(phone) && !is_present(email_address) {
        return Err(ValidationError::MissingRecipientContact);
    }
    email("recipientEmail", email_address)
}

pub(crate) fn max_len(
    field: &'static str,
    value: &Option<String>,
    max: usize,
) -> Result<(), ValidationError> {
    if exceeds(value, max) {
        return Err(ValidationError::FieldTooLong { field, max });
    }
    Ok(())
}

pub(crate) fn exceeds(value: &Option<String>, max: usize) -> bool {
    value
        .as_deref()
        .is_some_and(|v| !v.validate_length(None, Some(max as u64), None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_must_be_alphanumeric() {
        assert!(reference("referenceNumber", "TX1001").is_ok());
        assert_eq!(
            reference("referenceNumber", "   "),
            Err(ValidationError::MissingField("referenceNumber"))
        );
        assert!(matches!(
            reference("referenceNumber", "TX-1001"),
            Err(ValidationError::InvalidReference { .. })
        ));
    }

    #[test]
    fn amount_rejects_zero_negative_and_non_finite() {
        assert!(amount("amount", 0.01).is_ok());
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(amount("amount", bad).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn credential_pair_needs_both_or_neither() {
        let some = Some("08011112222".to_string());
        let blank = Some(" ".to_string());
        assert!(credential_pair(("p", &None), ("c", &None)).is_ok());
        assert!(credential_pair(("p", &some), ("c", &some)).is_ok());
        assert!(credential_pair(("p", &blank), ("c", &None)).is_ok());
        assert_eq!(
            credential_pair(("p", &some), ("c", &None)),
            Err(ValidationError::IncompleteCredentials {
                principal: "p",
                credentials: "c"
            })
        );
        assert!(credential_pair(("p", &None), ("c", &some)).is_err());
    }

    #[test]
    fn date_of_birth_is_strict_dd_mm_yyyy() {
        assert!(date_of_birth("dob", "29/02/2000").is_ok());
        assert!(date_of_birth("dob", "29/02/2001").is_err());
        assert!(date_of_birth("dob", "1/2/1990").is_err());
        assert!(date_of_birth("dob", "1990-02-01").is_err());
        assert_eq!(
            date_of_birth("dob", ""),
            Err(ValidationError::MissingField("dob"))
        );
    }

    #[test]
    fn nuban_is_ten_digits() {
        assert!(nuban("acct", "0123456789").is_ok());
        assert!(nuban("acct", "012345678").is_err());
        assert!(nuban("acct", "01234567a9").is_err());
    }

    #[test]
    fn email_is_checked_only_when_present() {
        assert!(email("e", &None).is_ok());
        assert!(email("e", &Some("ada@example.com".into())).is_ok());
        assert!(email("e", &Some("ada.example.com".into())).is_err());
        assert!(email("e", &Some("@example.com".into())).is_err());
        assert!(email("e", &Some("a da@example.com".into())).is_err());
    }

    #[test]
    fn personal_name_rejects_digits_and_symbols() {
        for ok in ["Ada", "Chukwuemeka", "Mary-Jane", "O'Neil", "Van der Berg", "Ad\u{e9}\u{e8}"] {
            assert!(personal_name("customerFirstName", ok).is_ok(), "{ok} rejected");
        }
        for bad in ["Ada2", "Obi!", "J. Smith", "Ada--Obi", "-Ada"] {
            assert_eq!(
                personal_name("customerFirstName", bad),
                Err(ValidationError::InvalidName {
                    field: "customerFirstName",
                    value: bad.to_string(),
                }),
                "{bad} accepted"
            );
        }
        assert_eq!(
            personal_name("customerLastName", " "),
            Err(ValidationError::MissingField("customerLastName"))
        );
    }

    #[test]
    fn locale_accepts_language_tags() {
        for ok in ["en", "en-NG", "yo", "zh-Hant-TW"] {
            assert!(locale("locale", &Some(ok.into())).is_ok(), "{ok} rejected");
        }
        for bad in ["e", "en_NG", "en-", "123"] {
            assert!(locale("locale", &Some(bad.into())).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn max_len_counts_characters() {
        assert!(max_len("n", &Some("é".repeat(16)), 16).is_ok());
        assert_eq!(
            max_len("n", &Some("x".repeat(17)), 16),
            Err(ValidationError::FieldTooLong { field: "n", max: 16 })
        );
    }
}
