use serde::{
    de::{
        value::{Error as ValueError, StrDeserializer},
        IntoDeserializer,
    },
    Deserialize,
};

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReceiverRegistrationStatus {
    Registered,
    Unregistered,
}

impl ReceiverRegistrationStatus {
    /// Reads the status the platform reports as free text, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        let upper = value.trim().to_ascii_uppercase();
        let deserializer: StrDeserializer<'_, ValueError> = upper.as_str().into_deserializer();
        Self::deserialize(deserializer).ok()
    }
}
