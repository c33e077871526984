pub(crate) mod lenient;
mod raw_response;
mod receiver_registration_status;

pub use raw_response::RawResponse;
pub use receiver_registration_status::ReceiverRegistrationStatus;
