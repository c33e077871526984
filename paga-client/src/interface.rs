use paga_core::format::error::GenericError;

/// Carries an encoded request to the platform and returns the raw body.
///
/// Implementations own connection handling, TLS, authentication headers and
/// any retry policy. `timeout` is in seconds.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post(&mut self, url: String, body: String, timeout: u64) -> Result<String, GenericError>;
}
