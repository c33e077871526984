mod transport;

pub use transport::{MockTransport, SentRequest};

pub const BASE_URL: &str = "https://mypaga.test/paga-webservices/business-rest/secured";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
