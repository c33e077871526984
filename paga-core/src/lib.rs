pub mod business;

pub mod format {
    pub mod error;
    pub mod frame;
    pub mod message;
}
