pub mod config;
pub mod model;
pub mod service;
pub mod testing;
pub mod ui;

pub use config::ClientConfig;
pub use model::lookup::{validate, LookupForm, LookupOutcome, LookupRequest, ValidationError};
pub use service::gameapi::lookup_client::LookupClient;
pub use ui::widget::LookupWidget;
