pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::api::HttpBackend;
pub use core::app::{App, SiteState, STATUS_CLEAR_DELAY};
pub use core::status::{StatusSlot, StatusToken};
pub use domain::model::{
    ContactField, ContactForm, FileAttachment, QuoteField, QuoteForm, Section, Service, TeamMember,
};
pub use domain::ports::{Backend, ConfigProvider};
pub use utils::error::{Result, SiteError};
