pub mod api;
pub mod app;
pub mod status;
pub mod view;

pub use crate::domain::model::{ContactForm, QuoteForm, Service, TeamMember};
pub use crate::domain::ports::{Backend, ConfigProvider};
pub use crate::utils::error::Result;
