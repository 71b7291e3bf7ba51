use crate::domain::model::{ContactForm, QuoteForm, Service, TeamMember};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The backend HTTP contract this core consumes.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn list_services(&self) -> Result<Vec<Service>>;
    async fn list_team(&self) -> Result<Vec<TeamMember>>;
    async fn submit_contact(&self, form: &ContactForm) -> Result<()>;
    async fn submit_quote(&self, form: &QuoteForm) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn backend_url(&self) -> &str;
}
