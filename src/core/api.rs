use crate::domain::model::{ContactForm, QuoteForm, Service, TeamMember};
use crate::domain::ports::{Backend, ConfigProvider};
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::multipart;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// reqwest implementation of the [`Backend`] port.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.backend_url())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!("GET {}", self.endpoint(path));
        let response = self.client.get(self.endpoint(path)).send().await?;

        tracing::debug!("{} responded with status {}", path, response.status());
        if !response.status().is_success() {
            return Err(SiteError::BackendStatus {
                endpoint: path.to_string(),
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    fn check_status(path: &str, status: reqwest::StatusCode) -> Result<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(SiteError::BackendStatus {
                endpoint: path.to_string(),
                status,
            })
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_services(&self) -> Result<Vec<Service>> {
        self.get_json("/api/services").await
    }

    async fn list_team(&self) -> Result<Vec<TeamMember>> {
        self.get_json("/api/team").await
    }

    async fn submit_contact(&self, form: &ContactForm) -> Result<()> {
        let path = "/api/contact";
        tracing::debug!("POST {}", self.endpoint(path));
        let response = self.client.post(self.endpoint(path)).json(form).send().await?;
        Self::check_status(path, response.status())
    }

    async fn submit_quote(&self, form: &QuoteForm) -> Result<()> {
        let path = "/api/quote";

        // The selected service ids travel as one JSON-stringified text part.
        let mut body = multipart::Form::new()
            .text("name", form.name.clone())
            .text("email", form.email.clone())
            .text("phone", form.phone.clone())
            .text("company", form.company.clone())
            .text("services", serde_json::to_string(&form.services)?)
            .text("project_description", form.project_description.clone())
            .text("budget_range", form.budget_range.clone())
            .text("timeline", form.timeline.clone());

        // Each attachment is its own part under the repeated `files` name.
        for file in &form.files {
            let part = multipart::Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
            body = body.part("files", part);
        }

        tracing::debug!(
            "POST {} ({} attachment(s))",
            self.endpoint(path),
            form.files.len()
        );
        let response = self
            .client
            .post(self.endpoint(path))
            .multipart(body)
            .send()
            .await?;
        Self::check_status(path, response.status())
    }
}
