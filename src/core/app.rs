use crate::core::status::{StatusSlot, StatusToken};
use crate::domain::model::{
    ContactField, ContactForm, FileAttachment, QuoteField, QuoteForm, Section, Service, TeamMember,
};
use crate::domain::ports::Backend;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// How long a submission status message stays visible.
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(5);

// User-facing status messages, kept verbatim from the site copy.
pub const CONTACT_SUCCESS_MESSAGE: &str =
    "¡Mensaje enviado exitosamente! Te contactaremos pronto.";
pub const CONTACT_FAILURE_MESSAGE: &str = "Error al enviar el mensaje. Inténtalo de nuevo.";
pub const QUOTE_SUCCESS_MESSAGE: &str =
    "¡Solicitud de cotización enviada exitosamente! Te contactaremos pronto.";
pub const QUOTE_FAILURE_MESSAGE: &str = "Error al enviar la solicitud. Inténtalo de nuevo.";

/// All mutable UI state: loaded content, both forms, the shared status slot
/// and the navigation section. Mutated only through [`App`] methods.
#[derive(Debug, Default)]
pub struct SiteState {
    pub services: Vec<Service>,
    pub team: Vec<TeamMember>,
    pub contact: ContactForm,
    pub quote: QuoteForm,
    pub contact_submitting: bool,
    pub quote_submitting: bool,
    pub status: StatusSlot,
    pub active_section: Section,
    pub scroll_request: Option<Section>,
}

/// Orchestrates the content loader, the two submission pipelines and
/// navigation over a [`Backend`] port.
pub struct App<B: Backend> {
    backend: B,
    state: Arc<Mutex<SiteState>>,
    status_clear_delay: Duration,
}

impl<B: Backend> App<B> {
    pub fn new(backend: B) -> Self {
        Self::with_status_delay(backend, STATUS_CLEAR_DELAY)
    }

    /// Same as [`App::new`] with an injectable status-clear delay.
    pub fn with_status_delay(backend: B, status_clear_delay: Duration) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(SiteState::default())),
            status_clear_delay,
        }
    }

    pub fn state(&self) -> Arc<Mutex<SiteState>> {
        Arc::clone(&self.state)
    }

    /// Fetches the two content collections once, independently. A failure on
    /// either side is logged and leaves that collection unchanged; the other
    /// is unaffected. Never retried automatically.
    pub async fn load_content(&self) {
        let (services, team) = tokio::join!(self.backend.list_services(), self.backend.list_team());

        let mut state = self.state.lock().await;
        match services {
            Ok(list) => {
                tracing::info!("loaded {} services", list.len());
                state.services = list;
            }
            Err(e) => tracing::warn!("failed to load services: {}", e),
        }
        match team {
            Ok(list) => {
                tracing::info!("loaded {} team members", list.len());
                state.team = list;
            }
            Err(e) => tracing::warn!("failed to load team: {}", e),
        }
    }

    pub async fn set_contact_field(&self, field: ContactField, value: impl Into<String>) {
        self.state.lock().await.contact.set_field(field, value);
    }

    pub async fn set_quote_field(&self, field: QuoteField, value: impl Into<String>) {
        self.state.lock().await.quote.set_field(field, value);
    }

    pub async fn toggle_service(&self, id: &str) {
        self.state.lock().await.quote.toggle_service(id);
    }

    pub async fn set_files(&self, files: Vec<FileAttachment>) {
        self.state.lock().await.quote.set_files(files);
    }

    /// Runs the contact submission pipeline. Returns `false` without side
    /// effects when a contact submission is already in flight.
    ///
    /// On success the form resets and the success message occupies the status
    /// slot; on any failure (non-2xx or transport) the form is preserved for
    /// retry and the single generic failure message is shown. Either way the
    /// status clears after the configured delay unless superseded first.
    pub async fn submit_contact(&self) -> bool {
        let form = {
            let mut state = self.state.lock().await;
            if state.contact_submitting {
                tracing::debug!("contact submission already in flight, ignoring");
                return false;
            }
            state.contact_submitting = true;
            state.contact.clone()
        };

        let outcome = self.backend.submit_contact(&form).await;

        let token = {
            let mut state = self.state.lock().await;
            let token = match outcome {
                Ok(()) => {
                    state.contact.reset();
                    state.status.set(CONTACT_SUCCESS_MESSAGE)
                }
                Err(e) => {
                    tracing::warn!("contact submission failed: {}", e);
                    state.status.set(CONTACT_FAILURE_MESSAGE)
                }
            };
            state.contact_submitting = false;
            token
        };

        self.schedule_status_clear(token);
        true
    }

    /// Quote counterpart of [`App::submit_contact`]; gated independently.
    pub async fn submit_quote(&self) -> bool {
        let form = {
            let mut state = self.state.lock().await;
            if state.quote_submitting {
                tracing::debug!("quote submission already in flight, ignoring");
                return false;
            }
            state.quote_submitting = true;
            state.quote.clone()
        };

        let outcome = self.backend.submit_quote(&form).await;

        let token = {
            let mut state = self.state.lock().await;
            let token = match outcome {
                Ok(()) => {
                    state.quote.reset();
                    state.status.set(QUOTE_SUCCESS_MESSAGE)
                }
                Err(e) => {
                    tracing::warn!("quote submission failed: {}", e);
                    state.status.set(QUOTE_FAILURE_MESSAGE)
                }
            };
            state.quote_submitting = false;
            token
        };

        self.schedule_status_clear(token);
        true
    }

    fn schedule_status_clear(&self, token: StatusToken) {
        let state = Arc::clone(&self.state);
        let delay = self.status_clear_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.lock().await.status.clear_if_current(token);
        });
    }

    /// Sets the active section and records a pending smooth-scroll request
    /// for the embedding layer to consume.
    pub async fn scroll_to_section(&self, section: Section) {
        let mut state = self.state.lock().await;
        state.active_section = section;
        state.scroll_request = Some(section);
    }

    pub async fn take_scroll_request(&self) -> Option<Section> {
        self.state.lock().await.scroll_request.take()
    }
}
