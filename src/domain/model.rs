use crate::utils::error::{Result, SiteError};
use serde::{Deserialize, Serialize};

/// An offering displayed on the site, loaded read-only from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
}

/// A staff profile, same lifecycle as [`Service`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
    pub linkedin: String,
    pub email: String,
}

/// An in-memory file handle attached to a quote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Message,
}

/// State of the general contact form. Empty string = unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    /// Replaces exactly one field, leaving all siblings untouched.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Company => self.company = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Names of required fields that are still empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        missing
    }

    /// Hard-failure variant of [`ContactForm::missing_required`].
    pub fn require_complete(&self) -> Result<()> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SiteError::MissingFields {
                fields: missing.join(", "),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteField {
    Name,
    Email,
    Phone,
    Company,
    ProjectDescription,
    BudgetRange,
    Timeline,
}

/// State of the quote request form.
///
/// `services` holds selected service ids with membership toggling; order carries
/// no meaning. `files` is wholesale-replaced on every picker change, never
/// appended to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub project_description: String,
    pub budget_range: String,
    pub timeline: String,
    pub services: Vec<String>,
    pub files: Vec<FileAttachment>,
}

impl QuoteForm {
    /// Replaces exactly one scalar field, leaving all siblings untouched.
    pub fn set_field(&mut self, field: QuoteField, value: impl Into<String>) {
        let value = value.into();
        match field {
            QuoteField::Name => self.name = value,
            QuoteField::Email => self.email = value,
            QuoteField::Phone => self.phone = value,
            QuoteField::Company => self.company = value,
            QuoteField::ProjectDescription => self.project_description = value,
            QuoteField::BudgetRange => self.budget_range = value,
            QuoteField::Timeline => self.timeline = value,
        }
    }

    /// Removes `id` from the selection if present, adds it otherwise.
    pub fn toggle_service(&mut self, id: &str) {
        if let Some(pos) = self.services.iter().position(|s| s == id) {
            self.services.remove(pos);
        } else {
            self.services.push(id.to_string());
        }
    }

    /// Replaces the attachment list. Previously selected files are discarded.
    pub fn set_files(&mut self, files: Vec<FileAttachment>) {
        self.files = files;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.project_description.trim().is_empty() {
            missing.push("project_description");
        }
        missing
    }

    /// Hard-failure variant of [`QuoteForm::missing_required`].
    pub fn require_complete(&self) -> Result<()> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SiteError::MissingFields {
                fields: missing.join(", "),
            })
        }
    }
}

/// Page sections for navigation highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Services,
    Team,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Services,
        Section::Team,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Team => "team",
            Section::Contact => "contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_set_field_does_not_clobber_siblings() {
        let mut form = ContactForm::default();
        form.set_field(ContactField::Name, "Ana");
        form.set_field(ContactField::Email, "ana@x.com");
        form.set_field(ContactField::Message, "Hola");

        assert_eq!(form.name, "Ana");
        assert_eq!(form.email, "ana@x.com");
        assert_eq!(form.message, "Hola");
        assert_eq!(form.phone, "");
        assert_eq!(form.company, "");

        form.set_field(ContactField::Phone, "555-1234");
        assert_eq!(form.name, "Ana");
        assert_eq!(form.email, "ana@x.com");
    }

    #[test]
    fn test_contact_reset_restores_empty_values() {
        let mut form = ContactForm::default();
        form.set_field(ContactField::Name, "Ana");
        form.set_field(ContactField::Company, "Acme");
        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_contact_missing_required() {
        let mut form = ContactForm::default();
        assert_eq!(form.missing_required(), vec!["name", "email", "message"]);

        form.set_field(ContactField::Name, "Ana");
        form.set_field(ContactField::Email, "ana@x.com");
        form.set_field(ContactField::Message, "Hola");
        assert!(form.missing_required().is_empty());

        // Whitespace-only still counts as unset.
        form.set_field(ContactField::Message, "   ");
        assert_eq!(form.missing_required(), vec!["message"]);
    }

    #[test]
    fn test_require_complete_reports_missing_fields() {
        let mut contact = ContactForm::default();
        contact.set_field(ContactField::Name, "Ana");
        match contact.require_complete() {
            Err(SiteError::MissingFields { fields }) => {
                assert_eq!(fields, "email, message");
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }

        contact.set_field(ContactField::Email, "ana@x.com");
        contact.set_field(ContactField::Message, "Hola");
        assert!(contact.require_complete().is_ok());

        let mut quote = QuoteForm::default();
        assert!(quote.require_complete().is_err());
        quote.set_field(QuoteField::Name, "Luis");
        quote.set_field(QuoteField::Email, "luis@x.com");
        quote.set_field(QuoteField::ProjectDescription, "Rebranding");
        assert!(quote.require_complete().is_ok());
    }

    #[test]
    fn test_quote_set_field_does_not_clobber_siblings() {
        let mut form = QuoteForm::default();
        form.set_field(QuoteField::Name, "Luis");
        form.set_field(QuoteField::ProjectDescription, "Rebranding completo");
        form.toggle_service("branding");

        form.set_field(QuoteField::BudgetRange, "$5000-$15000");

        assert_eq!(form.name, "Luis");
        assert_eq!(form.project_description, "Rebranding completo");
        assert_eq!(form.services, vec!["branding"]);
        assert_eq!(form.timeline, "");
    }

    #[test]
    fn test_toggle_service_is_its_own_inverse() {
        let mut form = QuoteForm::default();
        form.toggle_service("branding");
        assert_eq!(form.services, vec!["branding"]);
        form.toggle_service("branding");
        assert!(form.services.is_empty());

        form.toggle_service("web-design");
        form.toggle_service("branding");
        form.toggle_service("web-design");
        assert_eq!(form.services, vec!["branding"]);
    }

    #[test]
    fn test_set_files_replaces_previous_selection() {
        let mut form = QuoteForm::default();
        form.set_files(vec![FileAttachment {
            file_name: "a.pdf".to_string(),
            bytes: vec![1, 2, 3],
        }]);
        assert_eq!(form.files.len(), 1);

        let second = vec![
            FileAttachment {
                file_name: "b.png".to_string(),
                bytes: vec![4],
            },
            FileAttachment {
                file_name: "c.txt".to_string(),
                bytes: vec![5],
            },
        ];
        form.set_files(second.clone());
        assert_eq!(form.files, second);
    }

    #[test]
    fn test_quote_reset_restores_empty_values() {
        let mut form = QuoteForm::default();
        form.set_field(QuoteField::Email, "luis@x.com");
        form.toggle_service("consulting");
        form.set_files(vec![FileAttachment {
            file_name: "brief.pdf".to_string(),
            bytes: vec![0; 16],
        }]);
        form.reset();
        assert_eq!(form, QuoteForm::default());
    }

    #[test]
    fn test_section_ids() {
        assert_eq!(Section::default(), Section::Home);
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["home", "services", "team", "contact"]);
    }
}
