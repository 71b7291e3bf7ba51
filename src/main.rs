use agora_site::config::{CliConfig, Command};
use agora_site::core::app::{CONTACT_SUCCESS_MESSAGE, QUOTE_SUCCESS_MESSAGE};
use agora_site::core::view;
use agora_site::utils::{logger, validation::Validate};
use agora_site::{App, ContactField, FileAttachment, HttpBackend, QuoteField};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting agora-site client");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let backend = HttpBackend::from_config(&config);
    let app = App::new(backend);
    let state = app.state();

    match config.command {
        Command::Fetch => {
            app.load_content().await;
            let state = state.lock().await;
            println!("{}", view::render_nav(state.active_section));
            println!();
            println!("{}", view::render_services(&state.services));
            println!();
            println!("{}", view::render_team(&state.team));
        }
        Command::Contact {
            name,
            email,
            phone,
            company,
            message,
        } => {
            app.set_contact_field(ContactField::Name, name).await;
            app.set_contact_field(ContactField::Email, email).await;
            app.set_contact_field(ContactField::Phone, phone).await;
            app.set_contact_field(ContactField::Company, company).await;
            app.set_contact_field(ContactField::Message, message).await;

            if let Err(e) = state.lock().await.contact.require_complete() {
                tracing::error!("{}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }

            app.submit_contact().await;

            let status = { state.lock().await.status.message().map(str::to_string) };
            if let Some(message) = &status {
                println!("{}", message);
            }
            if status.as_deref() != Some(CONTACT_SUCCESS_MESSAGE) {
                std::process::exit(1);
            }
        }
        Command::Quote {
            name,
            email,
            phone,
            company,
            services,
            description,
            budget,
            timeline,
            files,
        } => {
            app.set_quote_field(QuoteField::Name, name).await;
            app.set_quote_field(QuoteField::Email, email).await;
            app.set_quote_field(QuoteField::Phone, phone).await;
            app.set_quote_field(QuoteField::Company, company).await;
            app.set_quote_field(QuoteField::ProjectDescription, description)
                .await;
            app.set_quote_field(QuoteField::BudgetRange, budget).await;
            app.set_quote_field(QuoteField::Timeline, timeline).await;

            for id in &services {
                app.toggle_service(id).await;
            }

            let mut attachments = Vec::with_capacity(files.len());
            for path in &files {
                let bytes = std::fs::read(path)?;
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "attachment".to_string());
                tracing::debug!("attaching {} ({} bytes)", file_name, bytes.len());
                attachments.push(FileAttachment { file_name, bytes });
            }
            app.set_files(attachments).await;

            if let Err(e) = state.lock().await.quote.require_complete() {
                tracing::error!("{}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }

            app.submit_quote().await;

            let status = { state.lock().await.status.message().map(str::to_string) };
            if let Some(message) = &status {
                println!("{}", message);
            }
            if status.as_deref() != Some(QUOTE_SUCCESS_MESSAGE) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
