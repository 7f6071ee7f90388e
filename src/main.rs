//! Portfolio demo: boots the locale, reveals the page sections and optionally
//! sends a contact message.
//!
//! Usage:
//!   cargo run                                         # Print the page in the detected language
//!   cargo run -- --lang ar                            # Switch (and persist) Arabic first
//!   cargo run -- --send "Name" "me@example.com" "Message text"
//!
//! Required for --send only:
//! - CONTACT_ACCESS_KEY
//!
//! Optional:
//! - CONTACT_ENDPOINT (defaults to https://api.web3forms.com/submit)
//! - PREFERENCES_PATH (defaults to .portfolio/preferences.json)
//! - NOTIFICATION_TTL_SECS (defaults to 4, at most 4294967295)

use anyhow::{Context, Result};
use chrono::Utc;
use portfolio_core::config::Config;
use portfolio_core::contact::{ContactClient, ContactPipeline, Field, SubmitOutcome};
use portfolio_core::document::DocumentRoot;
use portfolio_core::i18n::{LanguageRegistry, TranslationCatalog};
use portfolio_core::locale::{detect_environment_language, LocaleManager};
use portfolio_core::notify::Toaster;
use portfolio_core::reveal::{
    intersection_channel, stagger_delay, ElementHandle, IntersectionEvent, ObserveOptions,
    RevealAnimator,
};
use portfolio_core::store::FileStore;
use std::rc::Rc;
use tracing::info;

/// Page sections in display order, keyed by their title string.
const SECTIONS: [&str; 6] = [
    "about.title",
    "education.title",
    "skills.title",
    "projects.title",
    "certificates.title",
    "contact.title",
];

const PROJECT_CARDS: [&str; 3] = [
    "projects.travel.title",
    "projects.bakery.title",
    "projects.movie.title",
];

struct Args {
    lang: Option<String>,
    send: Option<(String, String, String)>,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let mut parsed = Args {
        lang: None,
        send: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" => {
                parsed.lang = Some(args.next().context("--lang needs a language code")?);
            }
            "--send" => {
                let name = args.next().context("--send needs a name")?;
                let email = args.next().context("--send needs an email")?;
                let message = args.next().context("--send needs a message")?;
                parsed.send = Some((name, email, message));
            }
            other => anyhow::bail!("Unknown argument: {}", other),
        }
    }

    Ok(parsed)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_core=info".parse()?),
        )
        .init();

    let args = parse_args()?;
    let config = Config::from_env()?;

    // Step 1: Locale from the persisted choice or the environment
    let document = DocumentRoot::new();
    let environment = detect_environment_language();
    let locale = LocaleManager::initialize(
        TranslationCatalog::shared(),
        Box::new(FileStore::new(&config.preferences_path)),
        Box::new(document.clone()),
        environment.as_deref(),
    )
    .into_shared();

    if let Some(code) = &args.lang {
        locale
            .borrow_mut()
            .change_language(code)
            .with_context(|| format!("Cannot switch to '{}'", code))?;
    }

    {
        let locale = locale.borrow();
        let config = LanguageRegistry::get().config(locale.language());
        info!(
            "Rendering in {} ({}), dir={}, class=\"{}\"",
            config.name,
            config.native_name,
            document.direction(),
            document.class_name()
        );
        println!("{}", locale.translate("hero.title"));
        println!("{}\n", locale.translate("hero.subtitle"));
    }

    // Step 2: Reveal every section and card as if scrolled into view
    let mut animator = RevealAnimator::new();
    let (mut events, receiver) = intersection_channel(SECTIONS.len() + PROJECT_CARDS.len());

    let sections: Vec<ElementHandle> = (0..SECTIONS.len() as u64).map(ElementHandle::new).collect();
    let cards: Vec<ElementHandle> = (0..PROJECT_CARDS.len() as u64)
        .map(|i| ElementHandle::new(100 + i))
        .collect();

    for handle in &sections {
        animator.observe(*handle, ObserveOptions::section())?;
        events
            .try_send(IntersectionEvent::visible(*handle, 0.5))
            .context("Intersection channel is full")?;
    }
    for handle in &cards {
        animator.observe(*handle, ObserveOptions::card())?;
        events
            .try_send(IntersectionEvent::visible(*handle, 0.25))
            .context("Intersection channel is full")?;
    }
    drop(events);

    let delivered = animator.run(receiver).await;
    info!("Delivered {} intersection events", delivered);

    {
        let locale = locale.borrow();
        for (handle, key) in sections.iter().zip(SECTIONS) {
            let marker = if animator.is_revealed(*handle) { "+" } else { " " };
            println!("[{}] {}", marker, locale.translate(key));
        }
        for (index, (handle, key)) in cards.iter().zip(PROJECT_CARDS).enumerate() {
            let marker = if animator.is_revealed(*handle) { "+" } else { " " };
            println!(
                "    [{}] {} (+{} ms)",
                marker,
                locale.translate(key),
                stagger_delay(index).as_millis()
            );
        }
    }

    // Step 3: Contact form
    let Some((name, email, message)) = args.send else {
        return Ok(());
    };

    let toaster = Toaster::with_ttl_secs(config.notification_ttl_secs);
    let pipeline = ContactPipeline::new(
        ContactClient::new(&config)?,
        locale.clone(),
        Rc::new(toaster.clone()),
    );
    pipeline.set_field(Field::Name, name);
    pipeline.set_field(Field::Email, email);
    pipeline.set_field(Field::Message, message);

    println!("\n{}...", pipeline.submit_label());
    let outcome = pipeline.submit().await;

    if outcome == SubmitOutcome::Invalid {
        for field in Field::ALL {
            if let Some(error) = pipeline.field_error_message(field) {
                println!("  {}: {}", locale.borrow().translate(field.label_key()), error);
            }
        }
    }

    for notification in toaster.active(Utc::now()) {
        println!("{}: {}", notification.title, notification.description);
    }

    if outcome == SubmitOutcome::Succeeded {
        pipeline.acknowledge();
    }

    Ok(())
}
