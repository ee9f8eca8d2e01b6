use anyhow::{Context, Result};
use sea_orm::Database;
use tracing::{debug, info, trace, warn};

use wizard::{OnboardingSession, Prompter, SeaOrmStore, SessionOutcome, TerminalPrompter, UuidGenerator};

pub async fn create_user(database_url: &str) -> Result<()> {
    trace!("Entering create_user function");
    debug!("Database URL: {}", database_url);

    let db = Database::connect(database_url)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    let store = SeaOrmStore::new(db);
    let ids = UuidGenerator;
    let mut prompter = TerminalPrompter::new();

    let outcome = OnboardingSession::new(&store, &store, &store, &ids)
        .run(&mut prompter)
        .await
        .context("User creation aborted")?;

    match outcome {
        SessionOutcome::Created(user) => {
            info!("User {} created with id {}", user.full_name, user.user_id);
            prompter.message(&format!("User {} created.", user.full_name))?;
        }
        SessionOutcome::Cancelled => {
            debug!("Session cancelled, nothing written");
        }
        SessionOutcome::Failed => {
            warn!("User was not created");
        }
    }

    Ok(())
}
