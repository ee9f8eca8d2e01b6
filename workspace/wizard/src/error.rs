use sea_orm::DbErr;
use thiserror::Error;

/// Error types for the onboarding wizard
#[derive(Error, Debug)]
pub enum WizardError {
    /// The role or branch catalog could not be read
    #[error("{catalog} catalog unavailable: {source}")]
    CatalogUnavailable {
        catalog: &'static str,
        #[source]
        source: DbErr,
    },

    /// The store rejected the new user record or one of its links
    #[error("Failed to persist user: {0}")]
    Persistence(#[from] DbErr),

    /// The date of birth answer could not be turned into a date
    #[error("Invalid date of birth: {input:?}")]
    InvalidDateOfBirth { input: String },

    /// A selection prompt answered with an index outside of its choices
    #[error("Invalid selection {index} for {prompt:?} ({len} choices)")]
    InvalidSelection {
        prompt: String,
        index: usize,
        len: usize,
    },

    /// An interactive prompt failed, e.g. the terminal went away
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Writing to the terminal failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl WizardError {
    pub(crate) fn roles_unavailable(source: DbErr) -> Self {
        WizardError::CatalogUnavailable {
            catalog: "Role",
            source,
        }
    }

    pub(crate) fn branches_unavailable(source: DbErr) -> Self {
        WizardError::CatalogUnavailable {
            catalog: "Branch",
            source,
        }
    }
}

/// Type alias for Result with WizardError
pub type Result<T> = std::result::Result<T, WizardError>;
