//! Interactive onboarding of new users.
//!
//! A session loads the role catalog, collects the personal details, lets a
//! teacher pick a branch, asks for confirmation and finally writes the user
//! with all of its links in one transaction.

pub mod branch;
pub mod catalog;
pub mod confirm;
pub mod draft;
pub mod error;
pub mod form;
pub mod ids;
pub mod prompt;
pub mod session;
pub mod store;
pub mod writer;

#[cfg(test)]
mod test_utils;

pub use branch::{BranchResolver, BranchSelection};
pub use catalog::RoleCatalog;
pub use confirm::{Confirmation, ConfirmationGate};
pub use draft::UserDraft;
pub use error::{Result, WizardError};
pub use form::{Field, FormCollector};
pub use ids::{IdGenerator, UuidGenerator};
pub use prompt::{Prompter, TerminalPrompter};
pub use session::{OnboardingSession, SessionOutcome};
pub use store::{BranchRecord, BranchStore, NewUser, RoleStore, SeaOrmStore, UserStore};
pub use writer::UserRecordWriter;
