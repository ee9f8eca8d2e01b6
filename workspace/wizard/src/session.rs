use model::entities::user;
use tracing::{error, info, trace};

use crate::branch::BranchResolver;
use crate::catalog::RoleCatalog;
use crate::confirm::{Confirmation, ConfirmationGate};
use crate::error::Result;
use crate::form::FormCollector;
use crate::ids::IdGenerator;
use crate::prompt::Prompter;
use crate::store::{BranchStore, RoleStore, UserStore};
use crate::writer::UserRecordWriter;

/// How a wizard session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The record and all of its links were written.
    Created(user::Model),
    /// The operator declined at the confirmation gate. Nothing was written.
    Cancelled,
    /// Writing the record failed and has been reported. Nothing was written.
    Failed,
}

/// One run of the onboarding wizard:
/// roles, form, branch (teachers only), confirmation, write.
pub struct OnboardingSession<'a> {
    roles: &'a dyn RoleStore,
    branches: &'a dyn BranchStore,
    users: &'a dyn UserStore,
    ids: &'a dyn IdGenerator,
}

impl<'a> OnboardingSession<'a> {
    pub fn new(
        roles: &'a dyn RoleStore,
        branches: &'a dyn BranchStore,
        users: &'a dyn UserStore,
        ids: &'a dyn IdGenerator,
    ) -> Self {
        Self {
            roles,
            branches,
            users,
            ids,
        }
    }

    /// Runs every stage once, in order.
    ///
    /// Catalog and prompt failures are returned as errors. Failures while
    /// writing the record are logged and reported as [`SessionOutcome::Failed`].
    pub async fn run(&self, prompter: &mut dyn Prompter) -> Result<SessionOutcome> {
        trace!("Starting onboarding session");
        info!("Getting roles...");
        let roles = RoleCatalog::new(self.roles).list_roles().await?;

        let draft = FormCollector::new(&roles).collect(prompter)?;

        let selection = if draft.is_teacher {
            Some(BranchResolver::new(self.branches).resolve(prompter).await?)
        } else {
            None
        };

        match ConfirmationGate::new(&roles).ask(prompter, &draft, selection.as_ref())? {
            Confirmation::Confirmed => {}
            Confirmation::Cancelled => return Ok(SessionOutcome::Cancelled),
        }

        let (branch_id, class_ids) = match &selection {
            Some(selection) => (selection.branch_id(), selection.class_ids()),
            None => (None, Vec::new()),
        };

        let writer = UserRecordWriter::new(self.users, self.ids);
        match writer.create(&draft, branch_id, &class_ids).await {
            Ok(created) => Ok(SessionOutcome::Created(created)),
            Err(err) => {
                error!(detail = ?err, "Failed to create user: {}", err);
                Ok(SessionOutcome::Failed)
            }
        }
    }
}
