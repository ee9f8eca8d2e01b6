use model::entities::role;
use tracing::{debug, info};

use crate::branch::BranchSelection;
use crate::draft::UserDraft;
use crate::error::Result;
use crate::prompt::Prompter;

/// Operator's answer at the confirmation gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    /// Proceed to persistence.
    Confirmed,
    /// Abandon the whole user creation. Nothing may be written.
    Cancelled,
}

/// Shows the complete draft and asks for explicit approval.
pub struct ConfirmationGate<'r> {
    roles: &'r [role::Model],
}

impl<'r> ConfirmationGate<'r> {
    pub fn new(roles: &'r [role::Model]) -> Self {
        Self { roles }
    }

    pub fn ask(
        &self,
        prompter: &mut dyn Prompter,
        draft: &UserDraft,
        selection: Option<&BranchSelection>,
    ) -> Result<Confirmation> {
        prompter.heading("User details")?;
        for (label, value) in self.summary(draft, selection) {
            prompter.field(label, &value)?;
        }

        if prompter.confirm("Do you want to confirm the details?", false)? {
            debug!("Details confirmed");
            Ok(Confirmation::Confirmed)
        } else {
            info!("User creation cancelled by operator");
            prompter.message("User creation cancelled.")?;
            Ok(Confirmation::Cancelled)
        }
    }

    /// Every collected answer as `(label, value)` pairs, in display order.
    pub fn summary(
        &self,
        draft: &UserDraft,
        selection: Option<&BranchSelection>,
    ) -> Vec<(&'static str, String)> {
        let mut lines = vec![
            ("Name", draft.name.clone()),
            ("Phone number", draft.phone_no.clone()),
            ("Email", draft.email.clone()),
            ("Role", self.role_names(draft)),
            ("IC number", draft.ic_no.clone()),
            ("Gender", draft.gender.to_string()),
            ("Date of Birth", draft.dob.clone()),
            ("Address", draft.address.clone()),
            ("City", draft.city.clone()),
            ("Postcode", draft.zip_code.clone()),
            ("State", draft.state.clone()),
            ("Country", draft.country.clone()),
            ("Teacher", if draft.is_teacher { "Yes" } else { "No" }.to_string()),
        ];

        if let Some(selection) = selection {
            let branch = selection
                .branch
                .as_ref()
                .map(|b| b.composite_key())
                .unwrap_or_else(|| "(none)".to_string());
            let classes = selection
                .classes
                .iter()
                .map(|c| c.class_name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(("Branch", branch));
            lines.push(("Classes", classes));
        }

        lines
    }

    fn role_names(&self, draft: &UserDraft) -> String {
        draft
            .role_ids
            .iter()
            .map(|id| {
                self.roles
                    .iter()
                    .find(|r| &r.role_id == id)
                    .map(|r| r.role_name.clone())
                    .unwrap_or_else(|| id.clone())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
