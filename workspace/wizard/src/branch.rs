//! Branch search and class extraction for teachers.

use model::entities::{branch, class};
use tracing::{debug, error, info, trace, warn};

use crate::error::{Result, WizardError};
use crate::prompt::Prompter;
use crate::store::{BranchRecord, BranchStore};

const DELIMITER: &str = " - ";

/// Branches whose name contains `query`, ignoring case. An empty query
/// matches every branch.
pub fn filter_branches<'b>(branches: &'b [BranchRecord], query: &str) -> Vec<&'b BranchRecord> {
    if query.is_empty() {
        return branches.iter().collect();
    }

    let needle = query.to_lowercase();
    branches
        .iter()
        .filter(|b| b.branch.branch_name.to_lowercase().contains(&needle))
        .collect()
}

/// The id part of a `"<id> - <name>"` label: everything before the first
/// `" - "`, or the whole label when there is no delimiter.
///
/// An id containing `" - "` cannot be recovered this way; names containing it
/// are fine since only the first delimiter counts.
pub fn composite_key_id(label: &str) -> &str {
    label
        .split_once(DELIMITER)
        .map_or(label, |(id, _)| id)
}

/// The branch chosen for a teacher together with all of its classes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BranchSelection {
    pub branch: Option<branch::Model>,
    pub classes: Vec<class::Model>,
}

impl BranchSelection {
    pub fn branch_id(&self) -> Option<&str> {
        self.branch.as_ref().map(|b| b.branch_id.as_str())
    }

    pub fn class_ids(&self) -> Vec<String> {
        self.classes.iter().map(|c| c.class_id.clone()).collect()
    }
}

/// Finds the branch behind a label returned by the search prompt.
///
/// Labels are matched against the candidates first, so names containing the
/// delimiter resolve correctly. Only a label that matches no candidate falls
/// back to the id before the first delimiter. Unknown ids give an empty
/// selection.
pub fn select_branch(branches: &[BranchRecord], label: &str) -> BranchSelection {
    let record = branches
        .iter()
        .find(|b| b.branch.composite_key() == label)
        .or_else(|| {
            let id = composite_key_id(label);
            debug!("Label {:?} matched no candidate, looking up id {:?}", label, id);
            branches.iter().find(|b| b.branch.branch_id == id)
        });

    match record {
        Some(record) => BranchSelection {
            branch: Some(record.branch.clone()),
            classes: record.classes.clone(),
        },
        None => {
            warn!("No branch matches {:?}, continuing without branch", label);
            BranchSelection::default()
        }
    }
}

/// Lets the operator pick a teacher's branch by incremental search.
pub struct BranchResolver<'a> {
    store: &'a dyn BranchStore,
}

impl<'a> BranchResolver<'a> {
    pub fn new(store: &'a dyn BranchStore) -> Self {
        Self { store }
    }

    pub async fn resolve(&self, prompter: &mut dyn Prompter) -> Result<BranchSelection> {
        trace!("Entering branch resolution");
        let branches = self.store.list_branches().await.map_err(|e| {
            error!("Failed to load branches: {}", e);
            WizardError::branches_unavailable(e)
        })?;
        debug!("Loaded {} branches", branches.len());

        if branches.is_empty() {
            warn!("No branches available, continuing without branch");
            return Ok(BranchSelection::default());
        }

        let source = |query: &str| -> Vec<String> {
            filter_branches(&branches, query)
                .into_iter()
                .map(|b| b.branch.composite_key())
                .collect()
        };
        let label = prompter.autocomplete("Select teacher's branch", &source)?;

        let selection = select_branch(&branches, &label);
        if let Some(branch_id) = selection.branch_id() {
            info!(
                "Resolved branch {} with {} classes",
                branch_id,
                selection.classes.len()
            );
        }
        Ok(selection)
    }
}
