use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use model::entities::user;
use tracing::{debug, info, instrument, trace};

use crate::draft::UserDraft;
use crate::error::{Result, WizardError};
use crate::ids::IdGenerator;
use crate::store::{NewUser, UserStore};

/// Date-only layouts accepted for the date of birth.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%d %B %Y"];

/// Date-time layouts without offset accepted for the date of birth.
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
];

/// Parses the date of birth answer.
///
/// Accepts an RFC 3339 timestamp (the prompt's default, taken as its UTC
/// date), a plain date such as `1990-05-01`, `1990/05/01` or `May 1, 1990`,
/// or a timestamp without offset.
pub fn parse_date_of_birth(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc).date_naive());
    }
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
    {
        return Ok(date);
    }
    if let Some(timestamp) = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Ok(timestamp.date());
    }

    Err(WizardError::InvalidDateOfBirth {
        input: input.to_string(),
    })
}

/// Turns a confirmed draft into a persisted user record.
pub struct UserRecordWriter<'a> {
    store: &'a dyn UserStore,
    ids: &'a dyn IdGenerator,
}

impl<'a> UserRecordWriter<'a> {
    pub fn new(store: &'a dyn UserStore, ids: &'a dyn IdGenerator) -> Self {
        Self { store, ids }
    }

    /// Writes the record with its role links, the optional branch link and
    /// exactly the given class links in one atomic store call.
    ///
    /// Errors are returned as is; rollback is up to the store.
    #[instrument(skip(self, draft, class_ids))]
    pub async fn create(
        &self,
        draft: &UserDraft,
        branch_id: Option<&str>,
        class_ids: &[String],
    ) -> Result<user::Model> {
        trace!("Mapping draft onto user record");
        let dob = parse_date_of_birth(&draft.dob)?;

        let user_id = self.ids.new_id();
        debug!("Generated user id {}", user_id);

        let record = user::Model {
            user_id,
            full_name: draft.name.clone(),
            mobile_number: draft.phone_no.clone(),
            email_address: draft.email.clone(),
            ic_no: draft.ic_no.clone(),
            gender: draft.gender,
            dob,
            address1: draft.address.clone(),
            city: draft.city.clone(),
            zip_code: draft.zip_code.clone(),
            state: draft.state.clone(),
            status: String::new(),
            vehicle_info: String::new(),
            branch_id: branch_id.map(str::to_string),
        };

        let created = self
            .store
            .create_user(NewUser {
                user: record,
                role_ids: draft.role_ids.iter().cloned().collect(),
                class_ids: class_ids.to_vec(),
            })
            .await?;

        info!(
            "Created user {} ({}) with {} roles and {} classes",
            created.user_id,
            created.full_name,
            draft.role_ids.len(),
            class_ids.len()
        );
        Ok(created)
    }
}
