//! Sequential collection of the personal details of a new user.

use chrono::{SecondsFormat, Utc};
use model::entities::{role, user::Gender};
use sea_orm::Iterable;
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

use crate::draft::UserDraft;
use crate::error::{Result, WizardError};
use crate::prompt::Prompter;

/// One step of the form. Steps are always asked in [`Field::ORDER`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    PhoneNo,
    Email,
    Roles,
    IcNo,
    Gender,
    DateOfBirth,
    Address,
    City,
    ZipCode,
    State,
    Country,
    IsTeacher,
}

impl Field {
    pub const ORDER: [Field; 13] = [
        Field::Name,
        Field::PhoneNo,
        Field::Email,
        Field::Roles,
        Field::IcNo,
        Field::Gender,
        Field::DateOfBirth,
        Field::Address,
        Field::City,
        Field::ZipCode,
        Field::State,
        Field::Country,
        Field::IsTeacher,
    ];

    pub fn message(&self) -> &'static str {
        match self {
            Field::Name => "Enter full name",
            Field::PhoneNo => "Enter phone number",
            Field::Email => "Enter email",
            Field::Roles => "Select role(s)",
            Field::IcNo => "Enter IC number",
            Field::Gender => "Select a gender",
            Field::DateOfBirth => "Enter date of birth",
            Field::Address => "Enter address",
            Field::City => "Enter city",
            Field::ZipCode => "Enter postcode",
            Field::State => "Enter state",
            Field::Country => "Enter country",
            Field::IsTeacher => "Is this user a teacher?",
        }
    }
}

/// Asks every [`Field`] in order and assembles a [`UserDraft`].
///
/// No answer is validated here. Free text is taken as typed and the date of
/// birth is parsed only when the record is written.
pub struct FormCollector<'r> {
    roles: &'r [role::Model],
}

impl<'r> FormCollector<'r> {
    pub fn new(roles: &'r [role::Model]) -> Self {
        Self { roles }
    }

    pub fn collect(&self, prompter: &mut dyn Prompter) -> Result<UserDraft> {
        trace!("Collecting user details");
        let mut draft = UserDraft::default();
        for field in Field::ORDER {
            self.ask(field, prompter, &mut draft)?;
        }
        debug!("Collected draft for {:?}", draft.name);
        Ok(draft)
    }

    fn ask(&self, field: Field, prompter: &mut dyn Prompter, draft: &mut UserDraft) -> Result<()> {
        let message = field.message();
        match field {
            Field::Name => draft.name = prompter.input(message, None)?,
            Field::PhoneNo => draft.phone_no = prompter.input(message, None)?,
            Field::Email => draft.email = prompter.input(message, None)?,
            Field::Roles => draft.role_ids = self.select_roles(prompter)?,
            Field::IcNo => draft.ic_no = prompter.input(message, None)?,
            Field::Gender => draft.gender = select_gender(prompter)?,
            Field::DateOfBirth => {
                let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
                draft.dob = prompter.input(message, Some(&now))?;
            }
            Field::Address => draft.address = prompter.input(message, Some(""))?,
            Field::City => draft.city = prompter.input(message, Some(""))?,
            Field::ZipCode => draft.zip_code = prompter.input(message, Some(""))?,
            Field::State => draft.state = prompter.input(message, Some(""))?,
            Field::Country => draft.country = prompter.input(message, Some(""))?,
            Field::IsTeacher => draft.is_teacher = prompter.confirm(message, true)?,
        }
        Ok(())
    }

    fn select_roles(&self, prompter: &mut dyn Prompter) -> Result<BTreeSet<String>> {
        if self.roles.is_empty() {
            warn!("No roles to choose from, skipping role selection");
            return Ok(BTreeSet::new());
        }

        let names: Vec<String> = self.roles.iter().map(|r| r.role_name.clone()).collect();
        let message = Field::Roles.message();

        prompter
            .multi_select(message, &names)?
            .into_iter()
            .map(|index| {
                self.roles
                    .get(index)
                    .map(|r| r.role_id.clone())
                    .ok_or_else(|| WizardError::InvalidSelection {
                        prompt: message.to_string(),
                        index,
                        len: names.len(),
                    })
            })
            .collect()
    }
}

fn select_gender(prompter: &mut dyn Prompter) -> Result<Gender> {
    let genders: Vec<Gender> = Gender::iter().collect();
    let labels: Vec<String> = genders.iter().map(|g| g.to_string()).collect();
    let message = Field::Gender.message();

    let index = prompter.select(message, &labels)?;
    genders
        .get(index)
        .copied()
        .ok_or_else(|| WizardError::InvalidSelection {
            prompt: message.to_string(),
            index,
            len: genders.len(),
        })
}
