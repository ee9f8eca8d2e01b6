use model::entities::user::Gender;
use std::collections::BTreeSet;

/// Answers collected during one wizard session.
///
/// Nothing here is persisted until the operator confirms; the date of birth is
/// kept as typed and only parsed when the record is written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub phone_no: String,
    pub email: String,
    /// Ids of the selected roles, all taken from the role catalog.
    pub role_ids: BTreeSet<String>,
    pub ic_no: String,
    pub gender: Gender,
    pub dob: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub state: String,
    /// Shown for confirmation only, the user record has no country column.
    pub country: String,
    pub is_teacher: bool,
}
