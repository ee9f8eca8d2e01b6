use sea_orm::entity::prelude::*;
use std::fmt;

/// Gender as offered by the onboarding form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Gender {
    #[default]
    #[sea_orm(string_value = "Male")]
    Male,
    #[sea_orm(string_value = "Female")]
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person registered in the membership system.
///
/// Roles and classes are linked through the `users_roles` and `users_classes`
/// join tables. A teacher additionally points at the branch they work in.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Opaque, system generated identifier. Never changes after creation.
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub full_name: String,
    pub mobile_number: String,
    pub email_address: String,
    /// National identity card number, stored as typed.
    pub ic_no: String,
    pub gender: Gender,
    pub dob: Date,
    pub address1: String,
    pub city: String,
    pub zip_code: String,
    pub state: String,
    /// Always created empty.
    pub status: String,
    /// Always created empty.
    pub vehicle_info: String,
    /// Set only for teachers.
    pub branch_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A teacher belongs to one branch.
    #[sea_orm(
        belongs_to = "super::branch::Entity",
        from = "Column::BranchId",
        to = "super::branch::Column::BranchId"
    )]
    Branch,
    /// Relation for the many-to-many relationship with roles.
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRole,
    /// Relation for the many-to-many relationship with classes.
    #[sea_orm(has_many = "super::user_class::Entity")]
    UserClass,
}

impl Related<super::branch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Branch.def()
    }
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_role::Relation::Role.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::user_role::Relation::User.def().rev())
    }
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_class::Relation::Class.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::user_class::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
