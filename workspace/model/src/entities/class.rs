use sea_orm::entity::prelude::*;

/// A teachable unit. Every class belongs to exactly one branch.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub class_id: String,
    pub class_name: String,
    pub branch_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::branch::Entity",
        from = "Column::BranchId",
        to = "super::branch::Column::BranchId"
    )]
    Branch,
    #[sea_orm(has_many = "super::user_class::Entity")]
    UserClass,
}

impl Related<super::branch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Branch.def()
    }
}

impl Related<super::user_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserClass.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_class::Relation::User.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::user_class::Relation::Class.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
