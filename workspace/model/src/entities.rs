//! Root for all SeaORM entity modules.
//! The onboarding wizard reads roles, branches and classes and writes users
//! together with their role and class links.

pub mod branch;
pub mod class;
pub mod role;
pub mod user;
pub mod user_class;
pub mod user_role;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::branch::Entity as Branch;
    pub use super::class::Entity as Class;
    pub use super::role::Entity as Role;
    pub use super::user::Entity as User;
    pub use super::user_class::Entity as UserClass;
    pub use super::user_role::Entity as UserRole;
}
