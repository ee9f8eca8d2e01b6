pub mod create_user;
pub mod import_catalog;
pub mod initdb;

pub use create_user::create_user;
pub use import_catalog::import_catalog;
pub use initdb::init_database;
