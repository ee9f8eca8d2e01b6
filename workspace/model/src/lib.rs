//! SeaORM entities of the membership database.

pub mod entities;
