//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions for rows read back from PostgreSQL.

mod recipe;
mod user;
