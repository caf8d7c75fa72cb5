//! `vibo-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the shared error model, opaque identifiers and the [`Money`] value object.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{LineItemId, ProfileId, UserId};
pub use money::Money;
pub use value_object::ValueObject;
