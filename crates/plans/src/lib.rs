//! `vibo-plans` — subscription tiers and feature gating.
//!
//! Pure policy: which tier unlocks which feature, and how a tier reported by
//! the backend is adopted. Payments and the tier source live elsewhere.

pub mod access;
pub mod catalog;
pub mod feature;
pub mod tier;

pub use access::{AccessError, AccessExplanation, authorize, explain_access};
pub use catalog::{PLANS, Plan, plan_for};
pub use feature::Feature;
pub use tier::{InitResponse, Tier, upgrade};
