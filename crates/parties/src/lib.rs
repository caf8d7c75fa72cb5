//! Invoice parties: the seller profiles a user keeps and the buyer on each invoice.
//!
//! Pure domain logic; fetching and storing profiles is the caller's job; this
//! crate only decides what the local profile list looks like afterwards.

pub mod identity;
pub mod profiles;

pub use identity::{BuyerIdentity, SellerIdentity};
pub use profiles::{PROFILE_CACHE_KEY, ProfileBook, SaveProfileRequest, SyncOutcome};
