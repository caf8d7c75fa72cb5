//! Local book of seller profiles: cache load, remote sync, save and selection.

use serde::{Deserialize, Serialize};

use vibo_core::{DomainError, DomainResult, ProfileId, UserId};

use crate::identity::SellerIdentity;

/// Storage key under which the serialized profile list is cached client-side.
pub const PROFILE_CACHE_KEY: &str = "vibo_profiles_cache_v1";

/// Result of merging the remote profile list into the local book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Remote list was non-empty and replaced the local one.
    Replaced,
    /// Remote list was empty; local profiles were kept.
    KeptLocal,
    /// Nothing remote, nothing local: the user has to create a profile.
    NeedsOnboarding,
}

/// Body posted to the save-profile webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveProfileRequest {
    pub user_id: UserId,
    pub profile: SellerIdentity,
}

/// The user's seller profiles plus the one currently selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileBook {
    profiles: Vec<SellerIdentity>,
    active_id: Option<ProfileId>,
}

impl ProfileBook {
    pub fn new(profiles: Vec<SellerIdentity>) -> Self {
        let active_id = profiles.first().map(|p| p.id.clone());
        Self {
            profiles,
            active_id,
        }
    }

    /// Restore from the cached JSON array.
    ///
    /// A missing or corrupt cache is not fatal: the book starts empty and the
    /// next remote sync fills it.
    pub fn from_cache_json(cached: Option<&str>) -> Self {
        let Some(raw) = cached else {
            return Self::default();
        };
        match serde_json::from_str::<Vec<SellerIdentity>>(raw) {
            Ok(profiles) => Self::new(profiles),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable profile cache");
                Self::default()
            }
        }
    }

    pub fn to_cache_json(&self) -> String {
        // Vec of plain string fields; serialization cannot fail.
        serde_json::to_string(&self.profiles).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn profiles(&self) -> &[SellerIdentity] {
        &self.profiles
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn active_id(&self) -> Option<&ProfileId> {
        self.active_id.as_ref()
    }

    /// Selected profile, falling back to the first one.
    pub fn active(&self) -> Option<&SellerIdentity> {
        self.active_id
            .as_ref()
            .and_then(|id| self.profiles.iter().find(|p| &p.id == id))
            .or_else(|| self.profiles.first())
    }

    pub fn select(&mut self, id: &ProfileId) -> DomainResult<&SellerIdentity> {
        let profile = self
            .profiles
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| DomainError::not_found(format!("profile {id}")))?;
        self.active_id = Some(profile.id.clone());
        Ok(profile)
    }

    /// Merge the list returned by the get-profiles webhook.
    ///
    /// An empty remote answer never wipes local data.
    pub fn sync_remote(&mut self, remote: Vec<SellerIdentity>) -> SyncOutcome {
        if remote.is_empty() {
            if self.profiles.is_empty() {
                return SyncOutcome::NeedsOnboarding;
            }
            tracing::debug!(
                local = self.profiles.len(),
                "remote profile list empty, keeping local cache"
            );
            return SyncOutcome::KeptLocal;
        }

        tracing::debug!(remote = remote.len(), "replacing local profiles");
        self.profiles = remote;
        let active_still_present = self
            .active_id
            .as_ref()
            .is_some_and(|id| self.profiles.iter().any(|p| &p.id == id));
        if !active_still_present {
            self.active_id = self.profiles.first().map(|p| p.id.clone());
        }
        SyncOutcome::Replaced
    }

    /// Insert or replace a profile and make it active.
    ///
    /// Returns the request to forward to the save-profile webhook; the local
    /// book is already updated whether or not that upload succeeds.
    pub fn save(
        &mut self,
        user_id: &UserId,
        mut profile: SellerIdentity,
    ) -> DomainResult<SaveProfileRequest> {
        if profile.name.trim().is_empty() {
            return Err(DomainError::validation("company name is required"));
        }

        if profile.id.is_blank() {
            profile.id = ProfileId::generate();
        }

        match self.profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile.clone(),
            None => self.profiles.push(profile.clone()),
        }
        self.active_id = Some(profile.id.clone());

        Ok(SaveProfileRequest {
            user_id: user_id.clone(),
            profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, name: &str) -> SellerIdentity {
        SellerIdentity {
            id: ProfileId::from(id),
            ..SellerIdentity::new(name)
        }
    }

    fn user() -> UserId {
        UserId::from("42")
    }

    #[test]
    fn cache_round_trip_keeps_profiles_and_selects_first() {
        let book = ProfileBook::new(vec![profile("1", "ООО Ромашка"), profile("2", "ИП Петров")]);
        let restored = ProfileBook::from_cache_json(Some(&book.to_cache_json()));

        assert_eq!(restored.profiles(), book.profiles());
        assert_eq!(restored.active().map(|p| p.name.as_str()), Some("ООО Ромашка"));
    }

    #[test]
    fn corrupt_cache_yields_empty_book() {
        let book = ProfileBook::from_cache_json(Some("{not json"));
        assert!(book.is_empty());
        assert!(book.active().is_none());
        assert!(ProfileBook::from_cache_json(None).is_empty());
    }

    #[test]
    fn empty_remote_keeps_local_profiles() {
        let mut book = ProfileBook::new(vec![profile("1", "ООО Ромашка")]);
        assert_eq!(book.sync_remote(Vec::new()), SyncOutcome::KeptLocal);
        assert_eq!(book.profiles().len(), 1);

        let mut empty = ProfileBook::default();
        assert_eq!(empty.sync_remote(Vec::new()), SyncOutcome::NeedsOnboarding);
    }

    #[test]
    fn remote_replaces_local_and_keeps_valid_selection() {
        let mut book = ProfileBook::new(vec![profile("1", "Старое"), profile("2", "ИП Петров")]);
        book.select(&ProfileId::from("2")).unwrap();

        let outcome = book.sync_remote(vec![profile("2", "ИП Петров"), profile("3", "ООО Новое")]);
        assert_eq!(outcome, SyncOutcome::Replaced);
        assert_eq!(book.active_id().map(ProfileId::as_str), Some("2"));

        book.sync_remote(vec![profile("9", "Другое")]);
        assert_eq!(book.active_id().map(ProfileId::as_str), Some("9"));
    }

    #[test]
    fn save_requires_a_company_name() {
        let mut book = ProfileBook::default();
        let err = book.save(&user(), SellerIdentity::new("  ")).unwrap_err();
        assert_eq!(err, DomainError::Validation("company name is required".to_string()));
        assert!(book.is_empty());
    }

    #[test]
    fn save_new_profile_assigns_id_and_activates_it() {
        let mut book = ProfileBook::new(vec![profile("1", "ООО Ромашка")]);
        let request = book.save(&user(), SellerIdentity::new("ИП Петров")).unwrap();

        assert!(!request.profile.id.is_blank());
        assert_eq!(request.user_id, user());
        assert_eq!(book.profiles().len(), 2);
        assert_eq!(book.active().map(|p| p.name.as_str()), Some("ИП Петров"));
    }

    #[test]
    fn save_existing_profile_replaces_in_place() {
        let mut book = ProfileBook::new(vec![profile("1", "ООО Ромашка"), profile("2", "ИП Петров")]);
        let mut edited = profile("1", "ООО Ромашка+");
        edited.director = Some("Иванов И.И.".to_string());

        book.save(&user(), edited).unwrap();
        assert_eq!(book.profiles().len(), 2);
        assert_eq!(book.profiles()[0].name, "ООО Ромашка+");
        assert_eq!(book.active_id().map(ProfileId::as_str), Some("1"));
    }

    #[test]
    fn selecting_unknown_profile_fails() {
        let mut book = ProfileBook::new(vec![profile("1", "ООО Ромашка")]);
        assert!(matches!(
            book.select(&ProfileId::from("404")),
            Err(DomainError::NotFound(_))
        ));
        assert_eq!(book.active_id().map(ProfileId::as_str), Some("1"));
    }

    #[test]
    fn save_request_matches_webhook_shape() {
        let mut book = ProfileBook::default();
        let request = book.save(&user(), profile("7", "ООО Ромашка")).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["user_id"], "42");
        assert_eq!(json["profile"]["id"], "7");
        assert_eq!(json["profile"]["name"], "ООО Ромашка");
    }
}
