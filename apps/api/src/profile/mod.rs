//! Executive profile and autopilot settings.

pub mod handlers;
pub mod validation;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub title: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
    pub target_role: String,
    /// Comma-separated, as entered.
    pub industries: String,
    /// Free text, e.g. "220,000".
    pub salary_min: String,
    pub currency: String,
    pub bio: String,
    pub value_proposition: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            title: "Chief Technology Officer".to_string(),
            company: "FinTech Global".to_string(),
            email: "john.doe@executive.com".to_string(),
            phone: "+41 79 123 4567".to_string(),
            location: "Zurich, Switzerland".to_string(),
            linkedin: "linkedin.com/in/johndoe-cto".to_string(),
            website: "johndoe.tech".to_string(),
            target_role: "CTO / VP Engineering / CIO".to_string(),
            industries: "FinTech, InsurTech, SaaS".to_string(),
            salary_min: "220,000".to_string(),
            currency: "CHF".to_string(),
            bio: "Visionary technology leader with 15+ years of experience in FinTech and \
                  Digital Transformation. Proven track record of scaling engineering teams \
                  from 10 to 200+."
                .to_string(),
            value_proposition: "I bridge the gap between complex technical strategy and \
                                business ROI, specializing in cost-reduction via AI \
                                implementation and legacy modernization."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regions {
    pub dach: bool,
    pub see: bool,
    pub uk: bool,
    pub us: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub auto_apply: bool,
    pub min_match_score: i64,
    pub daily_outreach_limit: i64,
    /// `HH:MM`, 24h.
    pub working_hours_start: String,
    pub working_hours_end: String,
    pub human_approval_required: bool,
    pub ghost_mode: bool,
    pub salary_benchmarking: bool,
    pub regions: Regions,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            auto_apply: false,
            min_match_score: 85,
            daily_outreach_limit: 25,
            working_hours_start: "08:00".to_string(),
            working_hours_end: "19:00".to_string(),
            human_approval_required: true,
            ghost_mode: true,
            salary_benchmarking: true,
            regions: Regions {
                dach: true,
                see: true,
                uk: false,
                us: false,
            },
        }
    }
}

/// Persistence for the single-user profile and settings.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn load_profile(&self) -> UserProfile;
    async fn save_profile(&self, profile: UserProfile);
    async fn load_settings(&self) -> AppSettings;
    /// Stores `settings` and returns the previous value.
    async fn save_settings(&self, settings: AppSettings) -> AppSettings;
}

/// Process-local store, seeded with the defaults.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profile: RwLock<UserProfile>,
    settings: RwLock<AppSettings>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load_profile(&self) -> UserProfile {
        self.profile.read().await.clone()
    }

    async fn save_profile(&self, profile: UserProfile) {
        *self.profile.write().await = profile;
    }

    async fn load_settings(&self) -> AppSettings {
        self.settings.read().await.clone()
    }

    async fn save_settings(&self, settings: AppSettings) -> AppSettings {
        std::mem::replace(&mut *self.settings.write().await, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_starts_with_defaults() {
        let store = InMemoryProfileStore::new();
        assert_eq!(store.load_profile().await.name, "John Doe");
        assert_eq!(store.load_settings().await.min_match_score, 85);
    }

    #[tokio::test]
    async fn test_save_settings_returns_previous() {
        let store = InMemoryProfileStore::new();
        let next = AppSettings {
            ghost_mode: false,
            ..AppSettings::default()
        };

        let previous = store.save_settings(next.clone()).await;

        assert!(previous.ghost_mode);
        assert_eq!(store.load_settings().await, next);
    }

    #[test]
    fn test_default_bio_has_no_double_spaces() {
        assert!(!UserProfile::default().bio.contains("  "));
    }
}
