//! Background chatter for the activity feed: one plausible agent line per tick.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::activity::scheduler::PeriodicTask;
use crate::activity::{ActivityFeed, AgentName, LogStatus};

const CATALOGUE: &[(AgentName, &str, LogStatus)] = &[
    (AgentName::OpportunityMiner, "Scanning LinkedIn Jobs for C-level roles in DACH", LogStatus::Info),
    (AgentName::OpportunityMiner, "New high-match opportunity detected in Zurich", LogStatus::Success),
    (AgentName::OpportunityMiner, "Filtered 14 postings below the minimum match score", LogStatus::Info),
    (AgentName::RecruiterDiscovery, "Identified 3 executive search partners covering FinTech", LogStatus::Success),
    (AgentName::RecruiterDiscovery, "Enriching contact data for Stanton Chase partners", LogStatus::Info),
    (AgentName::CommsOrchestrator, "Follow-up queued for Egon Zehnder (day 7)", LogStatus::Info),
    (AgentName::CommsOrchestrator, "Daily outreach limit at 80%", LogStatus::Warning),
    (AgentName::CvAnalyst, "Tailoring CV variant for VP Engineering roles", LogStatus::Info),
    (AgentName::CampaignStrategist, "Response rate below target, rebalancing channels", LogStatus::Warning),
    (AgentName::CampaignStrategist, "Weekly pipeline review complete", LogStatus::Success),
    (AgentName::DueDiligence, "Refreshing market data for shortlisted companies", LogStatus::Info),
];

pub struct ActivitySimulator {
    feed: Arc<ActivityFeed>,
    rng: StdRng,
}

impl ActivitySimulator {
    pub fn new(feed: Arc<ActivityFeed>, rng: StdRng) -> Self {
        Self { feed, rng }
    }

    /// Appends one line picked from the catalogue.
    pub fn tick(&mut self) {
        if let Some((agent, message, status)) = CATALOGUE.choose(&mut self.rng) {
            self.feed.push(*agent, *message, *status);
        }
    }

    pub fn spawn(mut self, period: Duration) -> PeriodicTask {
        PeriodicTask::start("activity-simulator", period, move || self.tick())
    }
}
