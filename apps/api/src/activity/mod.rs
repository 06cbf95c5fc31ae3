//! Agent activity feed shown on the dashboard.

pub mod handlers;
pub mod scheduler;
pub mod simulator;

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::gateway::StructuredResponse;

pub const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentName {
    #[serde(rename = "CV Analyst")]
    CvAnalyst,
    #[serde(rename = "Recruiter Discovery")]
    RecruiterDiscovery,
    #[serde(rename = "Opportunity Miner")]
    OpportunityMiner,
    #[serde(rename = "Comms Orchestrator")]
    CommsOrchestrator,
    #[serde(rename = "Campaign Strategist")]
    CampaignStrategist,
    #[serde(rename = "Due Diligence")]
    DueDiligence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentLog {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub agent: AgentName,
    pub message: String,
    pub status: LogStatus,
}

/// Source of log timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed clock, moved forward by hand.
#[cfg(test)]
pub struct ManualClock(Mutex<DateTime<Utc>>);

#[cfg(test)]
impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self(Mutex::new(start))
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.0.lock().unwrap();
        *now += by;
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Bounded, newest-first log of agent activity. Oldest entries are evicted once
/// `capacity` is reached.
pub struct ActivityFeed {
    entries: Mutex<VecDeque<AgentLog>>,
    capacity: usize,
    clock: Box<dyn Clock>,
}

impl ActivityFeed {
    pub fn new(capacity: usize, clock: Box<dyn Clock>) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            clock,
        }
    }

    pub fn push(&self, agent: AgentName, message: impl Into<String>, status: LogStatus) -> AgentLog {
        let log = AgentLog {
            id: Uuid::new_v4(),
            timestamp: self.clock.now(),
            agent,
            message: message.into(),
            status,
        };

        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if entries.len() == self.capacity {
            entries.pop_back();
        }
        entries.push_front(log.clone());
        log
    }

    /// Logs the outcome of a live agent call. Cancelled calls leave no trace.
    pub fn record_outcome<T>(&self, agent: AgentName, task: &str, outcome: &StructuredResponse<T>) {
        match outcome {
            StructuredResponse::Ok(_) => {
                self.push(agent, format!("{task} completed"), LogStatus::Success);
            }
            StructuredResponse::Fallback(_) => {
                self.push(
                    agent,
                    format!("{task} unavailable, showing cached insights"),
                    LogStatus::Warning,
                );
            }
            StructuredResponse::Cancelled => {}
        }
    }

    /// Up to `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<AgentLog> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.iter().take(limit).cloned().collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
