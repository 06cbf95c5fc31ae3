//! The dashboard's AI agents. Each operation renders its prompt, declares the
//! record shape it expects and delegates the call to the gateway.

pub mod comms;
pub mod cv_analyst;
pub mod due_diligence;
pub mod fallbacks;
pub mod handlers;
pub mod opportunity_miner;
pub mod prompts;
pub mod strategist;
