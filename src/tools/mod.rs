//! FitPlan Tools module
//!
//! MCP tool implementations: validation, plan generation, saved plan history
//! and service status.

pub mod history;
pub mod plans;
pub mod status;
pub mod validation;
