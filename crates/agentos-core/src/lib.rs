pub mod boilerplate;
pub mod checklist;
pub mod config;
pub mod error;
pub mod gateway;
pub mod insights;
pub mod io;
pub mod paths;
pub mod recommend;
pub mod specs;
pub mod status;

pub use error::{AgentOsError, Result};
