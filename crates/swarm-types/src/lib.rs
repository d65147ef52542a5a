//! Swarm Types
//!
//! Value types shared by the routing engine and its callers: classified
//! intents, flow state, routing decisions, chat history shapes and the
//! action-name tables that tool keys are matched against.

pub mod agent;
pub mod flow;
pub mod intent;
pub mod message;
pub mod router;
pub mod tool_registry;
pub mod tools;

pub use agent::*;
pub use flow::*;
pub use intent::*;
pub use message::*;
pub use router::*;
pub use tool_registry::ToolSet;
