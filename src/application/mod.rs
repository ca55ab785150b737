//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GuideUseCase` - Walks the operator through the Railway deployment

pub mod guide;

pub use guide::{GuideOptions, GuideOutcome, GuideUseCase};
