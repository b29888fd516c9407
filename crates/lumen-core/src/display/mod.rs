//! Display wrapper types for formatting journal output.
//!
//! Domain models implement `Display` for their full markdown view. Other
//! contexts (the list panel, the read-only summary, operation feedback) get
//! their own wrapper types, so the same decision can be rendered several ways
//! without the models knowing about presentation.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrapper │    │    Markdown     │
//! │   (Decision)    │───▶│      Types      │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Wrapper Types
//!
//! - [`DecisionList`]: list panel entries, newest first
//! - [`DecisionSummary`]: read-only dilemma and outcome view
//! - [`TemplateCatalog`]: templates grouped by category
//! - [`CreateResult`], [`UpdateResult`], [`DeleteResult`]: operation results
//! - [`OperationStatus`]: success and failure messages
//!
//! # Example
//!
//! ```rust
//! use jiff::Timestamp;
//! use lumen_core::{
//!     display::{CreateResult, DecisionSummary},
//!     models::{Decision, DecisionId},
//! };
//!
//! let mut decision = Decision::new(DecisionId::new("decision-1"), Timestamp::now());
//! decision.situation = "Choosing between job A and B".to_string();
//!
//! let created = format!("{}", CreateResult::new(decision.clone()));
//! assert!(created.contains("Created decision with ID: decision-1"));
//!
//! let summary = format!("{}", DecisionSummary(&decision));
//! assert!(summary.contains("**Choosing between job A and B**"));
//! assert!(summary.contains("Not yet specified."));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod summary;

pub use collections::{DecisionList, TemplateCatalog};
pub use datetime::{LocalDate, LocalDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
pub use summary::DecisionSummary;

/// Placeholder for a text block the user has not filled in.
pub const PLACEHOLDER: &str = "_Not yet specified._";
