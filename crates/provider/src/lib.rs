//! Timeplus infrastructure provider.
//!
//! This crate turns declarative configuration into Timeplus entities and
//! keeps state stable across round trips with a Service that normalizes what
//! it is sent.
//!
//! # Modules
//! - [`registry`]: the [`Provider`] entry point
//! - [`resources`] and [`data_sources`]: one reconciler per entity
//! - [`plan`]: plan computation from schema, prior state, and config
//! - [`schema`], [`validators`], [`diagnostics`]: attribute declarations and checks
//! - [`drift`]: comparators deciding what counts as a real change
//! - [`error`]: the provider error type

pub mod data_sources;
pub mod diagnostics;
pub mod drift;
pub mod error;
pub mod plan;
pub mod registry;
pub mod resources;
pub mod schema;
pub mod validators;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{Action, ProviderError, Result};
pub use plan::{PlanAction, PlannedChange};
pub use registry::{Provider, ReadOutcome, TYPE_PREFIX};
pub use schema::{Attribute, Block, PlanModifier, Schema};
