//! Key occurrences in a lifecycle of a documented test run.
//!
//! The top-level enum here is [`Run`].
//!
//! An external test runner emits these in a fixed order: [`Run::Started`],
//! then for each feature a [`Feature::Started`]/[`Feature::Finished`] pair
//! bracketing its scenarios and their steps, then [`Run::Finished`]. The
//! writers in this crate never initiate anything on their own; they only
//! react to this stream.

pub mod feature_events;
pub mod run_events;
pub mod scenario_events;
pub mod source;
pub mod step_events;

pub use self::{
    feature_events::Feature,
    run_events::Run,
    scenario_events::Scenario,
    source::Source,
    step_events::{Status, Step},
};
