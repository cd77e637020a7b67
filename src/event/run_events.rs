//! Top-level run events.

use super::{feature_events, source::Source};

/// Top-level event of a documented test run.
#[derive(Clone, Debug)]
pub enum Run {
    /// Test run being started.
    ///
    /// No output is produced for this; it exists so writers can observe the
    /// full lifecycle.
    Started,

    /// [`Feature`] event.
    ///
    /// [`Feature`]: gherkin::Feature
    Feature(Source<gherkin::Feature>, feature_events::Feature),

    /// Test run being finished.
    Finished,
}
