//! Feature-level events.

use super::{scenario_events, source::Source};

/// Event specific to a particular [Feature].
///
/// [Feature]: https://cucumber.io/docs/gherkin/reference#feature
#[derive(Clone, Debug)]
pub enum Feature {
    /// [`Feature`] execution being started.
    ///
    /// [`Feature`]: gherkin::Feature
    Started,

    /// [`Scenario`] event.
    ///
    /// [`Scenario`]: gherkin::Scenario
    Scenario(Source<gherkin::Scenario>, scenario_events::Scenario),

    /// [`Feature`] execution being finished.
    ///
    /// [`Feature`]: gherkin::Feature
    Finished,
}
