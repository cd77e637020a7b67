//! Scenario-level events.

use super::{source::Source, step_events};

/// Event specific to a particular [Scenario].
///
/// [Scenario]: https://cucumber.io/docs/gherkin/reference#example
#[derive(Clone, Debug)]
pub enum Scenario {
    /// [`Scenario`] execution being started.
    ///
    /// [`Scenario`]: gherkin::Scenario
    Started,

    /// [`Step`] event.
    ///
    /// [`Step`]: gherkin::Step
    Step(Source<gherkin::Step>, step_events::Step),

    /// [`Scenario`]'s execution being finished with the given outcome.
    ///
    /// [`Scenario`]: gherkin::Scenario
    Finished(step_events::Status),
}
