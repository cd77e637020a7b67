//! Step-level events and outcomes.

use std::time::Duration;

use derive_more::with_trait::Display;

/// Event specific to a particular [Step].
///
/// [Step]: https://cucumber.io/docs/gherkin/reference#step
#[derive(Clone, Copy, Debug)]
pub enum Step {
    /// [`Step`] execution being started.
    ///
    /// [`Step`]: gherkin::Step
    Started,

    /// [`Step`] execution being finished with the given outcome and wall
    /// clock duration.
    ///
    /// [`Step`]: gherkin::Step
    Finished(Status, Duration),
}

/// Outcome of executing a [`Step`] or a [`Scenario`].
///
/// The [`Display`] form is what ends up in the rendered step table, so it
/// stays lowercase.
///
/// [`Scenario`]: gherkin::Scenario
/// [`Step`]: gherkin::Step
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Status {
    /// Executed and succeeded.
    #[display("passed")]
    Passed,

    /// Executed and failed.
    #[display("failed")]
    Failed,

    /// Not executed (no matching implementation, or an earlier step failed).
    #[display("skipped")]
    Skipped,
}

impl Status {
    /// Indicates whether this [`Status`] counts as passing.
    #[must_use]
    pub const fn is_passed(self) -> bool {
        matches!(self, Self::Passed)
    }
}
