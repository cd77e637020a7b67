//! Tools for outputting [`Run`] events.
//!
//! [`Run`]: crate::event::Run

pub mod livingdocs;

use crate::event;

#[doc(inline)]
pub use self::livingdocs::LivingDocs;

/// Writer of [`Run`] events to some output.
///
/// Writers are passive: the external test runner feeds them events in its
/// fixed lifecycle order and they react synchronously, one event at a time.
///
/// [`Run`]: crate::event::Run
pub trait Writer {
    /// CLI options of this [`Writer`].
    type Cli: clap::Args + Default;

    /// Handles the given [`Run`] event.
    ///
    /// # Errors
    ///
    /// If handling the event requires output that cannot be produced, e.g. a
    /// feature directory or document that cannot be written.
    ///
    /// [`Run`]: crate::event::Run
    fn handle_event(&mut self, ev: event::Run, cli: &Self::Cli) -> crate::Result<()>;
}
