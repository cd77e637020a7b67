//! Living documentation generator for BDD test runs.
//!
//! This crate turns the lifecycle events of a [Gherkin] test run into a
//! [Hugo]-compatible content tree: one directory per feature, holding an
//! `index.mmark` document (`+++` front-matter followed by a markdown body)
//! and, for every executed step, a full-size screenshot plus a bounded
//! thumbnail.
//!
//! The crate is a pure event consumer. An external test runner drives the
//! [`LivingDocs`] writer through [`Writer::handle_event()`] with a fixed
//! sequence of [`event::Run`] values; a browser-automation driver is plugged
//! in behind the [`Screenshooter`] seam. Everything here is synchronous and
//! single-threaded, with exactly one feature in flight at a time.
//!
//! ```no_run
//! use livingdoc::{LivingDocs, NoScreenshots, Writer as _, event};
//!
//! let mut writer = LivingDocs::new("livingdocs/content/web", NoScreenshots);
//! let cli = livingdoc::writer::livingdocs::Cli::default();
//! writer.handle_event(event::Run::Started, &cli)?;
//! // ... feature/scenario/step events, as emitted by the runner ...
//! writer.handle_event(event::Run::Finished, &cli)?;
//! # Ok::<(), livingdoc::Error>(())
//! ```
//!
//! [Gherkin]: https://cucumber.io/docs/gherkin/reference
//! [Hugo]: https://gohugo.io

pub extern crate gherkin;

pub mod document;
pub mod error;
pub mod event;
pub mod screenshot;
pub mod slug;
pub mod writer;

pub use self::{
    document::{Document, MetadataValue},
    error::{Error, Result},
    screenshot::{CaptureError, CaptureResult, NoScreenshots, Screenshooter},
    writer::{LivingDocs, Writer},
};
