//! [Hugo] living-documentation [`Writer`] implementation.
//!
//! [`Writer`]: crate::Writer
//! [Hugo]: https://gohugo.io

pub mod cli;
pub mod writer;

pub use self::{cli::Cli, writer::LivingDocs};
