//! CLI configuration for the living-documentation writer.

use std::path::PathBuf;

/// CLI options of a [`LivingDocs`] [`Writer`].
///
/// [`LivingDocs`]: super::LivingDocs
/// [`Writer`]: crate::Writer
#[derive(Clone, Debug, Default, clap::Args)]
#[group(skip)]
pub struct Cli {
    /// Directory to write the living-documentation content tree into.
    ///
    /// Overrides whatever directory the writer was constructed with.
    #[arg(
        id = "livingdoc-output",
        long = "livingdoc-output",
        value_name = "DIR",
        global = true
    )]
    pub output: Option<PathBuf>,

    /// Section of a Hugo site to write into, resolved as
    /// `<cwd>/livingdocs/content/<SECTION>`.
    #[arg(
        id = "livingdoc-section",
        long = "livingdoc-section",
        value_name = "SECTION",
        global = true,
        conflicts_with = "livingdoc-output"
    )]
    pub section: Option<String>,
}

impl Cli {
    /// Creates a new [`Cli`] pointing at the given output directory.
    #[must_use]
    pub fn with_output(output: impl Into<PathBuf>) -> Self {
        Self {
            output: Some(output.into()),
            section: None,
        }
    }
}
