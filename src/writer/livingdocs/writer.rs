//! Main living-documentation writer implementation.

use std::{
    env, fs, io,
    path::{Component, Path, PathBuf},
    time::Duration,
};

use tracing::{debug, warn};

use crate::{
    Error, Writer,
    document::Document,
    event,
    screenshot::{self, Screenshooter},
    slug::slugify,
};

use super::cli::Cli;

/// Longest side of a generated screenshot thumbnail, in pixels.
const THUMBNAIL_MAX_SIDE: u32 = 100;

/// Marker substituted for the image cell of a step whose screenshot could
/// not be captured or thumbnailed.
const CAPTURE_ERROR_MARKER: &str = "error capturing";

/// Hugo shortcode cutting off the part of a document shown in list pages.
const READ_MORE_MARKER: &str = "<!--more-->";

/// Living-documentation [`Writer`] implementation, producing one [Hugo]
/// content directory per feature.
///
/// Each feature directory receives an `index.mmark` document (front-matter
/// plus a markdown table of every executed step) and, for each step whose
/// screenshot capture succeeds, a `<slug>.png`/`<slug>_tm.png` image pair.
///
/// # Ordering
///
/// This [`Writer`] expects events in the runner's natural order, with a
/// single feature in flight at a time. A scenario, step or feature-finished
/// event arriving with no feature in progress yields [`Error::OutOfOrder`].
///
/// [Hugo]: https://gohugo.io
#[derive(Debug)]
pub struct LivingDocs<S = crate::NoScreenshots> {
    /// Root directory of the produced content tree.
    output_dir: PathBuf,

    /// Source of step screenshots.
    screenshooter: S,

    /// Accumulated state of the feature currently in flight.
    feature: Option<FeatureDoc>,
}

/// Accumulated output state of a single feature.
#[derive(Debug)]
struct FeatureDoc {
    /// Document being built for this feature.
    doc: Document,

    /// Directory of this feature, relative to the output root
    /// (`feature/<basename>`).
    path: PathBuf,

    /// Number of scenarios finished so far.
    scenarios: usize,

    /// Number of scenarios finished with a passing status.
    scenarios_passing: usize,
}

impl<S: Screenshooter> Writer for LivingDocs<S> {
    type Cli = Cli;

    fn handle_event(&mut self, ev: event::Run, cli: &Self::Cli) -> crate::Result<()> {
        use event::{Feature, Run, Scenario, Step};

        self.apply_cli(cli);

        match ev {
            Run::Started | Run::Finished => Ok(()),
            Run::Feature(feat, ev) => match ev {
                Feature::Started => self.feature_started(&feat),
                Feature::Finished => self.feature_finished(),
                Feature::Scenario(sc, ev) => match ev {
                    Scenario::Started => self.scenario_started(&sc),
                    Scenario::Finished(status) => self.scenario_finished(status),
                    Scenario::Step(st, ev) => match ev {
                        Step::Started => Ok(()),
                        Step::Finished(status, duration) => {
                            self.step_finished(&st, status, duration)
                        }
                    },
                },
            },
        }
    }
}

impl<S: Screenshooter> LivingDocs<S> {
    /// Creates a new [`LivingDocs`] [`Writer`] rooting its content tree at
    /// the given `output_dir` and capturing step screenshots from the given
    /// `screenshooter`.
    ///
    /// The directory itself (and its parents) may or may not exist yet; only
    /// the per-feature subdirectories must not.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>, screenshooter: S) -> Self {
        Self {
            output_dir: output_dir.into(),
            screenshooter,
            feature: None,
        }
    }

    /// Creates a new [`LivingDocs`] [`Writer`] for the given `section` of a
    /// [Hugo] site rooted in the current working directory, i.e. writing
    /// into `<cwd>/livingdocs/content/<section>`.
    ///
    /// # Errors
    ///
    /// If the current working directory cannot be determined.
    ///
    /// [Hugo]: https://gohugo.io
    pub fn for_section(section: &str, screenshooter: S) -> io::Result<Self> {
        Ok(Self::new(section_dir(section)?, screenshooter))
    }

    /// Root directory of the produced content tree.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Applies the given [`Cli`] options to this [`LivingDocs`] [`Writer`].
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(output) = &cli.output {
            self.output_dir = output.clone();
        } else if let Some(section) = &cli.section {
            match section_dir(section) {
                Ok(dir) => self.output_dir = dir,
                Err(e) => {
                    warn!(section, error = %e, "cannot resolve section directory");
                }
            }
        }
    }

    /// Starts a fresh [`Document`] for the `feature` and creates its output
    /// directory.
    fn feature_started(&mut self, feature: &gherkin::Feature) -> crate::Result<()> {
        let path = doc_path(feature);
        let dir = self.output_dir.join(&path);

        if let Some(parent) = dir.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        // `create_dir`, not `create_dir_all`: an already existing leaf means
        // two features map to the same directory.
        fs::create_dir(&dir).map_err(|source| Error::CreateDir {
            path: dir.clone(),
            source,
        })?;
        debug!(feature = %feature.name, dir = %dir.display(), "created feature directory");

        let mut doc = Document::new(&feature.name, feature.tags.clone());
        doc.write_line(feature.description.as_deref().unwrap_or_default());
        doc.write_line(READ_MORE_MARKER);

        self.feature = Some(FeatureDoc {
            doc,
            path,
            scenarios: 0,
            scenarios_passing: 0,
        });
        Ok(())
    }

    /// Stores the scenario counts into the metadata and writes the rendered
    /// document out as `index.mmark`, overwriting any previous one.
    fn feature_finished(&mut self) -> crate::Result<()> {
        let mut feature = self.feature.take().ok_or(Error::OutOfOrder {
            event: "feature finished",
        })?;

        feature.doc.set_meta("num_scenarios", feature.scenarios);
        feature
            .doc
            .set_meta("num_scenarios_passing", feature.scenarios_passing);

        let target = self.output_dir.join(&feature.path).join("index.mmark");
        fs::write(&target, feature.doc.contents()).map_err(|source| Error::WriteDoc {
            path: target.clone(),
            source,
        })?;
        debug!(path = %target.display(), "wrote feature document");
        Ok(())
    }

    /// Appends the scenario heading and the step table header.
    fn scenario_started(&mut self, scenario: &gherkin::Scenario) -> crate::Result<()> {
        let feature = self.feature.as_mut().ok_or(Error::OutOfOrder {
            event: "scenario started",
        })?;

        feature.doc.write_line(format!("\n### {}", scenario.name));
        feature.doc.write_line("");
        feature.doc.write_line("{.table .table-hover}");
        feature.doc.write_line(" Step | Status | Time |   ");
        feature.doc.write_line("------|--------|------|---");
        Ok(())
    }

    /// Accumulates the scenario outcome into the feature counts.
    fn scenario_finished(&mut self, status: event::Status) -> crate::Result<()> {
        let feature = self.feature.as_mut().ok_or(Error::OutOfOrder {
            event: "scenario finished",
        })?;

        feature.scenarios += 1;
        if status.is_passed() {
            feature.scenarios_passing += 1;
        }
        Ok(())
    }

    /// Captures and thumbnails the step's screenshot, then appends the
    /// step's table row.
    ///
    /// Capture and thumbnailing failures degrade the image cell to a plain
    /// `error capturing` marker; the row itself is always written.
    fn step_finished(
        &mut self,
        step: &gherkin::Step,
        status: event::Status,
        duration: Duration,
    ) -> crate::Result<()> {
        let feature = self.feature.as_mut().ok_or(Error::OutOfOrder {
            event: "step finished",
        })?;

        let dir = self.output_dir.join(&feature.path);
        let slug = slugify(&step.value);
        let shot_name = format!("{slug}.png");
        let thumb_name = format!("{slug}_tm.png");

        let image_cell = match self
            .screenshooter
            .capture(&dir.join(&shot_name))
            .and_then(|()| {
                screenshot::thumbnail(
                    &dir.join(&shot_name),
                    &dir.join(&thumb_name),
                    THUMBNAIL_MAX_SIDE,
                )
            }) {
            Ok(()) => format!(
                "<a href=\"{shot_name}\">\
                 <img class=\"img-thumbnail\" src=\"{thumb_name}\" width=\"100\" />\
                 </a>",
            ),
            Err(e) => {
                warn!(step = %step.value, error = %e, "no screenshot for step");
                CAPTURE_ERROR_MARKER.to_owned()
            }
        };

        feature.doc.write_line(format!(
            "{} {} | {status} | {:.2} | {image_cell}",
            step.keyword,
            step.value,
            duration.as_secs_f64(),
        ));
        Ok(())
    }
}

/// Derives the content-tree directory of a `feature` from its source
/// filename: the second slash-delimited segment, extension stripped,
/// prefixed with `feature/` (`features/login.feature` → `feature/login`).
///
/// Falls back to the last segment's stem for single-segment paths, and to
/// the slugged feature name when the feature has no path at all.
fn doc_path(feature: &gherkin::Feature) -> PathBuf {
    let base = feature
        .path
        .as_deref()
        .and_then(second_segment_stem)
        .unwrap_or_else(|| slugify(&feature.name));
    Path::new("feature").join(base)
}

/// Extracts the extension-stripped second path segment (or the only one).
fn second_segment_stem(path: &Path) -> Option<String> {
    let mut segments = path.components().filter_map(|c| match c {
        Component::Normal(s) => Some(s),
        _ => None,
    });
    let first = segments.next()?;
    let chosen = segments.next().unwrap_or(first);
    Path::new(chosen)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

/// Resolves the content directory of a [Hugo] site `section` rooted in the
/// current working directory.
///
/// [Hugo]: https://gohugo.io
fn section_dir(section: &str) -> io::Result<PathBuf> {
    Ok(env::current_dir()?
        .join("livingdocs")
        .join("content")
        .join(section))
}
