//! End-to-end tests driving [`LivingDocs`] with full event sequences.

use std::{fs, path::PathBuf, time::Duration};

use gherkin::GherkinEnv;
use livingdoc::{
    CaptureResult, LivingDocs, NoScreenshots, Screenshooter, Writer as _,
    event::{self, Source, Status},
    writer::livingdocs::Cli,
};

// language=Gherkin
const FEATURE: &str = r"
@web @login
Feature: Login
  Signing in and out of the application.

  Scenario: happy path
    Given an account
    When I sign in
    Then I am greeted

  Scenario: wrong password
    Given an account
    When I sign in with a wrong password

  Scenario: locked out
    Given a locked account
";

fn parse_feature(source_path: &str) -> gherkin::Feature {
    let mut feature = gherkin::Feature::parse(FEATURE, GherkinEnv::default())
        .expect("failed to parse feature");
    feature.path = Some(PathBuf::from(source_path));
    feature
}

/// Drives `writer` through the runner's natural event order for `feature`,
/// finishing the n-th scenario with `statuses[n]` (steps inherit it).
fn run_feature<S: Screenshooter>(
    writer: &mut LivingDocs<S>,
    feature: &gherkin::Feature,
    statuses: &[Status],
) -> livingdoc::Result<()> {
    let cli = Cli::default();
    let feat = Source::new(feature.clone());

    let fire = |writer: &mut LivingDocs<S>, ev| {
        writer.handle_event(event::Run::Feature(feat.clone(), ev), &cli)
    };

    fire(writer, event::Feature::Started)?;
    for (scenario, &status) in feature.scenarios.iter().zip(statuses) {
        let sc = Source::new(scenario.clone());
        fire(
            writer,
            event::Feature::Scenario(sc.clone(), event::Scenario::Started),
        )?;
        for step in &scenario.steps {
            let st = Source::new(step.clone());
            fire(
                writer,
                event::Feature::Scenario(
                    sc.clone(),
                    event::Scenario::Step(st.clone(), event::Step::Started),
                ),
            )?;
            fire(
                writer,
                event::Feature::Scenario(
                    sc.clone(),
                    event::Scenario::Step(
                        st,
                        event::Step::Finished(status, Duration::from_millis(1234)),
                    ),
                ),
            )?;
        }
        fire(
            writer,
            event::Feature::Scenario(sc, event::Scenario::Finished(status)),
        )?;
    }
    fire(writer, event::Feature::Finished)
}

#[test]
fn writes_document_into_derived_feature_directory() {
    let out = tempfile::tempdir().unwrap();
    let mut writer = LivingDocs::new(out.path(), NoScreenshots);
    let feature = parse_feature("features/login.feature");

    run_feature(&mut writer, &feature, &[Status::Passed; 3]).unwrap();

    assert!(out.path().join("feature/login/index.mmark").is_file());
}

#[test]
fn front_matter_carries_title_tags_and_scenario_counts() {
    let out = tempfile::tempdir().unwrap();
    let mut writer = LivingDocs::new(out.path(), NoScreenshots);
    let feature = parse_feature("features/login.feature");

    run_feature(
        &mut writer,
        &feature,
        &[Status::Passed, Status::Passed, Status::Failed],
    )
    .unwrap();

    let doc =
        fs::read_to_string(out.path().join("feature/login/index.mmark")).unwrap();
    let header: Vec<_> = doc.lines().take_while(|l| *l != "").collect();

    assert_eq!(header[0], "+++");
    assert!(header.contains(&"title = \"Login\""));
    assert!(header.contains(&"tags = [\"web\", \"login\"]"));
    assert!(header.contains(&"num_scenarios = \"3\""));
    assert!(header.contains(&"num_scenarios_passing = \"2\""));
    assert_eq!(doc.lines().filter(|l| *l == "+++").count(), 2);
}

#[test]
fn body_contains_description_marker_and_scenario_tables() {
    let out = tempfile::tempdir().unwrap();
    let mut writer = LivingDocs::new(out.path(), NoScreenshots);
    let feature = parse_feature("features/login.feature");

    run_feature(&mut writer, &feature, &[Status::Passed; 3]).unwrap();

    let doc =
        fs::read_to_string(out.path().join("feature/login/index.mmark")).unwrap();

    assert!(doc.contains("Signing in and out of the application."));
    assert!(doc.contains("<!--more-->"));
    assert!(doc.contains("### happy path"));
    assert!(doc.contains("### wrong password"));
    assert!(doc.contains("### locked out"));
    assert_eq!(doc.matches("{.table .table-hover}").count(), 3);
    assert_eq!(doc.matches(" Step | Status | Time |   ").count(), 3);
    assert_eq!(doc.matches("------|--------|------|---").count(), 3);
}

#[test]
fn failed_capture_degrades_rows_and_writes_no_images() {
    let out = tempfile::tempdir().unwrap();
    let mut writer = LivingDocs::new(out.path(), NoScreenshots);
    let feature = parse_feature("features/login.feature");

    run_feature(&mut writer, &feature, &[Status::Passed; 3]).unwrap();

    let doc =
        fs::read_to_string(out.path().join("feature/login/index.mmark")).unwrap();
    let rows: Vec<_> = doc
        .lines()
        .filter(|l| l.contains(" | passed | "))
        .collect();

    // All 6 steps of the feature keep their rows.
    assert_eq!(rows.len(), 6);
    for row in rows {
        assert!(row.ends_with("| error capturing"), "unexpected row: {row}");
        assert!(row.contains("| passed | 1.23 |"));
    }
    let images: Vec<_> = fs::read_dir(out.path().join("feature/login"))
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "png"))
        .collect();
    assert!(images.is_empty());
}

#[test]
fn captured_screenshots_are_thumbnailed_and_linked() {
    let out = tempfile::tempdir().unwrap();
    let shooter = |path: &std::path::Path| -> CaptureResult {
        image::RgbaImage::new(300, 180)
            .save(path)
            .map_err(livingdoc::CaptureError::from)
    };
    let mut writer = LivingDocs::new(out.path(), shooter);
    let feature = parse_feature("features/login.feature");

    run_feature(&mut writer, &feature, &[Status::Passed; 3]).unwrap();

    let dir = out.path().join("feature/login");
    assert!(dir.join("an-account.png").is_file());
    assert!(dir.join("an-account_tm.png").is_file());
    assert_eq!(
        image::image_dimensions(dir.join("an-account_tm.png")).unwrap(),
        (100, 60),
    );

    let doc = fs::read_to_string(dir.join("index.mmark")).unwrap();
    assert!(doc.contains(
        "<a href=\"an-account.png\">\
         <img class=\"img-thumbnail\" src=\"an-account_tm.png\" width=\"100\" />\
         </a>"
    ));
    assert!(!doc.contains("error capturing"));
}

#[test]
fn sequential_features_get_their_own_directories() {
    let out = tempfile::tempdir().unwrap();
    let mut writer = LivingDocs::new(out.path(), NoScreenshots);
    let login = parse_feature("features/login.feature");
    let signup = parse_feature("features/signup.feature");

    run_feature(&mut writer, &login, &[Status::Passed; 3]).unwrap();
    run_feature(&mut writer, &signup, &[Status::Failed; 3]).unwrap();

    assert!(out.path().join("feature/login/index.mmark").is_file());
    assert!(out.path().join("feature/signup/index.mmark").is_file());

    let signup_doc =
        fs::read_to_string(out.path().join("feature/signup/index.mmark")).unwrap();
    assert!(signup_doc.contains("num_scenarios_passing = \"0\""));
}

#[test]
fn rerunning_a_feature_into_a_fresh_tree_overwrites_nothing_shared() {
    let out = tempfile::tempdir().unwrap();
    let mut writer = LivingDocs::new(out.path(), NoScreenshots);
    let feature = parse_feature("features/login.feature");

    run_feature(&mut writer, &feature, &[Status::Passed; 3]).unwrap();
    // The directory now exists, so documenting the same feature again into
    // the same tree is rejected up front.
    let second = run_feature(&mut writer, &feature, &[Status::Passed; 3]);

    assert!(matches!(second, Err(livingdoc::Error::CreateDir { .. })));
    assert!(out.path().join("feature/login/index.mmark").is_file());
}
