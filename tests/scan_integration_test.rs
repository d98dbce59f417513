mod common;

use common::Project;
use indoc::indoc;
use opacity_migrate::{
    process_file, scan_directory, ConsoleReporter, MigrateError, RunSummary, ScanOptions,
};
use pretty_assertions::assert_eq;
use std::fs;

fn run(project: &Project, dry_run: bool) -> (RunSummary, String) {
    let options = ScanOptions::new(project.root()).dry_run(dry_run);
    let mut reporter = ConsoleReporter::new(Vec::new(), dry_run);
    let summary = scan_directory(&options, &mut reporter).unwrap();
    (summary, String::from_utf8(reporter.into_inner()).unwrap())
}

#[test]
fn test_rewrites_every_occurrence_in_nested_files() {
    let project = Project::new();
    project.file(
        "lib/theme.dart",
        indoc! {"
            final shadow = Colors.black.withOpacity(0.1);
            final overlay = Colors.white.withOpacity( .5 );
        "},
    );
    project.file("lib/widgets/card.dart", "color: Color.red.withOpacity(0.9),\n");

    let (summary, output) = run(&project, false);

    assert_eq!(summary.files_changed, 2);
    assert_eq!(summary.total_replacements, 3);
    assert_eq!(
        project.read("lib/theme.dart"),
        indoc! {"
            final shadow = Colors.black.withAlpha(26);
            final overlay = Colors.white.withAlpha(128);
        "}
    );
    assert_eq!(
        project.read("lib/widgets/card.dart"),
        "color: Color.red.withAlpha(230),\n"
    );

    let theme = project.path("lib/theme.dart");
    let card = project.path("lib/widgets/card.dart");
    assert_eq!(
        output,
        format!(
            "Updated {} (2 changes)\nUpdated {} (1 changes)\n\nSummary: 2 files changed, 3 replacements.\n",
            theme.display(),
            card.display()
        )
    );
}

#[test]
fn test_non_target_files_are_untouched() {
    let project = Project::new();
    project.file("lib/main.dart", "a.withOpacity(1)");
    project.file("notes.txt", "a.withOpacity(1)");
    // Not valid UTF-8: reading it would abort the run.
    project.file("assets/logo.png", [0x89, 0x50, 0x4e, 0x47, 0xff, 0xfe]);

    let (summary, _) = run(&project, false);

    assert_eq!(summary.files_changed, 1);
    assert_eq!(summary.files_scanned, 1);
    assert_eq!(project.read("notes.txt"), "a.withOpacity(1)");
}

#[test]
fn test_files_without_matches_are_not_rewritten() {
    let project = Project::new();
    project.file("lib/plain.dart", "final x = 1;\n");
    let before = project.modified("lib/plain.dart");
    std::thread::sleep(std::time::Duration::from_millis(20));

    let (summary, output) = run(&project, false);

    assert_eq!(summary, RunSummary { files_scanned: 1, ..Default::default() });
    assert_eq!(project.modified("lib/plain.dart"), before);
    assert_eq!(output, "\nSummary: 0 files changed, 0 replacements.\n");
}

#[test]
fn test_dry_run_has_no_side_effects() {
    let project = Project::new();
    let original = "a.withOpacity(0.25)\nb.withOpacity(0.75)\n";
    let path = project.file("lib/a.dart", original);
    let before = project.modified("lib/a.dart");
    std::thread::sleep(std::time::Duration::from_millis(20));

    let (summary, output) = run(&project, true);

    assert_eq!(summary.total_replacements, 2);
    assert_eq!(project.read("lib/a.dart"), original);
    assert_eq!(project.modified("lib/a.dart"), before);
    assert_eq!(fs::read_dir(project.path("lib")).unwrap().count(), 1);
    assert_eq!(
        output,
        format!(
            "[DRY RUN] Updated {} (2 changes)\n\nSummary: 1 files changed, 2 replacements.\nDry run mode: No files were actually modified.\n",
            path.display()
        )
    );
}

#[test]
fn test_second_run_finds_nothing() {
    let project = Project::new();
    project.file("a.dart", "x.withOpacity(.3).withOpacity(0.7)");

    let (first, _) = run(&project, false);
    let (second, _) = run(&project, false);

    assert_eq!(first.total_replacements, 2);
    assert_eq!(second.total_replacements, 0);
    assert_eq!(project.read("a.dart"), "x.withAlpha(76).withAlpha(178)");
}

#[test]
fn test_undecodable_target_file_aborts_run() {
    let project = Project::new();
    let bad = project.file("lib/bad.dart", [0x61, 0xff, 0x62]);

    let options = ScanOptions::new(project.root());
    let mut reporter = ConsoleReporter::new(Vec::new(), false);
    let err = scan_directory(&options, &mut reporter).unwrap_err();

    assert!(matches!(err, MigrateError::Decode { ref path } if *path == bad));
    assert!(reporter.into_inner().is_empty());
}

#[test]
fn test_process_file_reports_count() {
    let project = Project::new();
    let path = project.file("a.dart", "a.withOpacity(1)\nb.withOpacity(0)\n");

    assert_eq!(process_file(&path, false).unwrap(), 2);
    assert_eq!(project.read("a.dart"), "a.withAlpha(255)\nb.withAlpha(0)\n");
}

#[test]
fn test_custom_extension() {
    let project = Project::new();
    project.file("src/Main.kt", "c.withOpacity(1)");
    project.file("lib/main.dart", "c.withOpacity(1)");

    let options = ScanOptions::new(project.root()).with_extension("kt");
    let mut reporter = ConsoleReporter::new(Vec::new(), false);
    let summary = scan_directory(&options, &mut reporter).unwrap();

    assert_eq!(summary.files_changed, 1);
    assert_eq!(project.read("src/Main.kt"), "c.withAlpha(255)");
    assert_eq!(project.read("lib/main.dart"), "c.withOpacity(1)");
}

#[test]
fn test_file_named_only_by_extension_is_rewritten() {
    let project = Project::new();
    project.file("lib/.dart", "a.withOpacity(1)");

    let (summary, _) = run(&project, false);

    assert_eq!(summary.files_changed, 1);
    assert_eq!(project.read("lib/.dart"), "a.withAlpha(255)");
}
