// End-to-end tests: scan a tree, format what the user would see

mod common;

use common::{create_tree, drain, scheduler_at};
use dirscope::config::ScanConfig;
use dirscope::model::Sorting;
use dirscope::report;
use dirscope::scanner::NoopProgress;
use dirscope::util::format_size;

#[test]
fn test_folder_sizes_format_as_displayed() {
    // One kilobyte-ish folder and one 2 Mb folder
    let dir = create_tree(&[
        ("a/item.dat", 1000),
        ("b/item.dat", 2_097_152),
    ]);
    let mut scheduler = scheduler_at(dir.path(), ScanConfig::default());
    drain(&mut scheduler);

    let entries = scheduler.entries(Sorting::Alphabetical);
    assert_eq!(entries[0].size, 1000);
    assert_eq!(format_size(entries[0].size), "1000.00 byte");
    assert_eq!(entries[1].size, 2_097_152);
    assert_eq!(format_size(entries[1].size), "2.00 Mb");
}

#[test]
fn test_report_over_mixed_tree() {
    let dir = create_tree(&[
        ("photos/one.jpg", 1500),
        ("photos/two.jpg", 1500),
        ("readme.txt", 100),
    ]);
    let mut scheduler = scheduler_at(dir.path(), ScanConfig::default());

    let mut out = Vec::new();
    report::run(&mut scheduler, Sorting::Size, &NoopProgress, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("readme.txt"));
    assert!(text.contains("photos/"));
    assert!(text.contains("2.93 kb")); // 3000 bytes
    assert!(text.contains("3.03 kb  total")); // 3100 bytes
}

#[test]
fn test_largest_files_ranking() {
    let dir = create_tree(&[
        ("media/huge.iso", 9000),
        ("media/mid.zip", 4000),
        ("docs/small.txt", 10),
    ]);
    let mut scheduler = scheduler_at(dir.path(), ScanConfig::default());
    drain(&mut scheduler);

    let files = scheduler.largest_files();
    assert_eq!(files.len(), 3);
    assert_eq!(files[0].path, "media/huge.iso");
    assert_eq!(files[0].size, 9000);
    assert_eq!(files[1].path, "media/mid.zip");
    assert!(files[0].modified > 0);
}
