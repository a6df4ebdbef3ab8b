// Scheduler integration tests
// Verify pass lifecycle end to end against real directory trees

mod common;

use common::{create_tree, drain, scheduler_at};
use dirscope::config::{ExclusionSet, ScanConfig};
use dirscope::model::{ScanStatus, Sorting};
use dirscope::scanner::StepOutcome;

#[test]
fn test_aggregates_nested_children() {
    let dir = create_tree(&[
        ("docs/guide.md", 400),
        ("docs/api/reference.md", 600),
        ("media/clip.mp4", 5000),
        ("notes.txt", 25),
    ]);
    let mut scheduler = scheduler_at(dir.path(), ScanConfig::default());
    drain(&mut scheduler);

    let entries = scheduler.entries(Sorting::Alphabetical);
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].name, "docs");
    assert_eq!(entries[0].size, 1000);
    assert_eq!(entries[0].items, 2);
    assert_eq!(entries[1].name, "media");
    assert_eq!(entries[1].size, 5000);
    assert_eq!(entries[2].name, "notes.txt");
    assert_eq!(entries[2].size, 25);
    assert!(entries.iter().all(|e| e.status == ScanStatus::Done));
}

#[test]
fn test_unreadable_sibling_does_not_block_others() {
    let dir = create_tree(&[
        ("good/data.bin", 128),
        ("shaky/inner/file.txt", 64),
        ("also_good.txt", 32),
    ]);

    // Make one subtree unreadable where the platform lets us; whether or
    // not the restriction takes effect (e.g. running as root), the
    // siblings must still be sized and every pass must settle.
    #[cfg(unix)]
    let restricted = {
        use std::os::unix::fs::PermissionsExt;
        let target = dir.path().join("shaky/inner");
        std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o000)).unwrap();
        target
    };

    let mut scheduler = scheduler_at(dir.path(), ScanConfig::default());
    drain(&mut scheduler);

    let entries = scheduler.entries(Sorting::Alphabetical);
    let good = entries.iter().find(|e| e.name == "good").unwrap();
    let loose = entries.iter().find(|e| e.name == "also_good.txt").unwrap();
    assert_eq!(good.size, 128);
    assert_eq!(loose.size, 32);
    assert!(entries.iter().all(|e| e.status == ScanStatus::Done));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&restricted, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}

#[test]
fn test_excluded_type_contributes_zero_to_ancestors() {
    let dir = create_tree(&[
        ("assets/scene.level", 4096),
        ("assets/texture.png", 512),
    ]);
    let mut scheduler = scheduler_at(
        dir.path(),
        ScanConfig {
            excluded: ExclusionSet::new(["level"]),
            ..ScanConfig::default()
        },
    );
    drain(&mut scheduler);

    let entries = scheduler.entries(Sorting::Alphabetical);
    assert_eq!(entries[0].size, 512);
    assert_eq!(scheduler.total_size(), 512);
}

#[test]
fn test_cancel_mid_pass_freezes_entry() {
    let dir = create_tree(&[
        ("bulk/a.bin", 10),
        ("bulk/b.bin", 20),
        ("bulk/c.bin", 30),
        ("bulk/d.bin", 40),
    ]);
    let mut scheduler = scheduler_at(
        dir.path(),
        ScanConfig {
            batch_size: 1,
            ..ScanConfig::default()
        },
    );

    assert_eq!(scheduler.step(), StepOutcome::More);
    let entries = scheduler.entries(Sorting::Alphabetical);
    let bulk = &entries[0];
    assert_eq!(bulk.status, ScanStatus::Running);
    let partial = bulk.size;

    scheduler.cancel(&bulk.id);
    drain(&mut scheduler);

    let after = scheduler.entry(&bulk.id).unwrap();
    assert_eq!(after.status, ScanStatus::Cancelled);
    assert_eq!(after.size, partial);
}

#[test]
fn test_refresh_never_double_counts() {
    let dir = create_tree(&[("folder/one.dat", 300), ("folder/two.dat", 200)]);
    let mut scheduler = scheduler_at(dir.path(), ScanConfig::default());
    drain(&mut scheduler);

    let id = scheduler.entries(Sorting::Alphabetical)[0].id.clone();
    assert_eq!(scheduler.entry(&id).unwrap().size, 500);

    for _ in 0..3 {
        scheduler.refresh(&id);
        drain(&mut scheduler);
        assert_eq!(scheduler.entry(&id).unwrap().size, 500);
    }
}

#[test]
fn test_changing_root_supersedes_in_flight_passes() {
    let first = create_tree(&[("deep/a.bin", 100), ("deep/b.bin", 100)]);
    let second = create_tree(&[("fresh.txt", 9)]);

    let mut scheduler = scheduler_at(
        first.path(),
        ScanConfig {
            batch_size: 1,
            ..ScanConfig::default()
        },
    );
    scheduler.step();

    scheduler.set_root(second.path()).unwrap();
    drain(&mut scheduler);

    let entries = scheduler.entries(Sorting::Alphabetical);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "fresh.txt");
    assert_eq!(scheduler.total_size(), 9);
}

#[test]
fn test_size_sort_breaks_ties_by_identity() {
    let dir = create_tree(&[
        ("zeta/file.bin", 77),
        ("alpha/file.bin", 77),
        ("mid/file.bin", 77),
    ]);
    let mut scheduler = scheduler_at(dir.path(), ScanConfig::default());
    drain(&mut scheduler);

    let entries = scheduler.entries(Sorting::Size);
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}
