use shiftcal_calendar::NaiveDate;
use shiftcal_roster::{Roster, RosterError, YearlyWorkplace};

#[test]
fn missing_file_is_empty() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let roster = Roster::load(&dir.path().join("roster.json")).expect("load succeeds");
    assert!(roster.shift_types().is_empty());
    assert!(roster.active_routine().is_none());
}

#[test]
fn seed_save_and_reload() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("roster.json");

    let mut roster = Roster::load(&path).unwrap();
    assert!(roster.seed_defaults_if_empty());
    roster.upsert_yearly_workplace(YearlyWorkplace {
        year: 2025,
        workplace: "공항".into(),
    });
    roster.save(&path).expect("save succeeds");

    let mut reloaded = Roster::load(&path).expect("reload succeeds");
    assert_eq!(reloaded, roster);
    assert!(!reloaded.seed_defaults_if_empty());
    assert_eq!(reloaded.yearly_workplace(2025).unwrap().workplace, "공항");
}

#[test]
fn routine_cycle_drives_labels() {
    let mut roster = Roster::default();
    roster.seed_defaults_if_empty();
    let routine = roster.active_routine().unwrap().id;
    let cycle = roster.routine_cycle(routine).unwrap();

    let label = |d| cycle.label_for(NaiveDate::from_ymd_opt(2025, 9, d).unwrap());
    assert_eq!(label(1), "주간");
    assert_eq!(label(3), "야간");
    assert_eq!(label(5), "휴무");
    assert_eq!(label(7), "주간");
}

#[test]
fn corrupt_file_is_json_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("roster.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Roster::load(&path).unwrap_err(),
        RosterError::Json { .. }
    ));
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("data").join("nested").join("roster.json");

    let mut roster = Roster::default();
    roster.seed_defaults_if_empty();
    roster.save(&path).expect("save into new directories");

    assert_eq!(Roster::load(&path).unwrap(), roster);
}
