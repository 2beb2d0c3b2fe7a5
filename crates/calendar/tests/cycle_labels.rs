use shiftcal_calendar::{CalendarError, Cycle, NaiveDate, cycle_label_for, floor_mod};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn cycles() -> Vec<Cycle> {
    vec![
        Cycle::from_csv("주,주,야,야,휴,휴").unwrap(),
        Cycle::new(["A"]).unwrap(),
        Cycle::new(["D", "N", "off", "off"]).unwrap(),
        Cycle::new(["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"]).unwrap(),
    ]
}

#[test]
fn default_offset_equals_zero_and_label_is_member() {
    for cycle in cycles() {
        for month in 1..=12u32 {
            for day in 1..=28u32 {
                let d = date(2025, month, day);
                let label = cycle.label_for(d);
                assert_eq!(label, cycle.label_with_offset(d, 0));
                assert_eq!(cycle_label_for(d, cycle.labels(), 0).unwrap(), label);
                assert!(cycle.labels().iter().any(|l| l == label));
            }
        }
    }
}

#[test]
fn periodic_within_a_month() {
    for cycle in cycles() {
        let n = cycle.len() as u32;
        for a in 1..=31u32 {
            for b in a..=31u32 {
                if (b - a) % n == 0 {
                    assert_eq!(
                        cycle.label_for(date(2025, 1, a)),
                        cycle.label_for(date(2025, 1, b)),
                        "days {a} and {b} should share a label with period {n}"
                    );
                }
            }
        }
    }
}

#[test]
fn phase_resets_at_month_boundary() {
    let cycle = Cycle::from_csv("주,주,야,야,휴,휴").unwrap();
    // Continuing from Jan 31 (index 30 mod 6 = 0) would give index 1 on Feb 1.
    assert_eq!(cycle.label_for(date(2025, 1, 31)), "주");
    assert_eq!(cycle.label_for(date(2025, 2, 1)), cycle.labels()[0]);
    for month in 1..=12u32 {
        assert_eq!(cycle.label_for(date(2025, month, 1)), "주");
    }
}

#[test]
fn start_offset_at_day_one() {
    let cycle = Cycle::from_csv("주,주,야,야,휴,휴").unwrap();
    for offset in -12i64..=12 {
        let expected = &cycle.labels()[floor_mod(offset, 6) as usize];
        assert_eq!(cycle.label_with_offset(date(2025, 9, 1), offset), expected);
    }
}

#[test]
fn concrete_september_2025() {
    let labels = ["주", "주", "야", "야", "휴", "휴"];
    assert_eq!(cycle_label_for(date(2025, 9, 1), &labels, 0).unwrap(), "주");
    assert_eq!(cycle_label_for(date(2025, 9, 3), &labels, 0).unwrap(), "야");
    assert_eq!(cycle_label_for(date(2025, 9, 7), &labels, 0).unwrap(), "주");
}

#[test]
fn empty_cycle_is_rejected() {
    let labels: Vec<String> = Vec::new();
    assert_eq!(
        cycle_label_for(date(2025, 9, 1), &labels, 3).unwrap_err(),
        CalendarError::EmptyCycle
    );
}
