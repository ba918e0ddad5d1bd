use chrono::NaiveDate;

use engine::{
    Amount, Command, Entry, EntryField, FieldValue, FormError, FormState, Outcome, Session,
    ValueType, ViewMode, validate,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn session_with(entries: Vec<Entry>) -> Session {
    Session::with_form(FormState::from(entries))
}

#[test]
fn scenario_empty_entry_reports_both_dates() {
    let mut session = Session::new();

    assert_eq!(session.submit().unwrap(), ViewMode::Editing);
    assert_eq!(
        session.error_messages(),
        vec![
            "start date of line 1 is empty.",
            "end date of line 1 is empty.",
        ]
    );
    assert_eq!(session.mode(), ViewMode::Editing);
}

#[test]
fn scenario_reversed_range_is_rejected() {
    let mut session = session_with(vec![Entry::new(
        date(2024, 1, 10),
        date(2024, 1, 5),
        ValueType::Fixed,
        Amount::from_units(100).unwrap(),
    )]);

    session.submit().unwrap();
    assert_eq!(
        session.error_messages(),
        vec!["start date of line 1 cannot be later than the end date."]
    );
    assert_eq!(session.mode(), ViewMode::Editing);
}

#[test]
fn scenario_valid_entry_reaches_summary_and_back_keeps_entries() {
    let entry = Entry::new(
        date(2024, 1, 1),
        date(2024, 1, 31),
        ValueType::Percentage,
        Amount::from_units(10).unwrap(),
    );
    let mut session = session_with(vec![entry]);

    assert_eq!(session.submit().unwrap(), ViewMode::Summary);
    assert!(session.errors().is_empty());

    session.back().unwrap();
    assert_eq!(session.mode(), ViewMode::Editing);
    assert_eq!(session.entries(), &[entry]);
}

#[test]
fn entry_built_through_updates_matches_scenario() {
    let mut session = Session::new();
    let updates = [
        (EntryField::StartDate, FieldValue::Date(Some(date(2024, 1, 1)))),
        (EntryField::EndDate, FieldValue::Date(Some(date(2024, 1, 31)))),
        (EntryField::ValueType, FieldValue::ValueType(ValueType::Percentage)),
        (EntryField::Amount, FieldValue::Amount("10".parse().unwrap())),
    ];
    for (field, value) in updates {
        session
            .apply(Command::UpdateField {
                index: 0,
                field,
                value,
            })
            .unwrap();
    }

    assert_eq!(
        session.apply(Command::Submit).unwrap(),
        Outcome::Submitted(ViewMode::Summary)
    );
    let rows = session.summary("%Y-%m-%d");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].start_date, "2024-01-01");
    assert_eq!(rows[0].end_date, "2024-01-31");
    assert_eq!(rows[0].amount, "10.00%");
}

#[test]
fn many_empty_entries_give_two_errors_each() {
    for n in 1..=5 {
        let mut session = Session::new();
        for _ in 1..n {
            session.add_entry().unwrap();
        }
        session.submit().unwrap();

        let errors = session.errors();
        assert_eq!(errors.len(), 2 * n);
        for (i, pair) in errors.chunks(2).enumerate() {
            assert_eq!(pair[0].to_string(), format!("start date of line {} is empty.", i + 1));
            assert_eq!(pair[1].to_string(), format!("end date of line {} is empty.", i + 1));
        }
    }
}

#[test]
fn valid_iff_all_ranges_complete_and_ordered() {
    let cases = [
        (Some(date(2024, 1, 1)), Some(date(2024, 1, 1)), true),
        (Some(date(2024, 1, 1)), Some(date(2024, 1, 2)), true),
        (Some(date(2024, 1, 2)), Some(date(2024, 1, 1)), false),
        (None, Some(date(2024, 1, 1)), false),
        (Some(date(2024, 1, 1)), None, false),
        (None, None, false),
    ];
    for (start_date, end_date, expected) in cases {
        let entries = [Entry {
            start_date,
            end_date,
            ..Entry::default()
        }];
        assert_eq!(validate(&entries).is_empty(), expected, "{start_date:?}..{end_date:?}");

        let mut session = session_with(entries.to_vec());
        let mode = session.submit().unwrap();
        assert_eq!(mode == ViewMode::Summary, expected);
        assert_eq!(session.errors(), validate(&entries).as_slice());
    }
}

#[test]
fn add_and_remove_change_length_by_one() {
    let mut session = Session::new();
    assert_eq!(session.add_entry().unwrap(), 2);
    assert_eq!(session.entries()[1], Entry::default());
    assert_eq!(session.add_entry().unwrap(), 3);
    assert_eq!(session.remove_entry(0).unwrap(), 2);
    assert_eq!(session.remove_entry(0).unwrap(), 1);
    assert_eq!(session.remove_entry(0), Err(FormError::LastEntry));
    assert_eq!(session.entries().len(), 1);
}
