use rollcall_core::{Presence, Roster, RosterEntry};

#[test]
fn entry_new_starts_unset() {
    let entry = RosterEntry::new(1, "Alice");

    assert_eq!(entry.id, 1);
    assert_eq!(entry.name, "Alice");
    assert_eq!(entry.presence, Presence::Unset);
}

#[test]
fn serialization_uses_browser_storage_field_names() {
    let roster = Roster::from_entries(vec![
        RosterEntry::new(1_700_000_000_000, "Alice").with_presence(Presence::Present),
        RosterEntry::new(1_700_000_000_001, "Bob").with_presence(Presence::Absent),
        RosterEntry::new(1_700_000_000_002, "Cleo"),
    ])
    .unwrap();

    let json = serde_json::to_value(&roster).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "id": 1_700_000_000_000_i64, "name": "Alice", "isPresent": true },
            { "id": 1_700_000_000_001_i64, "name": "Bob", "isPresent": false },
            { "id": 1_700_000_000_002_i64, "name": "Cleo" }
        ])
    );

    let decoded: Roster = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, roster);
}

#[test]
fn deserialize_treats_null_presence_as_unset() {
    let value = serde_json::json!([{ "id": 5, "name": "Dan", "isPresent": null }]);

    let roster: Roster = serde_json::from_value(value).unwrap();
    assert_eq!(roster.get(5).unwrap().presence, Presence::Unset);
}

#[test]
fn deserialize_rejects_duplicate_ids() {
    let value = serde_json::json!([
        { "id": 5, "name": "Dan" },
        { "id": 5, "name": "Eve", "isPresent": true }
    ]);

    let err = serde_json::from_value::<Roster>(value).unwrap_err();
    assert!(
        err.to_string().contains("duplicate roster entry id: 5"),
        "unexpected error: {err}"
    );
}

#[test]
fn filter_presence_matches_exactly() {
    let roster = Roster::from_entries(vec![
        RosterEntry::new(1, "a").with_presence(Presence::Absent),
        RosterEntry::new(2, "b"),
        RosterEntry::new(3, "c").with_presence(Presence::Absent),
    ])
    .unwrap();

    let absent: Vec<_> = roster
        .filter_presence(Presence::Absent)
        .map(|entry| entry.id)
        .collect();
    assert_eq!(absent, vec![1, 3]);
    assert_eq!(roster.filter_presence(Presence::Present).count(), 0);
}
