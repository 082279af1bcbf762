use wheelpicker::{OptionList, OptionsError, PickerOption};

fn abc() -> Vec<PickerOption> {
    vec![
        PickerOption::new("A", "a"),
        PickerOption::new("B", "b"),
        PickerOption::new("C", "c"),
    ]
}

// ============================================================================
// Strict construction
// ============================================================================

#[test]
fn test_try_new_accepts_valid_list() {
    let list = OptionList::try_new(abc()).unwrap();
    assert_eq!(list.count(), 3);
}

#[test]
fn test_try_new_rejects_empty() {
    assert_eq!(OptionList::try_new(vec![]), Err(OptionsError::Empty));
}

#[test]
fn test_try_new_rejects_duplicate_value() {
    let options = vec![
        PickerOption::new("One", "x"),
        PickerOption::new("Two", "x"),
    ];
    assert_eq!(
        OptionList::try_new(options),
        Err(OptionsError::DuplicateValue("x".to_string()))
    );
}

// ============================================================================
// Lenient construction
// ============================================================================

#[test]
fn test_new_absorbs_empty_list() {
    let list = OptionList::new(vec![]);
    assert!(list.is_empty());
    assert_eq!(list.count(), 0);
    assert_eq!(list.option_at(0), None);
}

#[test]
fn test_new_drops_duplicates_first_wins() {
    let options = vec![
        PickerOption::new("First", "x"),
        PickerOption::new("Second", "x"),
        PickerOption::new("Other", "y"),
    ];
    let list = OptionList::new(options);
    assert_eq!(list.count(), 2);
    assert_eq!(list.option_at(0).unwrap().label, "First");
    assert_eq!(list.option_at(1).unwrap().value, "y");
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_order_is_preserved() {
    let list = OptionList::new(abc());
    let values: Vec<_> = list.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, ["a", "b", "c"]);
}

#[test]
fn test_index_of() {
    let list = OptionList::new(abc());
    assert_eq!(list.index_of("b"), Some(1));
    assert_eq!(list.index_of("zzz"), None);
}

#[test]
fn test_option_at_out_of_range() {
    let list = OptionList::new(abc());
    assert_eq!(list.option_at(3), None);
}

// ============================================================================
// Default resolution
// ============================================================================

#[test]
fn test_resolve_default_known_value() {
    let list = OptionList::new(abc());
    assert_eq!(list.resolve_default(Some("b")), 1);
}

#[test]
fn test_resolve_default_unknown_falls_back_to_zero() {
    let list = OptionList::new(abc());
    assert_eq!(list.resolve_default(Some("zzz")), 0);
}

#[test]
fn test_resolve_default_absent_is_zero() {
    let list = OptionList::new(abc());
    assert_eq!(list.resolve_default(None), 0);
}
