use dbacks_calendar::first_pitch_label;
use proptest::prelude::*;

#[test]
fn meridiem_suffix_is_removed() {
    assert_eq!(first_pitch_label("7:10 PM"), "7:10");
    assert_eq!(first_pitch_label("12:05 AM"), "12:05");
    assert_eq!(first_pitch_label("  1:10pm"), "1:10");
}

proptest! {
    #[test]
    fn derivation_is_idempotent(raw in "[ 0-9:]{0,6}[ ]?[A-Za-z]{0,3}[ ]{0,2}") {
        let once = first_pitch_label(&raw);
        prop_assert_eq!(first_pitch_label(&once), once.clone());
        prop_assert!(!once.chars().any(char::is_alphabetic));
        prop_assert_eq!(once.trim(), once.as_str());
    }

    #[test]
    fn clock_times_survive(hour in 1u8..=12, minute in 0u8..60, pm in any::<bool>()) {
        let time = format!("{hour}:{minute:02}");
        let raw = format!("{time} {}", if pm { "PM" } else { "AM" });
        prop_assert_eq!(first_pitch_label(&raw), time);
    }
}
