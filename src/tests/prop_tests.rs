use proptest::prelude::*;

use crate::modemunch::{apply_mode_spec, format_mode, FileMode, ModeError};

// One slot of a valid rwxrwxrwx string: any of r/w/x/-, plus 's' where
// allowed. The first slot must stay 'r' or '-' to select this form at all.
fn rwx_slot(slot: usize) -> BoxedStrategy<char> {
    if slot == 0 {
        prop::sample::select(vec!['r', '-']).boxed()
    } else if slot == 2 || slot == 5 {
        prop::sample::select(vec!['r', 'w', 'x', '-', 's']).boxed()
    } else {
        prop::sample::select(vec!['r', 'w', 'x', '-']).boxed()
    }
}

// One slot as ls prints it: its own letter, '-', or 's' where allowed
fn canonical_rwx_slot(slot: usize) -> BoxedStrategy<char> {
    let letter = ['r', 'w', 'x'][slot % 3];
    if slot == 2 || slot == 5 {
        prop::sample::select(vec![letter, '-', 's']).boxed()
    } else {
        prop::sample::select(vec![letter, '-']).boxed()
    }
}

fn rwx_string_from(slot: fn(usize) -> BoxedStrategy<char>) -> impl Strategy<Value = String> {
    (0..9usize)
        .map(slot)
        .collect::<Vec<_>>()
        .prop_map(|chars| chars.into_iter().collect())
}

fn rwx_string() -> impl Strategy<Value = String> {
    rwx_string_from(rwx_slot)
}

fn canonical_rwx_string() -> impl Strategy<Value = String> {
    rwx_string_from(canonical_rwx_slot)
}

proptest! {
    #[test]
    fn prop_octal_ignores_current(current in any::<FileMode>(), digits in "[0-7]{1,8}") {
        let expected = FileMode::from_str_radix(&digits, 8).unwrap();
        prop_assert_eq!(apply_mode_spec(current, &digits), Ok(expected));
    }

    #[test]
    fn prop_rwx_is_idempotent(current in any::<FileMode>(), spec in rwx_string()) {
        let once = apply_mode_spec(current, &spec).unwrap();
        prop_assert_eq!(apply_mode_spec(once, &spec), Ok(once));
    }

    #[test]
    fn prop_rwx_renders_back(spec in canonical_rwx_string()) {
        let mode = apply_mode_spec(0, &spec).unwrap();
        prop_assert_eq!(format_mode(mode), spec);
    }

    #[test]
    fn prop_rwx_misplaced_setid_rejected(
        current in any::<FileMode>(),
        spec in rwx_string(),
        slot in prop::sample::select(vec![1usize, 3, 4, 6, 7, 8]),
    ) {
        let mut chars: Vec<char> = spec.chars().collect();
        chars[slot] = 's';
        let spec: String = chars.into_iter().collect();
        prop_assert_eq!(apply_mode_spec(current, &spec), Err(ModeError::BadRwxToken));
    }

    #[test]
    fn prop_add_then_remove(current in 0..0o7777 as FileMode, who in "[ugoa]{0,3}", what in "[rwxs]{1,4}") {
        let added = apply_mode_spec(current, &format!("{}+{}", who, what)).unwrap();
        let removed = apply_mode_spec(added, &format!("{}-{}", who, what)).unwrap();
        prop_assert_eq!(added | removed, added);
        prop_assert_eq!(removed, apply_mode_spec(current, &format!("{}-{}", who, what)).unwrap());
    }

    #[test]
    fn prop_never_panics(current in any::<FileMode>(), spec in "\\PC{0,16}") {
        let _ = apply_mode_spec(current, &spec);
    }
}
