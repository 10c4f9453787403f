use proptest::prelude::*;
use rocdeploy::{default_inventory, SelectorSet};

fn suffix() -> impl Strategy<Value = String> {
    "[0-9]{1,3}"
}

proptest! {
    #[test]
    fn resolve_never_panics(arg in ".*") {
        let inventory = default_inventory().unwrap();
        let _ = SelectorSet::resolve(&arg, &inventory);
    }

    #[test]
    fn comma_list_prefixes_every_piece(pieces in prop::collection::vec(suffix(), 1..6)) {
        let inventory = default_inventory().unwrap();
        let arg = pieces.join(",");

        let selected = SelectorSet::resolve(&arg, &inventory);

        for piece in &pieces {
            let name = format!("ROC{}", piece);
            prop_assert!(selected.contains(&name));
        }
        prop_assert!(selected.len() <= pieces.len());
        prop_assert!(selected.names().iter().all(|n| n.starts_with("ROC")));
    }

    #[test]
    fn unmatched_names_are_never_in_inventory(pieces in prop::collection::vec(suffix(), 1..6)) {
        let inventory = default_inventory().unwrap();
        let selected = SelectorSet::resolve(&pieces.join(","), &inventory);

        for name in selected.unmatched(&inventory) {
            prop_assert!(!inventory.contains(name));
        }
    }
}

#[test]
fn all_matches_inventory_names() {
    let inventory = default_inventory().unwrap();
    let selected = SelectorSet::resolve("all", &inventory);

    let expected: Vec<&str> = inventory.names().collect();
    assert_eq!(selected.names(), expected.as_slice());
}
