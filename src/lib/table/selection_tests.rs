use super::*;

#[test]
fn toggle_twice_restores_prior_state() {
    let mut selection = Selection::default();
    selection.toggle(3);
    let before = selection.clone();

    assert!(selection.toggle(1));
    assert!(selection.contains(1));
    assert!(!selection.toggle(1));
    assert!(!selection.contains(1));

    assert_eq!(selection, before);
}

#[test]
fn keeps_selection_order() {
    let mut selection = Selection::default();
    selection.toggle(2);
    selection.toggle(0);
    selection.toggle(3);
    selection.toggle(0);

    assert_eq!(selection.positions(), &[2, 3]);
    assert_eq!(selection.len(), 2);
}

#[test]
fn resolves_against_display_order() {
    let a = Row::new().with("name", "a");
    let b = Row::new().with("name", "b");
    let c = Row::new().with("name", "c");
    let display = vec![&c, &a, &b];

    let mut selection = Selection::default();
    selection.toggle(2);
    selection.toggle(0);

    assert_eq!(selection.resolve(&display), vec![b.clone(), c.clone()]);
}

#[test]
fn resolve_skips_stale_positions() {
    let a = Row::new().with("name", "a");
    let display = vec![&a];

    let mut selection = Selection::default();
    selection.toggle(0);
    selection.toggle(5);

    assert_eq!(selection.resolve(&display), vec![a.clone()]);
}

#[test]
fn clear_empties_selection() {
    let mut selection = Selection::default();
    selection.toggle(0);
    selection.toggle(1);
    selection.clear();
    assert!(selection.is_empty());
}
