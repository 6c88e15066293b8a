use super::*;

#[test]
fn collector_keeps_warnings_in_order() {
    let notes = NoteCollector::new();
    assert!(notes.is_empty());
    warn(&notes, "first");
    warn(&notes, String::from("second"));
    assert_eq!(notes.len(), 2);
    assert_eq!(notes.notes(), vec!["first", "second"]);
}

#[test]
fn take_drains_the_collector() {
    let notes = NoteCollector::new();
    notes.warning("x");
    assert_eq!(notes.take(), vec!["x"]);
    assert!(notes.is_empty());
}
