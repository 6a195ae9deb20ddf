// db/notes_tests.rs
// Tests for note store operations

use super::NoteStore;
use crate::error::NotesError;
use std::thread::sleep;
use std::time::Duration;

/// Enough to separate two millisecond timestamps
fn tick() {
    sleep(Duration::from_millis(5));
}

fn setup_store() -> NoteStore {
    NoteStore::open_in_memory().expect("Failed to open in-memory store")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ═══════════════════════════════════════
    // create / get
    // ═══════════════════════════════════════

    #[test]
    fn test_create_then_get() {
        let store = setup_store();

        let id = store.create("Groceries", "milk, eggs").unwrap();
        assert!(id > 0);

        let note = store.get(id).unwrap().expect("note should exist");
        assert_eq!(note.id, id);
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content, "milk, eggs");
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn test_create_accepts_empty_strings() {
        let store = setup_store();

        let id = store.create("", "").unwrap();

        let note = store.get(id).unwrap().unwrap();
        assert_eq!(note.title, "");
        assert_eq!(note.content, "");
    }

    #[test]
    fn test_create_preserves_unicode_and_newlines() {
        let store = setup_store();
        let content = "line one\nline two\n\u{1F4DD} caf\u{e9}";

        let id = store.create("Multi-line", content).unwrap();

        assert_eq!(store.get(id).unwrap().unwrap().content, content);
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let store = setup_store();

        let first = store.create("a", "1").unwrap();
        let second = store.create("b", "2").unwrap();
        let third = store.create("c", "3").unwrap();

        assert!(first < second && second < third);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = setup_store();

        let first = store.create("a", "1").unwrap();
        let second = store.create("b", "2").unwrap();
        assert!(store.delete(second).unwrap());

        let third = store.create("c", "3").unwrap();
        assert!(third > second);
        assert_ne!(third, first);
    }

    // ═══════════════════════════════════════
    // update
    // ═══════════════════════════════════════

    #[test]
    fn test_update_replaces_fields_and_keeps_created_at() {
        let store = setup_store();
        let id = store.create("Draft", "first version").unwrap();
        let before = store.get(id).unwrap().unwrap();

        tick();
        assert!(store.update(id, "Final", "second version").unwrap());

        let after = store.get(id).unwrap().unwrap();
        assert_eq!(after.title, "Final");
        assert_eq!(after.content, "second version");
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
        assert!(after.created_at <= after.updated_at);
    }

    #[test]
    fn test_update_twice_is_idempotent_on_content() {
        let store = setup_store();
        let id = store.create("t", "c").unwrap();

        assert!(store.update(id, "t2", "c2").unwrap());
        let first = store.get(id).unwrap().unwrap();

        assert!(store.update(id, "t2", "c2").unwrap());
        let second = store.get(id).unwrap().unwrap();

        assert_eq!(second.title, "t2");
        assert_eq!(second.content, "c2");
        assert!(second.updated_at >= first.updated_at);
    }

    #[test]
    fn test_update_rewrites_both_fields() {
        let store = setup_store();
        let id = store.create("title", "content").unwrap();

        // No partial merge: an empty string is stored as-is
        assert!(store.update(id, "new title", "").unwrap());

        let note = store.get(id).unwrap().unwrap();
        assert_eq!(note.title, "new title");
        assert_eq!(note.content, "");
    }

    // ═══════════════════════════════════════
    // delete
    // ═══════════════════════════════════════

    #[test]
    fn test_delete_is_terminal() {
        let store = setup_store();
        let id = store.create("Temporary", "gone soon").unwrap();

        assert!(store.delete(id).unwrap());
        assert!(store.get(id).unwrap().is_none());
        assert!(!store.delete(id).unwrap());
    }

    #[test]
    fn test_delete_leaves_other_notes() {
        let store = setup_store();
        let keep = store.create("keep", "").unwrap();
        let drop = store.create("drop", "").unwrap();

        assert!(store.delete(drop).unwrap());

        let ids: Vec<i64> = store.list_all().unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![keep]);
    }

    // ═══════════════════════════════════════
    // list_all
    // ═══════════════════════════════════════

    #[test]
    fn test_list_empty_store() {
        let store = setup_store();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_list_orders_by_most_recently_updated() {
        let store = setup_store();
        let a = store.create("A", "").unwrap();
        tick();
        let b = store.create("B", "").unwrap();
        tick();
        let c = store.create("C", "").unwrap();
        tick();
        assert!(store.update(b, "B", "edited").unwrap());

        let ids: Vec<i64> = store.list_all().unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![b, c, a]);
    }

    #[test]
    fn test_list_ties_broken_by_newest_id() {
        let store = setup_store();
        let a = store.create("A", "").unwrap();
        let b = store.create("B", "").unwrap();
        store
            .conn()
            .unwrap()
            .execute(
                "UPDATE notes SET updated_at = '2024-01-01 00:00:00.000'",
                [],
            )
            .unwrap();

        let ids: Vec<i64> = store.list_all().unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![b, a]);
    }

    // ═══════════════════════════════════════
    // unknown ids
    // ═══════════════════════════════════════

    #[test]
    fn test_unknown_id_reports_not_found() {
        let store = setup_store();
        store.create("only", "note").unwrap();

        assert!(store.get(999).unwrap().is_none());
        assert!(!store.update(999, "x", "y").unwrap());
        assert!(!store.delete(999).unwrap());
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    // ═══════════════════════════════════════
    // close
    // ═══════════════════════════════════════

    #[test]
    fn test_operations_fail_after_close() {
        let mut store = setup_store();
        let id = store.create("t", "c").unwrap();

        store.close().unwrap();
        assert!(store.is_closed());

        assert!(matches!(store.create("t", "c"), Err(NotesError::StoreClosed)));
        assert!(matches!(store.list_all(), Err(NotesError::StoreClosed)));
        assert!(matches!(store.get(id), Err(NotesError::StoreClosed)));
        assert!(matches!(store.update(id, "x", "y"), Err(NotesError::StoreClosed)));
        assert!(matches!(store.delete(id), Err(NotesError::StoreClosed)));
    }

    #[test]
    fn test_close_twice_is_noop() {
        let mut store = setup_store();
        store.close().unwrap();
        store.close().unwrap();
        assert!(store.is_closed());
    }

    #[test]
    fn test_busy_timeout_requires_open_store() {
        let mut store = setup_store();
        store.set_busy_timeout(Duration::from_millis(10)).unwrap();

        store.close().unwrap();
        assert!(matches!(
            store.set_busy_timeout(Duration::from_millis(10)),
            Err(NotesError::StoreClosed)
        ));
    }

    #[test]
    fn test_in_memory_store_has_no_path() {
        let store = setup_store();
        assert!(store.path().is_none());
        assert!(!store.is_closed());
    }
}
