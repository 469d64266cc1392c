#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use shiftshift::db::db::Db;
    use shiftshift::db::records::SqliteStore;
    use shiftshift::libs::clock::ManualClock;
    use shiftshift::libs::expense::{ExpenseDraft, ExpenseType};
    use shiftshift::libs::store::SessionStore;
    use std::sync::Arc;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct PersistenceTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for PersistenceTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            PersistenceTestContext { _temp_dir: temp_dir }
        }
    }

    fn dt(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(hour, min, 0).unwrap()
    }

    fn open_store(clock: &Arc<ManualClock>) -> SessionStore {
        let adapter = SqliteStore::new(Db::new().unwrap());
        SessionStore::load("driver-1", clock.clone(), Box::new(adapter)).unwrap()
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_active_session_survives_reload(_ctx: &mut PersistenceTestContext) {
        let clock = Arc::new(ManualClock::new(dt(2026, 3, 2, 8, 0)));

        let mut store = open_store(&clock);
        let id = store.start_session().unwrap().id;
        drop(store);

        let store = open_store(&clock);
        let current = store.current().unwrap();
        assert_eq!(current.id, id);
        assert_eq!(current.start, dt(2026, 3, 2, 8, 0));
        assert!(store.sessions().is_empty());
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_full_session_lifecycle_round_trip(_ctx: &mut PersistenceTestContext) {
        let clock = Arc::new(ManualClock::new(dt(2026, 3, 2, 8, 0)));

        let mut store = open_store(&clock);
        store.start_session().unwrap();
        store.start_break().unwrap();
        clock.advance(Duration::minutes(45));
        store.end_break().unwrap();
        clock.advance(Duration::hours(4));
        store.end_session().unwrap();
        drop(store);

        let store = open_store(&clock);
        assert!(store.current().is_none());
        assert_eq!(store.sessions().len(), 1);

        let session = &store.sessions()[0];
        assert_eq!(session.break_secs, 45 * 60);
        assert_eq!(session.breaks.len(), 1);
        assert_eq!(session.end, Some(dt(2026, 3, 2, 12, 45)));
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_notes_and_tasks_survive_reload(_ctx: &mut PersistenceTestContext) {
        let clock = Arc::new(ManualClock::new(dt(2026, 3, 2, 8, 0)));

        let mut store = open_store(&clock);
        let id = store.start_session().unwrap().id;
        store.update_session_notes(id, "trailer swap in Utrecht");
        store.add_task("check tires").unwrap();
        drop(store);

        let store = open_store(&clock);
        let current = store.current().unwrap();
        assert_eq!(current.notes, "trailer swap in Utrecht");
        assert_eq!(current.tasks.len(), 1);
        assert_eq!(current.tasks[0].text, "check tires");
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_expenses_survive_reload(_ctx: &mut PersistenceTestContext) {
        let clock = Arc::new(ManualClock::new(dt(2026, 3, 2, 8, 0)));

        let mut store = open_store(&clock);
        let id = store.add_expense(ExpenseDraft {
            session_id: None,
            kind: ExpenseType::Fuel,
            amount: 88.40,
            description: "diesel".to_string(),
            receipt: None,
        });
        drop(store);

        let store = open_store(&clock);
        assert_eq!(store.expenses().len(), 1);
        assert_eq!(store.expenses()[0].id, id);
        assert_eq!(store.expenses()[0].kind, ExpenseType::Fuel);
        assert!((store.expenses()[0].amount - 88.40).abs() < 1e-9);
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_deletions_survive_reload(_ctx: &mut PersistenceTestContext) {
        let clock = Arc::new(ManualClock::new(dt(2026, 3, 2, 8, 0)));

        let mut store = open_store(&clock);
        store.start_session().unwrap();
        clock.advance(Duration::hours(8));
        store.end_session().unwrap();
        clock.advance(Duration::hours(16));
        store.start_session().unwrap();
        clock.advance(Duration::hours(8));
        store.end_session().unwrap();
        drop(store);

        let mut store = open_store(&clock);
        assert_eq!(store.sessions().len(), 2);
        let first_id = store.sessions()[0].id;
        assert!(store.delete_session(first_id));
        drop(store);

        let mut store = open_store(&clock);
        assert_eq!(store.sessions().len(), 1);
        assert_eq!(store.delete_all_sessions(), 1);
        drop(store);

        let store = open_store(&clock);
        assert!(store.sessions().is_empty());
    }
}
