#[cfg(test)]
mod tests {
    use serde_json::json;
    use shiftshift::db::db::Db;
    use shiftshift::db::records::SqliteStore;
    use shiftshift::libs::persist::{Collection, RecordStore};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct RecordsTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for RecordsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            RecordsTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_create_and_list_records(_ctx: &mut RecordsTestContext) {
        let mut store = SqliteStore::new(Db::new().unwrap());

        store.create_record(Collection::Sessions, 1, &json!({"id": 1, "notes": "first"})).unwrap();
        store.create_record(Collection::Sessions, 2, &json!({"id": 2, "notes": "second"})).unwrap();

        let records = store.list_records(Collection::Sessions).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["notes"], "first");
        assert_eq!(records[1]["notes"], "second");
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_update_replaces_whole_record(_ctx: &mut RecordsTestContext) {
        let mut store = SqliteStore::new(Db::new().unwrap());

        store.create_record(Collection::Sessions, 1, &json!({"id": 1, "notes": "before"})).unwrap();
        store.update_record(Collection::Sessions, 1, &json!({"id": 1, "notes": "after"})).unwrap();

        let records = store.list_records(Collection::Sessions).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["notes"], "after");
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_update_materializes_missing_record(_ctx: &mut RecordsTestContext) {
        let mut store = SqliteStore::new(Db::new().unwrap());

        // An update for a record whose create never landed still persists it.
        store.update_record(Collection::Expenses, 7, &json!({"id": 7, "amount": 12.5})).unwrap();

        let records = store.list_records(Collection::Expenses).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_delete_records(_ctx: &mut RecordsTestContext) {
        let mut store = SqliteStore::new(Db::new().unwrap());

        store.create_record(Collection::Sessions, 1, &json!({"id": 1})).unwrap();
        store.create_record(Collection::Sessions, 2, &json!({"id": 2})).unwrap();

        store.delete_record(Collection::Sessions, 1).unwrap();
        assert_eq!(store.list_records(Collection::Sessions).unwrap().len(), 1);

        // Deleting an absent record is not an error.
        store.delete_record(Collection::Sessions, 99).unwrap();

        store.delete_all(Collection::Sessions).unwrap();
        assert!(store.list_records(Collection::Sessions).unwrap().is_empty());
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_collections_are_independent(_ctx: &mut RecordsTestContext) {
        let mut store = SqliteStore::new(Db::new().unwrap());

        store.create_record(Collection::Sessions, 1, &json!({"id": 1})).unwrap();
        store.create_record(Collection::Expenses, 1, &json!({"id": 1})).unwrap();

        store.delete_all(Collection::Sessions).unwrap();
        assert!(store.list_records(Collection::Sessions).unwrap().is_empty());
        assert_eq!(store.list_records(Collection::Expenses).unwrap().len(), 1);
    }
}
