//! Persistence Integration Tests
//!
//! Drives the controller with a `PersistentStore` over `MemoryStore` and
//! checks what lands in (and comes back out of) the slots.

#[cfg(test)]
mod tests {
    use crate::config::{seed_users, StorageKeys};
    use crate::domain::{Bucket, DomainError, Task, User};
    use crate::persistence::{KeyValueStore, MemoryStore, PersistentStore, StoreError, StoreResult};
    use crate::state::{Clock, IdCounters, TodoController, TodoState};

    struct FixedClock;

    impl Clock for FixedClock {
        fn now_display(&self) -> String {
            "2024/6/1 9:30:00".to_string()
        }
    }

    /// Backend whose every call fails
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Backend("SecurityError".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Backend("QuotaExceededError".to_string()))
        }

        fn remove(&self, _key: &str) -> StoreResult<()> {
            Err(StoreError::Backend("SecurityError".to_string()))
        }
    }

    fn start_session(backend: &MemoryStore) -> TodoController {
        let persistent = PersistentStore::new(backend.clone());
        let mut controller = TodoController::with_clock(persistent.load(), FixedClock);
        controller.subscribe(persistent);
        controller
    }

    #[test]
    fn test_empty_storage_loads_seed_state() {
        let backend = MemoryStore::new();
        let state = PersistentStore::new(backend.clone()).load();
        assert_eq!(state, TodoState::default());
        assert!(backend.is_empty(), "loading must not write");
    }

    #[test]
    fn test_round_trip_populated_state() {
        let backend = MemoryStore::new();
        let mut controller = start_session(&backend);

        controller.register_user("山本健", "yamamoto@x.com").unwrap();
        let a = controller.add_task("Write report").unwrap();
        controller.add_task("Review PR").unwrap();
        controller.add_comment(a.id, "first draft").unwrap();
        controller.login("1").unwrap();
        let c = controller.add_task("Plan sprint").unwrap();
        controller.add_comment(c.id, "next monday").unwrap();
        controller.move_task(c.id, Bucket::Done).unwrap();

        let original = controller.state().clone();
        drop(controller);

        let rehydrated = PersistentStore::new(backend.clone()).load();
        assert_eq!(rehydrated, original);
        assert_eq!(rehydrated.tasks().len(), 3);
        assert_eq!(rehydrated.task(a.id).unwrap().comments[0].text, "first draft");
        assert_eq!(rehydrated.current_user().map(|u| u.id.as_str()), Some("1"));
    }

    #[test]
    fn test_slots_hold_camel_case_json() {
        let backend = MemoryStore::new();
        let mut controller = start_session(&backend);
        controller.login("2").unwrap();
        let task = controller.add_task("A").unwrap();
        controller.add_comment(task.id, "hi").unwrap();

        let raw = backend.get("tasks").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["userId"], "2");
        assert_eq!(json[0]["comments"][0]["authorName"], "佐藤花子");
        assert_eq!(json[0]["comments"][0]["createdAt"], "2024/6/1 9:30:00");

        let current: User = serde_json::from_str(&backend.get("currentUser").unwrap().unwrap()).unwrap();
        assert_eq!(current.id, "2");
    }

    #[test]
    fn test_logout_removes_current_user_slot() {
        let backend = MemoryStore::new();
        let mut controller = start_session(&backend);
        controller.login("3").unwrap();
        assert!(backend.contains("currentUser"));

        controller.logout();
        assert!(!backend.contains("currentUser"));
        assert!(PersistentStore::new(backend.clone()).load().current_user().is_none());
    }

    #[test]
    fn test_ids_not_reused_across_reload() {
        let backend = MemoryStore::new();
        let mut controller = start_session(&backend);
        controller.login("1").unwrap();
        let a = controller.add_task("A").unwrap();
        let b = controller.add_task("B").unwrap();
        controller.add_comment(b.id, "c").unwrap();
        controller.delete_task(b.id).unwrap();
        drop(controller);

        let mut controller = start_session(&backend);
        let next = controller.add_task("C").unwrap();
        assert_eq!((a.id, b.id, next.id), (1, 2, 3));
        assert_eq!(controller.add_comment(next.id, "d").unwrap().id, 2);
    }

    #[test]
    fn test_missing_counter_slot_is_derived_from_tasks() {
        let backend = MemoryStore::new();
        let tasks = vec![Task::new(4, "old", "1"), Task::new(9, "older", "2")];
        backend.set("tasks", &serde_json::to_string(&tasks).unwrap()).unwrap();

        let state = PersistentStore::new(backend.clone()).load();
        assert_eq!(state.counters(), IdCounters { next_task_id: 10, next_comment_id: 1 });
    }

    #[test]
    fn test_malformed_slots_fall_back_independently() {
        let backend = MemoryStore::new();
        backend.set("users", "[{\"id\":").unwrap();
        backend.set("tasks", "not json").unwrap();
        backend.set("idCounters", "{}").unwrap();
        backend
            .set("currentUser", &serde_json::to_string(&seed_users()[1]).unwrap())
            .unwrap();

        let state = PersistentStore::new(backend.clone()).load();
        assert_eq!(state.users(), seed_users().as_slice());
        assert!(state.tasks().is_empty());
        assert_eq!(state.counters(), IdCounters::default());
        assert_eq!(state.current_user().map(|u| u.name.as_str()), Some("佐藤花子"));
    }

    #[test]
    fn test_task_slot_at_id_limit_falls_back() {
        let backend = MemoryStore::new();
        let tasks = vec![Task::new(u32::MAX, "old", "1")];
        backend.set("tasks", &serde_json::to_string(&tasks).unwrap()).unwrap();

        let state = PersistentStore::new(backend.clone()).load();
        assert!(state.tasks().is_empty());
        assert_eq!(state.counters(), IdCounters::default());
    }

    #[test]
    fn test_counter_slot_at_id_limit_refuses_new_tasks() {
        let backend = MemoryStore::new();
        backend
            .set("idCounters", r#"{"nextTaskId":4294967295,"nextCommentId":4294967295}"#)
            .unwrap();
        let mut controller = start_session(&backend);
        controller.login("1").unwrap();

        assert_eq!(controller.add_task("A"), Err(DomainError::IdsExhausted("task")));
        assert_eq!(controller.add_task("B"), Err(DomainError::IdsExhausted("task")));
        assert!(controller.state().tasks().is_empty());
        assert!(!backend.contains("tasks"));
    }

    #[test]
    fn test_unknown_current_user_is_dropped() {
        let backend = MemoryStore::new();
        backend.set("users", "not json").unwrap();
        let stranger = User::new("4", "山本健", "yamamoto@x.com");
        backend.set("currentUser", &serde_json::to_string(&stranger).unwrap()).unwrap();

        let state = PersistentStore::new(backend.clone()).load();
        assert_eq!(state.users(), seed_users().as_slice());
        assert!(state.current_user().is_none());
    }

    #[test]
    fn test_try_read_slot_reports_parse_errors() {
        let backend = MemoryStore::new();
        backend.set("tasks", "{").unwrap();
        let persistent = PersistentStore::new(backend);
        let result = persistent.try_read_slot::<Vec<Task>>("tasks");
        assert!(matches!(result, Err(StoreError::Serialization(_))));
        assert!(matches!(persistent.try_read_slot::<Vec<User>>("users"), Ok(None)));
    }

    #[test]
    fn test_broken_backend_loads_defaults_and_keeps_running() {
        let persistent = PersistentStore::new(BrokenStore);
        let mut controller = TodoController::with_clock(persistent.load(), FixedClock);
        controller.subscribe(persistent);

        controller.login("1").unwrap();
        let task = controller.add_task("still works").unwrap();
        assert_eq!(controller.state().task(task.id).unwrap().text, "still works");
    }

    #[test]
    fn test_prefixed_keys_are_isolated() {
        let backend = MemoryStore::new();
        let persistent = PersistentStore::with_keys(backend.clone(), StorageKeys::with_prefix("a/"));
        let mut controller = TodoController::with_clock(persistent.load(), FixedClock);
        controller.subscribe(persistent);
        controller.login("1").unwrap();
        controller.add_task("A").unwrap();

        assert!(backend.contains("a/tasks"));
        assert!(!backend.contains("tasks"));
        assert!(PersistentStore::new(backend.clone()).load().tasks().is_empty());
    }

    #[test]
    fn test_save_writes_every_slot() {
        let backend = MemoryStore::new();
        let mut state = TodoState::default();
        state.login("1").unwrap();
        state.add_task("A").unwrap();

        PersistentStore::new(backend.clone()).save(&state).unwrap();
        assert_eq!(backend.len(), 4);
        assert_eq!(PersistentStore::new(backend).load(), state);
    }
}
