//! In-memory application state.
//!
//! Mutations here validate their input and either apply completely or
//! return a `DomainError` with the state untouched.

use serde::{Deserialize, Serialize};

use crate::config::seed_users;
use crate::domain::entity::{non_blank, position_of};
use crate::domain::{Bucket, Comment, DomainError, DomainResult, Task, User};
use super::clock::Clock;

/// Next identifiers to hand out. Both start at 1 and only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdCounters {
    pub next_task_id: u32,
    pub next_comment_id: u32,
}

impl Default for IdCounters {
    fn default() -> Self {
        Self { next_task_id: 1, next_comment_id: 1 }
    }
}

impl IdCounters {
    /// Counters that hand nothing out
    pub const EXHAUSTED: Self = Self { next_task_id: u32::MAX, next_comment_id: u32::MAX };

    /// Smallest counters that cannot collide with any id already in `tasks`.
    /// `None` when an id is already `u32::MAX`.
    pub fn past(tasks: &[Task]) -> Option<Self> {
        let max_task = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        let max_comment = tasks
            .iter()
            .flat_map(|t| t.comments.iter().map(|c| c.id))
            .max()
            .unwrap_or(0);
        Some(Self {
            next_task_id: max_task.checked_add(1)?,
            next_comment_id: max_comment.checked_add(1)?,
        })
    }

    /// Field-wise maximum
    pub fn max(self, other: Self) -> Self {
        Self {
            next_task_id: self.next_task_id.max(other.next_task_id),
            next_comment_id: self.next_comment_id.max(other.next_comment_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodoState {
    current_user: Option<User>,
    users: Vec<User>,
    tasks: Vec<Task>,
    counters: IdCounters,
}

impl Default for TodoState {
    /// Seed users, no tasks, nobody logged in
    fn default() -> Self {
        Self::new(seed_users())
    }
}

impl TodoState {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            current_user: None,
            users,
            tasks: Vec::new(),
            counters: IdCounters::default(),
        }
    }

    /// Rebuild state from stored parts. Counters are raised past every
    /// existing id so hydrated data can never be shadowed by a new id; an id
    /// at `u32::MAX` leaves nothing to hand out.
    pub fn from_parts(
        current_user: Option<User>,
        users: Vec<User>,
        tasks: Vec<Task>,
        counters: IdCounters,
    ) -> Self {
        let counters = counters.max(IdCounters::past(&tasks).unwrap_or(IdCounters::EXHAUSTED));
        Self { current_user, users, tasks, counters }
    }

    // ========================
    // Accessors
    // ========================

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn counters(&self) -> IdCounters {
        self.counters
    }

    pub fn task(&self, id: u32) -> Option<&Task> {
        position_of(&self.tasks, &id).map(|i| &self.tasks[i])
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        position_of(&self.users, id).map(|i| &self.users[i])
    }

    // ========================
    // Tasks
    // ========================

    pub fn add_task(&mut self, text: &str) -> DomainResult<Task> {
        let text = non_blank("task text", text)?;
        let owner = self.current_user.as_ref().ok_or(DomainError::NotLoggedIn)?;

        let id = self.counters.next_task_id;
        let next_id = id.checked_add(1).ok_or(DomainError::IdsExhausted("task"))?;

        let task = Task::new(id, text, owner.id.clone());
        self.tasks.push(task.clone());
        self.counters.next_task_id = next_id;
        Ok(task)
    }

    pub fn toggle_task(&mut self, id: u32) -> DomainResult<Task> {
        let task = self.task_mut(id)?;
        task.completed = !task.completed;
        Ok(task.clone())
    }

    pub fn delete_task(&mut self, id: u32) -> DomainResult<Task> {
        let index = position_of(&self.tasks, &id).ok_or(DomainError::TaskNotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    pub fn move_task(&mut self, id: u32, target: Bucket) -> DomainResult<Task> {
        let task = self.task_mut(id)?;
        if task.bucket() == target {
            return Err(DomainError::AlreadyInBucket(id, target));
        }
        task.completed = target.is_completed();
        Ok(task.clone())
    }

    // ========================
    // Comments
    // ========================

    pub fn add_comment(&mut self, task_id: u32, text: &str, clock: &dyn Clock) -> DomainResult<Comment> {
        let text = non_blank("comment text", text)?;
        let author = self.current_user.clone().ok_or(DomainError::NotLoggedIn)?;
        let comment_id = self.counters.next_comment_id;
        let next_id = comment_id.checked_add(1).ok_or(DomainError::IdsExhausted("comment"))?;
        let task = self.task_mut(task_id)?;

        let comment = Comment {
            id: comment_id,
            text: text.to_string(),
            author_name: author.name,
            author_id: author.id,
            created_at: clock.now_display(),
        };
        task.comments.push(comment.clone());
        self.counters.next_comment_id = next_id;
        Ok(comment)
    }

    // ========================
    // Users
    // ========================

    /// Append a user and log them in. Duplicate names and emails are allowed.
    pub fn register_user(&mut self, name: &str, email: &str) -> DomainResult<User> {
        let name = non_blank("name", name)?;
        let email = non_blank("email", email)?;

        let user = User::new((self.users.len() + 1).to_string(), name, email);
        self.users.push(user.clone());
        self.current_user = Some(user.clone());
        Ok(user)
    }

    pub fn login(&mut self, user_id: &str) -> DomainResult<User> {
        let user = self
            .user(user_id)
            .cloned()
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;
        self.current_user = Some(user.clone());
        Ok(user)
    }

    /// Previously logged-in user, if any
    pub fn logout(&mut self) -> Option<User> {
        self.current_user.take()
    }

    fn task_mut(&mut self, id: u32) -> DomainResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(DomainError::TaskNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now_display(&self) -> String {
            "2024/1/2 3:04:05".to_string()
        }
    }

    fn logged_in(user_id: &str) -> TodoState {
        let mut state = TodoState::default();
        state.login(user_id).unwrap();
        state
    }

    #[test]
    fn test_default_state_is_seeded_and_logged_out() {
        let state = TodoState::default();
        assert_eq!(state.users().len(), 3);
        assert!(state.current_user().is_none());
        assert!(state.tasks().is_empty());
        assert_eq!(state.counters(), IdCounters::default());
    }

    #[test]
    fn test_add_task_requires_login() {
        let mut state = TodoState::default();
        assert_eq!(state.add_task("Buy milk"), Err(DomainError::NotLoggedIn));
        assert!(state.tasks().is_empty());
        assert_eq!(state.counters().next_task_id, 1);
    }

    #[test]
    fn test_add_task_trims_and_assigns_owner() {
        let mut state = logged_in("2");
        let task = state.add_task("  Buy milk  ").unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.user_id, "2");
        assert!(!task.completed);
        assert_eq!(state.tasks(), &[task]);
    }

    #[test]
    fn test_blank_input_leaves_collections_unchanged() {
        let mut state = logged_in("1");
        let task = state.add_task("Keep").unwrap();
        let before = state.clone();

        for blank in ["", "   ", "\n\t"] {
            assert!(matches!(state.add_task(blank), Err(DomainError::EmptyInput(_))));
            assert!(matches!(
                state.add_comment(task.id, blank, &FixedClock),
                Err(DomainError::EmptyInput(_))
            ));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_task_ids_never_reused_after_delete() {
        let mut state = logged_in("1");
        let a = state.add_task("A").unwrap();
        assert_eq!(a.id, 1);
        state.delete_task(a.id).unwrap();
        let b = state.add_task("B").unwrap();
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut state = logged_in("1");
        let task = state.add_task("A").unwrap();
        assert!(state.toggle_task(task.id).unwrap().completed);
        assert!(!state.toggle_task(task.id).unwrap().completed);
        assert_eq!(state.task(task.id).unwrap().completed, task.completed);
    }

    #[test]
    fn test_missing_task_is_rejected() {
        let mut state = logged_in("1");
        let before = state.clone();
        assert_eq!(state.toggle_task(42), Err(DomainError::TaskNotFound(42)));
        assert_eq!(state.delete_task(42), Err(DomainError::TaskNotFound(42)));
        assert_eq!(state.move_task(42, Bucket::Done), Err(DomainError::TaskNotFound(42)));
        assert_eq!(
            state.add_comment(42, "hello", &FixedClock),
            Err(DomainError::TaskNotFound(42))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_task_to_same_bucket_is_rejected() {
        let mut state = logged_in("1");
        let task = state.add_task("A").unwrap();

        let moved = state.move_task(task.id, Bucket::Done).unwrap();
        assert!(moved.completed);

        let snapshot = state.clone();
        assert_eq!(
            state.move_task(task.id, Bucket::Done),
            Err(DomainError::AlreadyInBucket(task.id, Bucket::Done))
        );
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_add_comment_uses_current_user_and_clock() {
        let mut state = logged_in("3");
        let task = state.add_task("A").unwrap();
        let comment = state.add_comment(task.id, " looks good ", &FixedClock).unwrap();

        assert_eq!(comment.id, 1);
        assert_eq!(comment.text, "looks good");
        assert_eq!(comment.author_id, "3");
        assert_eq!(comment.author_name, "山田次郎");
        assert_eq!(comment.created_at, "2024/1/2 3:04:05");
        assert_eq!(state.task(task.id).unwrap().comments, vec![comment]);
    }

    #[test]
    fn test_comment_ids_are_shared_across_tasks() {
        let mut state = logged_in("1");
        let a = state.add_task("A").unwrap();
        let b = state.add_task("B").unwrap();
        let c1 = state.add_comment(a.id, "one", &FixedClock).unwrap();
        let c2 = state.add_comment(b.id, "two", &FixedClock).unwrap();
        let c3 = state.add_comment(a.id, "three", &FixedClock).unwrap();
        assert_eq!((c1.id, c2.id, c3.id), (1, 2, 3));

        let thread: Vec<&str> = state.task(a.id).unwrap().comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(thread, vec!["one", "three"]);
    }

    #[test]
    fn test_comment_on_missing_task_does_not_consume_id() {
        let mut state = logged_in("1");
        let task = state.add_task("A").unwrap();
        assert!(state.add_comment(99, "lost", &FixedClock).is_err());
        assert_eq!(state.add_comment(task.id, "kept", &FixedClock).unwrap().id, 1);
    }

    #[test]
    fn test_register_user_appends_and_logs_in() {
        let mut state = TodoState::default();
        let user = state.register_user("山本健", "yamamoto@x.com").unwrap();
        assert_eq!(user.id, "4");
        assert_eq!(state.users().last(), Some(&user));
        assert_eq!(state.current_user(), Some(&user));
    }

    #[test]
    fn test_register_user_rejects_blank_fields() {
        let mut state = TodoState::default();
        assert_eq!(state.register_user(" ", "a@b.c"), Err(DomainError::EmptyInput("name")));
        assert_eq!(state.register_user("Ann", ""), Err(DomainError::EmptyInput("email")));
        assert_eq!(state.users().len(), 3);
        assert!(state.current_user().is_none());
    }

    #[test]
    fn test_register_user_allows_duplicates() {
        let mut state = TodoState::default();
        let first = state.register_user("Ann", "ann@x.com").unwrap();
        let second = state.register_user("Ann", "ann@x.com").unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(state.users().len(), 5);
    }

    #[test]
    fn test_login_unknown_user_keeps_current() {
        let mut state = logged_in("1");
        assert_eq!(state.login("99"), Err(DomainError::UserNotFound("99".to_string())));
        assert_eq!(state.current_user().map(|u| u.id.as_str()), Some("1"));
    }

    #[test]
    fn test_logout_clears_current_user() {
        let mut state = logged_in("2");
        assert_eq!(state.logout().map(|u| u.id), Some("2".to_string()));
        assert!(state.current_user().is_none());
        assert!(state.logout().is_none());
    }

    #[test]
    fn test_exhausted_counters_reject_new_ids() {
        let counters = IdCounters { next_task_id: u32::MAX, next_comment_id: u32::MAX };
        let mut state = TodoState::from_parts(None, seed_users(), vec![Task::new(1, "old", "1")], counters);
        state.login("1").unwrap();
        let before = state.clone();

        assert_eq!(state.add_task("new"), Err(DomainError::IdsExhausted("task")));
        assert_eq!(state.add_task("again"), Err(DomainError::IdsExhausted("task")));
        assert_eq!(
            state.add_comment(1, "note", &FixedClock),
            Err(DomainError::IdsExhausted("comment"))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_from_parts_with_max_id_hands_out_nothing() {
        let tasks = vec![Task::new(u32::MAX, "top", "1")];
        assert_eq!(IdCounters::past(&tasks), None);

        let mut state = TodoState::from_parts(None, seed_users(), tasks, IdCounters::default());
        assert_eq!(state.counters(), IdCounters::EXHAUSTED);
        state.login("1").unwrap();
        assert!(state.add_task("new").is_err());
        assert_eq!(state.tasks().len(), 1);
    }

    #[test]
    fn test_from_parts_raises_counters_past_existing_ids() {
        let mut task = Task::new(7, "old", "1");
        task.comments.push(Comment {
            id: 12,
            text: "c".to_string(),
            author_name: "田中太郎".to_string(),
            author_id: "1".to_string(),
            created_at: String::new(),
        });
        let state = TodoState::from_parts(None, seed_users(), vec![task], IdCounters::default());
        assert_eq!(state.counters(), IdCounters { next_task_id: 8, next_comment_id: 13 });

        let stored = IdCounters { next_task_id: 20, next_comment_id: 2 };
        let state = TodoState::from_parts(None, seed_users(), state.tasks().to_vec(), stored);
        assert_eq!(state.counters(), IdCounters { next_task_id: 20, next_comment_id: 13 });
    }
}
