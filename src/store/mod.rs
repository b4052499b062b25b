use crate::error::TicklistError;
use crate::models::{Category, Task, Theme};
use crate::storage::{StoragePort, TASKS_KEY, THEME_KEY};

/// Owns the task list and theme flag. All mutation goes through intent
/// methods; each task-list intent persists a full snapshot before returning,
/// and each theme intent persists the theme literal.
pub struct TaskStore<S: StoragePort> {
    storage: S,
    tasks: Vec<Task>,
    theme: Theme,
}

impl<S: StoragePort> TaskStore<S> {
    /// Restore state from the port. An absent or unparseable tasks value
    /// restores as the empty list; only a failing read is an error.
    pub fn open(storage: S) -> Result<Self, TicklistError> {
        let tasks = match storage.load(TASKS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        };
        let theme_value = storage.load(THEME_KEY)?;
        let theme = Theme::from_persisted(theme_value.as_deref());
        Ok(Self {
            storage,
            tasks,
            theme,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Append a new open task. Whitespace-only text is a silent no-op and
    /// returns Ok(None) without touching the list or the port.
    pub fn add_task(
        &mut self,
        raw_text: &str,
        category: Category,
    ) -> Result<Option<&Task>, TicklistError> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        self.tasks.push(Task::new(text, category));
        self.persist_tasks()?;
        Ok(self.tasks.last())
    }

    /// Flip exactly one task's completed flag.
    pub fn toggle_complete(&mut self, reference: &str) -> Result<&Task, TicklistError> {
        let idx = self.resolve_index(reference)?;
        self.tasks[idx].completed = !self.tasks[idx].completed;
        self.persist_tasks()?;
        Ok(&self.tasks[idx])
    }

    /// Remove exactly one task, preserving the relative order of the rest.
    pub fn delete_task(&mut self, reference: &str) -> Result<Task, TicklistError> {
        let idx = self.resolve_index(reference)?;
        let removed = self.tasks.remove(idx);
        self.persist_tasks()?;
        Ok(removed)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), TicklistError> {
        self.theme = theme;
        self.storage.save(THEME_KEY, theme.as_str())
    }

    /// Resolve a task by exact id, then by unique id prefix.
    /// Unknown references fail loudly; they are never clamped.
    pub fn resolve(&self, reference: &str) -> Result<&Task, TicklistError> {
        self.resolve_index(reference).map(|idx| &self.tasks[idx])
    }

    fn resolve_index(&self, reference: &str) -> Result<usize, TicklistError> {
        if let Some(idx) = self.tasks.iter().position(|t| t.id == reference) {
            return Ok(idx);
        }
        let matches: Vec<usize> = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.id.starts_with(reference) && !reference.is_empty())
            .map(|(i, _)| i)
            .collect();
        match matches.len() {
            0 => Err(TicklistError::task_not_found(reference)),
            1 => Ok(matches[0]),
            _ => {
                let candidates: Vec<String> = matches
                    .iter()
                    .map(|&i| format!("{} ({})", self.tasks[i].text, self.tasks[i].id))
                    .collect();
                Err(TicklistError::ambiguous_ref(reference, &candidates))
            }
        }
    }

    fn persist_tasks(&self) -> Result<(), TicklistError> {
        let snapshot = serde_json::to_string(&self.tasks)
            .map_err(|e| TicklistError::storage(e.to_string()))?;
        self.storage.save(TASKS_KEY, &snapshot)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemoryStorage {
        values: RefCell<HashMap<String, String>>,
    }

    impl StoragePort for MemoryStorage {
        fn load(&self, key: &str) -> Result<Option<String>, TicklistError> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn save(&self, key: &str, value: &str) -> Result<(), TicklistError> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn open_empty() -> TaskStore<MemoryStorage> {
        TaskStore::open(MemoryStorage::default()).unwrap()
    }

    #[test]
    fn add_appends_trimmed_open_task() {
        let mut store = open_empty();
        let added = store.add_task("  Buy milk  ", Category::Personal).unwrap();
        let added = added.expect("task added");
        assert_eq!(added.text, "Buy milk");
        assert_eq!(added.category, Category::Personal);
        assert!(!added.completed);
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn add_whitespace_only_is_silent_noop() {
        let mut store = open_empty();
        assert!(store.add_task("", Category::Work).unwrap().is_none());
        assert!(store.add_task("   ", Category::Work).unwrap().is_none());
        assert!(store.tasks().is_empty());
        // No snapshot written either.
        assert!(store.storage.load(TASKS_KEY).unwrap().is_none());
    }

    #[test]
    fn toggle_flips_only_the_target_and_round_trips() {
        let mut store = open_empty();
        store.add_task("one", Category::Work).unwrap();
        store.add_task("two", Category::Urgent).unwrap();
        let id = store.tasks()[0].id.clone();

        let toggled = store.toggle_complete(&id).unwrap();
        assert!(toggled.completed);
        assert!(!store.tasks()[1].completed);

        let toggled = store.toggle_complete(&id).unwrap();
        assert!(!toggled.completed);
    }

    #[test]
    fn delete_removes_exactly_one_preserving_order() {
        let mut store = open_empty();
        store.add_task("a", Category::Work).unwrap();
        store.add_task("b", Category::Work).unwrap();
        store.add_task("c", Category::Work).unwrap();
        let id = store.tasks()[1].id.clone();

        let removed = store.delete_task(&id).unwrap();
        assert_eq!(removed.text, "b");
        let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn unknown_reference_fails_loudly() {
        let mut store = open_empty();
        store.add_task("a", Category::Work).unwrap();
        let err = store.toggle_complete("no-such-id").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::TaskNotFound);
        let err = store.delete_task("no-such-id").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::TaskNotFound);
    }

    #[test]
    fn prefix_resolution_requires_uniqueness() {
        let mut store = open_empty();
        store.add_task("a", Category::Work).unwrap();
        let id = store.tasks()[0].id.clone();
        let prefix = &id[..10];
        assert_eq!(store.resolve(prefix).unwrap().text, "a");
        // Empty prefix never matches.
        assert!(store.resolve("").is_err());
    }

    #[test]
    fn shared_prefix_is_ambiguous() {
        let mut store = open_empty();
        store.add_task("a", Category::Work).unwrap();
        store.add_task("b", Category::Work).unwrap();
        let id0 = store.tasks()[0].id.clone();
        let id1 = store.tasks()[1].id.clone();
        // ULIDs minted back to back share their timestamp prefix.
        let lcp: String = id0
            .chars()
            .zip(id1.chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a)
            .collect();
        assert!(!lcp.is_empty());
        let err = store.resolve(&lcp).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::AmbiguousRef);
    }

    #[test]
    fn snapshot_round_trips_through_the_port() {
        let storage = MemoryStorage::default();
        let mut store = TaskStore::open(storage).unwrap();
        store.add_task("Buy milk", Category::Personal).unwrap();
        store.add_task("Fix bug", Category::Work).unwrap();
        let id = store.tasks()[0].id.clone();
        store.toggle_complete(&id).unwrap();
        let before = store.tasks().to_vec();

        let reopened = TaskStore::open(store.storage).unwrap();
        assert_eq!(reopened.tasks(), before.as_slice());
    }

    #[test]
    fn unparseable_snapshot_restores_empty() {
        let storage = MemoryStorage::default();
        storage.save(TASKS_KEY, "not json").unwrap();
        let store = TaskStore::open(storage).unwrap();
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn theme_round_trips_and_defaults_to_light() {
        let storage = MemoryStorage::default();
        let mut store = TaskStore::open(storage).unwrap();
        assert_eq!(store.theme(), Theme::Light);

        store.set_theme(Theme::Dark).unwrap();
        assert_eq!(
            store.storage.load(THEME_KEY).unwrap().as_deref(),
            Some("dark")
        );

        let reopened = TaskStore::open(store.storage).unwrap();
        assert_eq!(reopened.theme(), Theme::Dark);

        let storage = MemoryStorage::default();
        storage.save(THEME_KEY, "midnight").unwrap();
        let store = TaskStore::open(storage).unwrap();
        assert_eq!(store.theme(), Theme::Light);
    }
}
