//! The authoritative in-memory set of todos.
//!
//! One [`RwLock`] guards the whole collection together with the next id, so
//! listing can run in parallel while every mutation is exclusive. Ids are
//! handed out sequentially from 1 and are never reused after a delete.

use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicU64, Ordering},
};

use api::v1::{Todo, TodoId};
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::StoreError;

#[derive(Debug)]
pub struct TodoStore {
    generation: AtomicU64,
    todos: RwLock<Todos>,
}

#[derive(Debug)]
struct Todos {
    next_id: TodoId,
    by_id: BTreeMap<TodoId, Todo>,
}

impl Default for Todos {
    fn default() -> Self {
        Self {
            next_id: 1,
            by_id: BTreeMap::new(),
        }
    }
}

impl Todos {
    fn insert(&mut self, title: String) -> &mut Todo {
        let id = self.next_id;
        self.next_id += 1;

        self.by_id.entry(id).or_insert(Todo {
            id,
            title,
            completed: false,
            created_at: Utc::now(),
        })
    }

    fn get_mut(&mut self, id: TodoId) -> Result<&mut Todo, StoreError> {
        self.by_id.get_mut(&id).ok_or(StoreError::NotFound(id))
    }
}

fn validate_title(title: &str) -> Result<(), StoreError> {
    if title.trim().is_empty() {
        return Err(StoreError::Validation(String::from("title is required")));
    }

    Ok(())
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            todos: RwLock::new(Todos::default()),
        }
    }

    /// Builds a store that already holds one active todo per title, with ids
    /// assigned in order.
    pub fn with_titles<I, S>(titles: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_todos(titles.into_iter().map(|title| (title, false)))
    }

    /// Like [`TodoStore::with_titles`], with an initial completion state per
    /// todo.
    pub fn with_todos<I, S>(todos: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let mut seeded = Todos::default();

        for (title, completed) in todos {
            let title = title.into();
            validate_title(&title)?;
            seeded.insert(title).completed = completed;
        }

        Ok(Self {
            generation: AtomicU64::new(0),
            todos: RwLock::new(seeded),
        })
    }

    /// Number of successful mutations so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    // callers must hold the write guard
    fn increment_generation(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// Snapshot of every todo, ordered by id.
    pub async fn list(&self) -> Vec<Todo> {
        let todos = self.todos.read().await;
        todos.by_id.values().cloned().collect()
    }

    pub async fn get(&self, id: TodoId) -> Result<Todo, StoreError> {
        let todos = self.todos.read().await;
        todos.by_id.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    pub async fn create(&self, title: String) -> Result<Todo, StoreError> {
        validate_title(&title)?;

        let mut todos = self.todos.write().await;
        let todo = todos.insert(title).clone();
        self.increment_generation();

        Ok(todo)
    }

    /// Replaces the title and completion state of an existing todo.
    pub async fn update(
        &self,
        id: TodoId,
        title: String,
        completed: bool,
    ) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let todo = todos.get_mut(id)?;
        validate_title(&title)?;
        todo.title = title;
        todo.completed = completed;
        let todo = todo.clone();
        self.increment_generation();

        Ok(todo)
    }

    pub async fn toggle(&self, id: TodoId) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let todo = todos.get_mut(id)?;
        todo.completed = !todo.completed;
        let todo = todo.clone();
        self.increment_generation();

        Ok(todo)
    }

    pub async fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        let mut todos = self.todos.write().await;
        todos.by_id.remove(&id).ok_or(StoreError::NotFound(id))?;
        self.increment_generation();

        Ok(())
    }

    /// Drops every completed todo and returns how many were removed.
    pub async fn clear_completed(&self) -> usize {
        let mut todos = self.todos.write().await;
        let before = todos.by_id.len();
        todos.by_id.retain(|_, todo| !todo.completed);
        let removed = before - todos.by_id.len();

        if removed > 0 {
            self.increment_generation();
        }

        removed
    }
}
