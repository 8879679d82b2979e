use crate::error::AppError;
use crate::model::{Task, now_rfc3339};
use serde::{Deserialize, Serialize};

/// Ordered collection of tasks, persisted as a bare JSON array.
///
/// Positions are 1-based and transient: they are the row numbers the user
/// sees in the listing and shift when an earlier task is deleted. Valid
/// positions are `1..=len`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Appends a new pending task and returns it.
    pub fn add(&mut self, description: &str) -> Result<Task, AppError> {
        let task = Task::new(description)?;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Marks the task at the 1-based position as done, stamping the
    /// completion time. The list is untouched when the position is out of
    /// range.
    pub fn complete(&mut self, position: usize) -> Result<Task, AppError> {
        let offset = self.offset(position)?;
        let completed_at = now_rfc3339()?;

        let task = &mut self.tasks[offset];
        task.done = true;
        task.completed_at = Some(completed_at);

        Ok(task.clone())
    }

    /// Removes the task at the 1-based position, shifting later tasks down
    /// one. Returns the removed task.
    pub fn delete(&mut self, position: usize) -> Result<Task, AppError> {
        let offset = self.offset(position)?;
        Ok(self.tasks.remove(offset))
    }

    pub fn count_pending(&self) -> usize {
        self.tasks.iter().filter(|task| !task.done).count()
    }

    fn offset(&self, position: usize) -> Result<usize, AppError> {
        if position == 0 || position > self.tasks.len() {
            return Err(AppError::invalid_index(position));
        }
        Ok(position - 1)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
