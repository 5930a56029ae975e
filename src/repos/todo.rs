use crate::models::todo_item::TodoItem;

/// In-memory todo list. Single-threaded and synchronous; lives only as long
/// as the process that built it.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<TodoItem>,
    next_id: u64,
}

#[allow(dead_code)]
impl TodoStore {
    pub fn new() -> Self {
        TodoStore {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Add an item. Whitespace-only text is ignored.
    pub fn add_todo(&mut self, text: &str) -> Option<&TodoItem> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = format!("todo-{}", self.next_id);
        self.next_id += 1;
        self.todos.push(TodoItem {
            id,
            text: text.to_string(),
            completed: false,
        });
        self.todos.last()
    }

    pub fn remove_todo(&mut self, id: &str) {
        self.todos.retain(|todo| todo.id != id);
    }

    pub fn toggle_todo(&mut self, id: &str) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.completed = !todo.completed;
        }
    }

    pub fn update_todo(&mut self, id: &str, text: &str) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.text = text.trim().to_string();
        }
    }

    pub fn clear_completed(&mut self) {
        self.todos.retain(|todo| !todo.completed);
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn active_todos(&self) -> Vec<&TodoItem> {
        self.todos.iter().filter(|todo| !todo.completed).collect()
    }

    pub fn completed_todos(&self) -> Vec<&TodoItem> {
        self.todos.iter().filter(|todo| todo.completed).collect()
    }

    pub fn total_todos(&self) -> usize {
        self.todos.len()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        TodoStore::new()
    }
}
