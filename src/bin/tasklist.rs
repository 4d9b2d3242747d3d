//! In-memory task list CLI (teaching exercise).
//!
//! Responsibility:
//! - Add / view / update / delete / toggle tasks kept purely in memory
//! - No persistence, no network; everything lives for one session
//!
//! Unlike the original exercise, storage is an owned `TaskList` created in
//! `main` and passed down explicitly. No process-wide mutable singleton.

use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Task {
    id: u32,
    description: String,
    completed: bool,
}

#[derive(Debug, Default)]
struct TaskList {
    tasks: Vec<Task>,
    next_id: u32,
}

impl TaskList {
    fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a task; returns the generated id.
    /// The description must already be validated/trimmed by the caller.
    fn add(&mut self, description: &str) -> u32 {
        let id = self.next_id;
        self.tasks.push(Task {
            id,
            description: description.to_string(),
            completed: false,
        });
        self.next_id += 1;
        id
    }

    fn all(&self) -> &[Task] {
        &self.tasks
    }

    fn find(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn update(&mut self, id: u32, description: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.description = description.to_string();
                true
            }
            None => false,
        }
    }

    fn delete(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() < before
    }

    /// Flip completion; returns the new value, or None if the id is unknown.
    fn toggle(&mut self, id: u32) -> Option<bool> {
        self.tasks.iter_mut().find(|t| t.id == id).map(|task| {
            task.completed = !task.completed;
            task.completed
        })
    }
}

/// Same rule as the API: trimmed, non-empty.
fn validate_description(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn print_menu() {
    println!();
    println!("==== Task List ====");
    println!("1. Add task");
    println!("2. View tasks");
    println!("3. Update task");
    println!("4. Delete task");
    println!("5. Toggle complete");
    println!("6. Exit");
    print!("> ");
    let _ = io::stdout().flush();
}

fn print_tasks(list: &TaskList) {
    if list.all().is_empty() {
        println!("No tasks yet.");
        return;
    }
    for task in list.all() {
        let mark = if task.completed { "x" } else { " " };
        println!("[{mark}] {}: {}", task.id, task.description);
    }
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    lines.next().and_then(|l| l.ok())
}

fn prompt_id(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<u32> {
    print!("Task id: ");
    let _ = io::stdout().flush();
    read_line(lines)?.trim().parse().ok()
}

fn main() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut list = TaskList::new();

    loop {
        print_menu();
        let Some(choice) = read_line(&mut lines) else {
            break;
        };

        match choice.trim() {
            "1" => {
                print!("Description: ");
                let _ = io::stdout().flush();
                let Some(input) = read_line(&mut lines) else {
                    break;
                };
                match validate_description(&input) {
                    Some(description) => {
                        let id = list.add(description);
                        println!("Added task {id}.");
                    }
                    None => println!("Description cannot be empty."),
                }
            }
            "2" => print_tasks(&list),
            "3" => {
                let Some(id) = prompt_id(&mut lines) else {
                    println!("Invalid id.");
                    continue;
                };
                print!("New description: ");
                let _ = io::stdout().flush();
                let Some(input) = read_line(&mut lines) else {
                    break;
                };
                match validate_description(&input) {
                    Some(description) if list.update(id, description) => {
                        println!("Updated task {id}.")
                    }
                    Some(_) => println!("Task {id} not found."),
                    None => println!("Description cannot be empty."),
                }
            }
            "4" => {
                let Some(id) = prompt_id(&mut lines) else {
                    println!("Invalid id.");
                    continue;
                };
                if list.delete(id) {
                    println!("Deleted task {id}.");
                } else {
                    println!("Task {id} not found.");
                }
            }
            "5" => {
                let Some(id) = prompt_id(&mut lines) else {
                    println!("Invalid id.");
                    continue;
                };
                match list.toggle(id) {
                    Some(true) => println!("Task {id} marked complete."),
                    Some(false) => println!("Task {id} marked incomplete."),
                    None => println!("Task {id} not found."),
                }
            }
            "6" => break,
            other => println!("Unknown option: {other}"),
        }
    }

    println!("Bye.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assigns_sequential_ids() {
        let mut list = TaskList::new();
        assert_eq!(list.add("first"), 1);
        assert_eq!(list.add("second"), 2);
        assert_eq!(list.all().len(), 2);
    }

    #[test]
    fn new_tasks_start_incomplete() {
        let mut list = TaskList::new();
        let id = list.add("task");
        assert!(!list.find(id).unwrap().completed);
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut list = TaskList::new();
        let id = list.add("task");
        assert_eq!(list.toggle(id), Some(true));
        assert_eq!(list.toggle(id), Some(false));
    }

    #[test]
    fn update_unknown_id_reports_not_found() {
        let mut list = TaskList::new();
        assert!(!list.update(42, "nope"));
    }

    #[test]
    fn delete_removes_only_the_target() {
        let mut list = TaskList::new();
        let a = list.add("a");
        let b = list.add("b");
        assert!(list.delete(a));
        assert!(list.find(a).is_none());
        assert!(list.find(b).is_some());
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut list = TaskList::new();
        let a = list.add("a");
        list.delete(a);
        assert_eq!(list.add("b"), 2);
    }

    #[test]
    fn whitespace_description_is_rejected() {
        assert_eq!(validate_description("   "), None);
        assert_eq!(validate_description("  ok  "), Some("ok"));
    }
}
