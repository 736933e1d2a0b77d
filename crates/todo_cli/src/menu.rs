//! Interactive menu loop.
//!
//! # Responsibility
//! - Map numbered menu choices to `TodoService` use-cases.
//! - Turn service outcomes into user-facing messages.
//!
//! # Invariants
//! - Input and output are injected, so sessions can run headless.
//! - End of input exits the loop like the Exit option.
//! - Todo text is printed to the user but never logged.

use crate::render;
use log::{debug, info};
use std::io::{self, BufRead, Write};
use todo_core::{
    messages, NewTodo, ServiceError, TodoPatch, TodoService, TodoStatus, UndoOutcome,
};

/// Categories offered at category prompts.
pub const CATEGORIES: &[&str] = &["Work", "Personal", "Shopping", "Health", "General", "Other"];

const MAIN_OPTIONS: &[&str] = &[
    "Add todo",
    "List all todos",
    "Search todos",
    "Filter todos by category",
    "Complete todo",
    "Mark todo as incomplete",
    "Update todo",
    "Delete todo",
    "Undo last action",
    "Help",
    "Exit",
];

const CANCEL: &str = "cancel";

/// Adds the startup sample todos through ordinary create calls.
pub fn seed_samples(service: &mut TodoService) -> Result<usize, ServiceError> {
    let samples = [
        NewTodo::new("Practice coding exercises")
            .description("Complete at least 3 coding problems")
            .category("Work"),
        NewTodo::new("Review project documentation")
            .description("Read and understand the project requirements and architecture")
            .category("Work"),
        NewTodo::new("Plan weekend activities")
            .description("Organize activities for the upcoming weekend with family")
            .category("Personal"),
    ];

    let count = samples.len();
    for sample in samples {
        service.create_todo(sample)?;
    }
    info!("event=seed_samples module=cli status=ok count={count}");
    Ok(count)
}

/// Read-eval loop over one todo service.
pub struct Menu<R, W> {
    service: TodoService,
    input: R,
    output: W,
    running: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(service: TodoService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
            running: true,
        }
    }

    pub fn service(&self) -> &TodoService {
        &self.service
    }

    /// Runs until Exit is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        self.say(&render::info("Welcome to the Interactive Todo Application!"))?;
        info!("event=menu_start module=cli status=ok");

        while self.running {
            self.say(&render::menu("Main Menu", MAIN_OPTIONS))?;
            let Some(choice) = self.ask(&format!("Select an option (1-{})", MAIN_OPTIONS.len()))?
            else {
                break;
            };
            self.dispatch(choice.trim())?;
        }

        info!("event=menu_exit module=cli status=ok");
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> io::Result<()> {
        match known_option(choice) {
            Some(number) => debug!("event=menu_choice module=cli choice={number}"),
            None => debug!("event=menu_choice module=cli choice=invalid"),
        }
        match choice {
            "1" => self.add_todo(),
            "2" => self.list_todos(),
            "3" => self.search_todos(),
            "4" => self.filter_by_category(),
            "5" => self.set_status(TodoStatus::Complete),
            "6" => self.set_status(TodoStatus::Incomplete),
            "7" => self.update_todo(),
            "8" => self.delete_todo(),
            "9" => self.undo(),
            "10" => self.say(&render::help()),
            "11" => self.exit(),
            _ => self.say(&render::error(&format!(
                "Invalid choice `{choice}`; enter a number from 1 to {}.",
                MAIN_OPTIONS.len()
            ))),
        }
    }

    fn add_todo(&mut self) -> io::Result<()> {
        let Some(title) = self.ask("Enter todo title")? else {
            return self.exit();
        };
        if title.trim().is_empty() {
            return self.say(&render::error("Title is required!"));
        }
        let Some(custom_id) = self.ask("Enter custom ID (optional, Enter for auto-generated)")?
        else {
            return self.exit();
        };
        let Some(description) = self.ask("Enter description (optional)")? else {
            return self.exit();
        };
        let Some(category) = self.ask_category("General")? else {
            return self.exit();
        };

        let mut request = NewTodo::new(title)
            .description(description)
            .category(category);
        if !custom_id.trim().is_empty() {
            request = request.id(custom_id);
        }

        match self.service.create_todo(request) {
            Ok(todo) => self.say(&render::success(&format!(
                "Todo '{}' added with ID: {}",
                todo.title, todo.id
            ))),
            Err(err) => self.report(&err),
        }
    }

    fn list_todos(&mut self) -> io::Result<()> {
        let todos = self.service.list_all();
        if todos.is_empty() {
            return self.say(&render::info("No todos in the list."));
        }
        let summary = self.service.summary();
        self.say(&render::todo_table(&todos, "All Todos"))?;
        self.say(&format!(
            "{} total, {} complete, {} incomplete",
            summary.total, summary.complete, summary.incomplete
        ))
    }

    fn search_todos(&mut self) -> io::Result<()> {
        let Some(query) = self.ask("Enter search query")? else {
            return self.exit();
        };
        let query = query.trim();
        if query.is_empty() {
            return self.say(&render::info("Search query cannot be empty."));
        }

        let results = self.service.search(query);
        if results.is_empty() {
            return self.say(&render::info(&format!("No todos found matching '{query}'.")));
        }
        self.say(&render::todo_table(
            &results,
            &format!("Search Results for '{query}'"),
        ))
    }

    fn filter_by_category(&mut self) -> io::Result<()> {
        self.say(&category_list())?;
        let Some(raw) = self.ask("Enter category number or name to filter by")? else {
            return self.exit();
        };
        let Some(category) = resolve_category(&raw) else {
            return self.say(&render::info("Invalid category."));
        };

        let results = self.service.list_by_category(category);
        if results.is_empty() {
            return self.say(&render::info(&format!(
                "No todos found in category '{category}'."
            )));
        }
        self.say(&render::todo_table(
            &results,
            &format!("Todos in Category: {category}"),
        ))
    }

    fn set_status(&mut self, status: TodoStatus) -> io::Result<()> {
        let (candidates_status, heading, empty_message, verb) = match status {
            TodoStatus::Complete => (
                TodoStatus::Incomplete,
                "Incomplete Todos",
                "No incomplete todos to complete.",
                "complete",
            ),
            TodoStatus::Incomplete => (
                TodoStatus::Complete,
                "Completed Todos",
                "No completed todos to mark as incomplete.",
                "mark incomplete",
            ),
        };

        let candidates = self.service.list_by_status(candidates_status);
        if candidates.is_empty() {
            return self.say(&render::info(empty_message));
        }
        self.say(&render::todo_table(&candidates, heading))?;

        let Some(id) = self.ask_id(&format!("Enter ID of todo to {verb} (or 'cancel')"))? else {
            return Ok(());
        };

        let result = match status {
            TodoStatus::Complete => self.service.complete_todo(&id),
            TodoStatus::Incomplete => self.service.reopen_todo(&id),
        };
        match result {
            Ok(todo) => self.say(&render::success(&format!(
                "Todo '{}' marked as {}.",
                todo.title, todo.status
            ))),
            Err(err) => self.report(&err),
        }
    }

    fn update_todo(&mut self) -> io::Result<()> {
        let todos = self.service.list_all();
        if todos.is_empty() {
            return self.say(&render::info("No todos to update."));
        }
        self.say(&render::todo_table(&todos, "All Todos"))?;

        let Some(id) = self.ask_id("Enter ID of todo to update (or 'cancel')")? else {
            return Ok(());
        };
        let Some(current) = self.service.get(&id) else {
            return self.say(&render::error("Todo not found!"));
        };
        self.say(&render::todo_detail(&current))?;

        let Some(title) = self.ask("New title (Enter to keep)")? else {
            return self.exit();
        };
        let Some(description) = self.ask("New description (Enter to keep)")? else {
            return self.exit();
        };
        let Some(category) = self.ask_category(&current.category)? else {
            return self.exit();
        };

        let mut patch = TodoPatch::new();
        if !title.trim().is_empty() {
            patch = patch.with_title(title);
        }
        if !description.trim().is_empty() {
            patch = patch.with_description(description);
        }
        if category != current.category {
            patch = patch.with_category(category);
        }
        if patch.is_empty() {
            return self.say(&render::info("Nothing changed."));
        }

        match self.service.edit_todo(&current.id, &patch) {
            Ok(_) => self.say(&render::success("Todo updated successfully!")),
            Err(err) => self.report(&err),
        }
    }

    fn delete_todo(&mut self) -> io::Result<()> {
        let todos = self.service.list_all();
        if todos.is_empty() {
            return self.say(&render::info("No todos to delete."));
        }
        self.say(&render::todo_table(&todos, "All Todos"))?;

        let Some(id) = self.ask_id("Enter ID of todo to delete (or 'cancel')")? else {
            return Ok(());
        };
        let Some(answer) = self.ask("Are you sure you want to delete this todo? [y/N]")? else {
            return self.exit();
        };
        if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            return self.say(&render::info("Deletion cancelled."));
        }

        match self.service.delete_todo(&id) {
            Ok(todo) => self.say(&render::success(&format!("Todo '{}' deleted.", todo.title))),
            Err(err) => self.report(&err),
        }
    }

    fn undo(&mut self) -> io::Result<()> {
        match self.service.undo() {
            UndoOutcome::Reverted(entry) => self.say(&render::success(&format!(
                "Last action undone ({} of '{}').",
                entry.action.as_str(),
                entry.snapshot.title
            ))),
            UndoOutcome::NothingToUndo => self.say(&render::info("No actions to undo.")),
            UndoOutcome::TargetMissing(_) => self.say(&render::error(
                "Could not undo last action: the todo no longer exists.",
            )),
        }
    }

    fn exit(&mut self) -> io::Result<()> {
        self.running = false;
        self.say(&render::info("Exiting the application. Goodbye!"))
    }

    fn report(&mut self, err: &ServiceError) -> io::Result<()> {
        match err {
            ServiceError::Invalid(issues) => {
                for message in messages(issues) {
                    self.say(&render::error(&message))?;
                }
                Ok(())
            }
            ServiceError::NotFound(_) => self.say(&render::error("Todo not found!")),
            other => self.say(&render::error(&other.to_string())),
        }
    }

    /// Asks for a category; blank input keeps `fallback`, unknown input
    /// also keeps it.
    fn ask_category(&mut self, fallback: &str) -> io::Result<Option<String>> {
        self.say(&category_list())?;
        let Some(raw) = self.ask(&format!("Enter category number or name (default: {fallback})"))?
        else {
            return Ok(None);
        };
        let category = resolve_category(&raw).unwrap_or(fallback);
        Ok(Some(category.to_string()))
    }

    /// Asks for an id; `None` on cancel, blank input or end of input.
    fn ask_id(&mut self, label: &str) -> io::Result<Option<String>> {
        let Some(raw) = self.ask(label)? else {
            self.exit()?;
            return Ok(None);
        };
        let id = raw.trim();
        if id.is_empty() || id.eq_ignore_ascii_case(CANCEL) {
            return Ok(None);
        }
        Ok(Some(id.to_string()))
    }

    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

fn category_list() -> String {
    let mut out = String::from("Available Categories:\n");
    for (index, category) in CATEGORIES.iter().enumerate() {
        out.push_str(&format!("  {}. {category}\n", index + 1));
    }
    out
}

/// Maps input to a main-menu option number; raw input never reaches the log.
fn known_option(choice: &str) -> Option<usize> {
    (1..=MAIN_OPTIONS.len()).find(|number| number.to_string() == choice)
}

/// Resolves a 1-based number or a case-insensitive category name.
fn resolve_category(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    if let Ok(number) = raw.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| CATEGORIES.get(index))
            .copied();
    }
    CATEGORIES
        .iter()
        .find(|category| category.eq_ignore_ascii_case(raw))
        .copied()
}
