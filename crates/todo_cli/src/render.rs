//! Plain-text rendering for the interactive menu.

use todo_core::{Todo, TodoStatus};

const TITLE_WIDTH: usize = 32;
const CATEGORY_WIDTH: usize = 12;
const DESCRIPTION_WIDTH: usize = 36;

pub fn success(message: &str) -> String {
    format!("SUCCESS: {message}")
}

pub fn error(message: &str) -> String {
    format!("ERROR: {message}")
}

pub fn info(message: &str) -> String {
    format!("INFO: {message}")
}

pub fn status_symbol(status: TodoStatus) -> &'static str {
    match status {
        TodoStatus::Complete => "✓",
        TodoStatus::Incomplete => "○",
    }
}

/// Numbered menu with a heading line.
pub fn menu(title: &str, options: &[&str]) -> String {
    let mut out = format!("\n{title}\n{}\n", "=".repeat(title.chars().count()));
    for (index, option) in options.iter().enumerate() {
        out.push_str(&format!("{}. {option}\n", index + 1));
    }
    out
}

/// Table of todos; ids are shown in full so they can be typed back.
pub fn todo_table(todos: &[Todo], heading: &str) -> String {
    if todos.is_empty() {
        return info("No todos found.");
    }

    let id_width = todos
        .iter()
        .map(|todo| todo.id.chars().count())
        .max()
        .unwrap_or(0)
        .max(2);

    let mut out = format!("\n{heading}\n");
    out.push_str(&format!(
        "{:<id_width$}  {}  {:<TITLE_WIDTH$}  {:<CATEGORY_WIDTH$}  {}\n",
        "ID", "S", "Title", "Category", "Description"
    ));
    for todo in todos {
        let description = if todo.description.is_empty() {
            "No description"
        } else {
            todo.description.as_str()
        };
        out.push_str(&format!(
            "{:<id_width$}  {}  {:<TITLE_WIDTH$}  {:<CATEGORY_WIDTH$}  {}\n",
            todo.id,
            status_symbol(todo.status),
            clip(&todo.title, TITLE_WIDTH),
            clip(&todo.category, CATEGORY_WIDTH),
            clip(description, DESCRIPTION_WIDTH),
        ));
    }
    out
}

pub fn todo_detail(todo: &Todo) -> String {
    let status = match todo.status {
        TodoStatus::Complete => "Complete",
        TodoStatus::Incomplete => "Incomplete",
    };
    let mut out = format!(
        "\nTodo Details:\nID: {}\nStatus: {} {status}\nTitle: {}\nCategory: {}\nCreated: {}\n",
        todo.id,
        status_symbol(todo.status),
        todo.title,
        todo.category,
        todo.created_at.format("%Y-%m-%d %H:%M UTC"),
    );
    if !todo.description.is_empty() {
        out.push_str(&format!("Description: {}\n", todo.description));
    }
    out
}

pub fn help() -> String {
    [
        "",
        "Help - Interactive Todo Application",
        "",
        "Features:",
        "  - Add, list, search, filter, complete, update and delete todos",
        "  - In-memory storage for this session only (nothing is saved)",
        "  - Undo the most recent changes (up to 10)",
        "  - Category-based organization",
        "",
        "How to use:",
        "  - Enter the number of a menu option at the prompt",
        "  - Todos can be picked by full id or by the start of their id",
        "  - If two ids share the typed start, the older todo is picked",
        "  - Type 'cancel' at an id prompt to go back",
        "",
        "Status:",
        "  ○ = Incomplete",
        "  ✓ = Complete",
        "",
    ]
    .join("\n")
}

fn clip(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max_chars.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::{clip, menu, todo_detail, todo_table};
    use todo_core::{Todo, TodoStatus};

    #[test]
    fn clip_keeps_short_values_and_marks_truncation() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("abcdefghijkl", 8), "abcde...");
    }

    #[test]
    fn menu_numbers_options_from_one() {
        let text = menu("Main", &["Add", "Exit"]);
        assert!(text.contains("1. Add\n"));
        assert!(text.contains("2. Exit\n"));
    }

    #[test]
    fn table_shows_full_id_and_placeholder_description() {
        let todo = Todo::draft("Buy milk")
            .id("milk-1")
            .category("Shopping")
            .status(TodoStatus::Complete)
            .build()
            .unwrap();

        let text = todo_table(&[todo], "All Todos");
        assert!(text.contains("milk-1"));
        assert!(text.contains("✓"));
        assert!(text.contains("No description"));
    }

    #[test]
    fn empty_table_is_an_info_line() {
        assert_eq!(todo_table(&[], "All Todos"), "INFO: No todos found.");
    }

    #[test]
    fn detail_omits_empty_description() {
        let todo = Todo::new("plain").unwrap();
        let text = todo_detail(&todo);
        assert!(text.contains("Status: ○ Incomplete"));
        assert!(!text.contains("Description:"));
    }
}
