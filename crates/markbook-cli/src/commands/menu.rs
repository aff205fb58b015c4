//! Menu command - the interactive numbered menu.
//!
//! Prompts retry until they get a usable answer. Ctrl-C or end of input in
//! the middle of an operation abandons it and returns to the menu with the
//! store untouched. Ctrl-C or end of input at the menu itself exits.

use std::io;
use std::path::PathBuf;

use colored::Colorize;
use markbook::{RecordStore, SaveStatus, Subject};

use super::analytics::{NO_DATA, report_lines};
use super::open_store;
use crate::console::{Console, Prompted, Terminal};

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    Delete,
    Analytics,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Analytics,
        MenuChoice::Exit,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::Add => "1",
            MenuChoice::Update => "2",
            MenuChoice::Delete => "3",
            MenuChoice::Analytics => "4",
            MenuChoice::Exit => "5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add student",
            MenuChoice::Update => "Update student",
            MenuChoice::Delete => "Delete student",
            MenuChoice::Analytics => "Show analytics",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl std::str::FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.key() == s)
            .ok_or_else(|| format!("Invalid choice: {}", s))
    }
}

/// Raised when the user abandons an operation mid-prompt.
struct Aborted;

type Step<T> = Result<T, Aborted>;

/// Ask until `parse` accepts the answer.
fn ask<T>(
    console: &mut dyn Console,
    label: &str,
    mut parse: impl FnMut(&str) -> Result<T, String>,
) -> io::Result<Step<T>> {
    loop {
        match console.prompt(label)? {
            Prompted::Line(line) => match parse(&line) {
                Ok(value) => return Ok(Ok(value)),
                Err(message) => console.say(&message.red().to_string()),
            },
            Prompted::Interrupted | Prompted::Closed => return Ok(Err(Aborted)),
        }
    }
}

fn ask_name(console: &mut dyn Console, label: &str) -> io::Result<Step<String>> {
    ask(console, label, |line| {
        markbook::record::validate_name(line).map_err(|e| e.to_string())
    })
}

fn ask_mark(console: &mut dyn Console, label: &str, subject: Subject) -> io::Result<Step<i64>> {
    ask(console, label, |line| {
        let value: i64 = line
            .trim()
            .parse()
            .map_err(|_| "Invalid input. Marks must be integers.".to_string())?;
        markbook::record::validate_mark(subject, value).map_err(|e| e.to_string())
    })
}

fn ask_subject(console: &mut dyn Console) -> io::Result<Step<Subject>> {
    ask(
        console,
        "Enter subject to update (maths, science, english, social_studies, language): ",
        |line| line.parse::<Subject>().map_err(|e| e.to_string()),
    )
}

fn report_saved(console: &mut dyn Console, status: SaveStatus, success: &str) {
    match status {
        SaveStatus::Saved => console.say(&success.green().to_string()),
        SaveStatus::Failed(reason) => console.say(
            &format!("Change kept in memory but could not be saved: {}", reason)
                .red()
                .to_string(),
        ),
    }
}

fn add_student(store: &mut RecordStore, console: &mut dyn Console) -> io::Result<Step<()>> {
    let Ok(name) = ask_name(console, "Enter student name: ")? else {
        return Ok(Err(Aborted));
    };

    let mut marks = [0i64; 5];
    for (mark, subject) in marks.iter_mut().zip(Subject::ALL) {
        let label = format!("Enter {} marks: ", subject.label().to_lowercase());
        let Ok(value) = ask_mark(console, &label, subject)? else {
            return Ok(Err(Aborted));
        };
        *mark = value;
    }

    match store.add(&name, marks) {
        Ok(status) => report_saved(console, status, "Student added successfully."),
        Err(e) => console.say(&format!("Error adding student: {}", e).red().to_string()),
    }
    Ok(Ok(()))
}

fn update_student(store: &mut RecordStore, console: &mut dyn Console) -> io::Result<Step<()>> {
    let Ok(name) = ask_name(console, "Enter student name to update: ")? else {
        return Ok(Err(Aborted));
    };
    if store.find(&name).is_none() {
        console.say(&"Student not found.".red().to_string());
        return Ok(Ok(()));
    }

    let Ok(subject) = ask_subject(console)? else {
        return Ok(Err(Aborted));
    };
    let Ok(mark) = ask_mark(console, "Enter new mark: ", subject)? else {
        return Ok(Err(Aborted));
    };

    match store.update_subject(&name, subject, mark) {
        Ok(status) => report_saved(console, status, "Student updated successfully."),
        Err(e) => console.say(&format!("Error updating student: {}", e).red().to_string()),
    }
    Ok(Ok(()))
}

fn delete_student(store: &mut RecordStore, console: &mut dyn Console) -> io::Result<Step<()>> {
    let Ok(name) = ask_name(console, "Enter student name to delete: ")? else {
        return Ok(Err(Aborted));
    };

    match store.delete(&name) {
        Ok(status) => report_saved(console, status, "Student deleted successfully."),
        Err(markbook::MarkbookError::NotFound(_)) => {
            console.say(&"Student not found.".red().to_string())
        }
        Err(e) => console.say(&format!("Error deleting student: {}", e).red().to_string()),
    }
    Ok(Ok(()))
}

fn show_analytics(store: &RecordStore, console: &mut dyn Console) {
    match store.analytics() {
        Some(report) => {
            for line in report_lines(&report) {
                console.say(&line);
            }
        }
        None => console.say(&NO_DATA.yellow().to_string()),
    }
}

fn show_menu(console: &mut dyn Console) {
    console.say("");
    console.say(&"Menu:".cyan().bold().to_string());
    for choice in MenuChoice::ALL {
        console.say(&format!("{}. {}", choice.key(), choice.label()));
    }
}

/// Run the menu loop until the user exits or input ends.
pub fn run_session(store: &mut RecordStore, console: &mut dyn Console) -> io::Result<()> {
    loop {
        show_menu(console);

        let answer = match console.prompt("Enter choice: ")? {
            Prompted::Line(line) => line,
            Prompted::Interrupted | Prompted::Closed => return Ok(()),
        };

        let choice = match answer.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(_) => {
                console.say(&"Invalid choice.".red().to_string());
                continue;
            }
        };

        let step = match choice {
            MenuChoice::Add => add_student(store, console)?,
            MenuChoice::Update => update_student(store, console)?,
            MenuChoice::Delete => delete_student(store, console)?,
            MenuChoice::Analytics => {
                show_analytics(store, console);
                Ok(())
            }
            MenuChoice::Exit => return Ok(()),
        };

        if step.is_err() {
            console.say(&"Cancelled.".yellow().to_string());
        }
    }
}

pub fn run(file: PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(&file, verbose)?;
    let mut terminal = Terminal::new()?;

    run_session(&mut store, &mut terminal)?;
    Ok(())
}
