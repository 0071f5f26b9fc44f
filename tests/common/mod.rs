// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use biblio::application::LibraryService;
use biblio::cli::{LineConsole, run_menu};
use biblio::domain::{Book, Member};
use std::io::Cursor;

/// Test fixture: a small standard library
pub struct StandardLibrary;

impl StandardLibrary {
    /// Books 1-5 and members 100 (Bob) and 101 (Alice), all on day 0
    pub fn create() -> Result<LibraryService> {
        let mut service = LibraryService::new();
        for (id, title, author) in [
            (1, "A", "X"),
            (2, "Dune", "Frank Herbert"),
            (3, "Emma", "Jane Austen"),
            (4, "Ulysses", "James Joyce"),
            (5, "Beloved", "Toni Morrison"),
        ] {
            service.add_book(Book::new(id, title, author))?;
        }
        service.add_member(Member::new(100, "Bob"))?;
        service.add_member(Member::new(101, "Alice").with_info("Student"))?;
        Ok(service)
    }
}

/// Drive the menu with scripted input lines and return everything it printed
pub fn run_script(service: &mut LibraryService, lines: &[&str], format: &str) -> Result<String> {
    let mut input = lines.join("\n");
    input.push('\n');

    let mut console = LineConsole::new(Cursor::new(input.into_bytes()), Vec::new());
    run_menu(service, &mut console, format)?;
    Ok(String::from_utf8(console.into_output())?)
}
