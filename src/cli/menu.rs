use anyhow::Result;

use crate::application::{LibraryReport, LibraryService};
use crate::domain::{Book, Member};
use crate::io::Exporter;

use super::Console;

const MENU: &str = "\
===== Library Menu =====
1. Add Book
2. Add Member
3. Issue Book
4. Return Book
5. Advance Day
6. Generate Report
7. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    AddMember,
    IssueBook,
    ReturnBook,
    AdvanceDay,
    GenerateReport,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::AddBook),
            2 => Some(MenuChoice::AddMember),
            3 => Some(MenuChoice::IssueBook),
            4 => Some(MenuChoice::ReturnBook),
            5 => Some(MenuChoice::AdvanceDay),
            6 => Some(MenuChoice::GenerateReport),
            7 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the menu loop keeps going after an action.
enum Flow {
    Continue,
    Exit,
}

/// Run the numbered menu until the user exits or the input ends.
///
/// Library errors are printed and the loop carries on; only console I/O
/// failures are returned.
pub fn run_menu<C: Console>(
    service: &mut LibraryService,
    console: &mut C,
    format: &str,
) -> Result<()> {
    loop {
        console.print("")?;
        console.print(MENU)?;
        let Some(number) = console.read_integer("Enter your choice: ")? else {
            return Ok(());
        };

        let flow = match MenuChoice::from_number(number) {
            Some(MenuChoice::AddBook) => add_book(service, console)?,
            Some(MenuChoice::AddMember) => add_member(service, console)?,
            Some(MenuChoice::IssueBook) => issue_book(service, console)?,
            Some(MenuChoice::ReturnBook) => return_book(service, console)?,
            Some(MenuChoice::AdvanceDay) => advance_day(service, console)?,
            Some(MenuChoice::GenerateReport) => {
                print_report(service, console, format)?;
                Flow::Continue
            }
            Some(MenuChoice::Exit) => {
                console.print("Exiting program.")?;
                Flow::Exit
            }
            None => {
                console.print("Invalid choice. Try again.")?;
                Flow::Continue
            }
        };

        if let Flow::Exit = flow {
            return Ok(());
        }
    }
}

fn add_book<C: Console>(service: &mut LibraryService, console: &mut C) -> Result<Flow> {
    let Some(id) = console.read_integer("Enter Book ID: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(title) = console.read_line("Enter Title: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(author) = console.read_line("Enter Author: ")? else {
        return Ok(Flow::Exit);
    };

    match service.add_book(Book::new(id, title, author)) {
        Ok(()) => console.print(&format!("Added book: {}", id))?,
        Err(e) => console.print(&format!("Error: {}", e))?,
    }
    Ok(Flow::Continue)
}

fn add_member<C: Console>(service: &mut LibraryService, console: &mut C) -> Result<Flow> {
    let Some(id) = console.read_integer("Enter Member ID: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(name) = console.read_line("Enter Name: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(info) = console.read_line("Enter Additional Info: ")? else {
        return Ok(Flow::Exit);
    };

    match service.add_member(Member::new(id, name).with_info(info)) {
        Ok(()) => console.print(&format!("Added member: {}", id))?,
        Err(e) => console.print(&format!("Error: {}", e))?,
    }
    Ok(Flow::Continue)
}

fn issue_book<C: Console>(service: &mut LibraryService, console: &mut C) -> Result<Flow> {
    let Some((member_id, book_id)) = read_member_and_book(console)? else {
        return Ok(Flow::Exit);
    };

    match service.issue_book(member_id, book_id) {
        Ok(_) => console.print("Book issued successfully.")?,
        Err(e) => console.print(&format!("Error: {}", e))?,
    }
    Ok(Flow::Continue)
}

fn return_book<C: Console>(service: &mut LibraryService, console: &mut C) -> Result<Flow> {
    let Some((member_id, book_id)) = read_member_and_book(console)? else {
        return Ok(Flow::Exit);
    };

    match service.return_book(member_id, book_id) {
        Ok(result) => {
            let mut message = format!("Book returned by Member ID {}.", result.member_id);
            if result.fine > 0 {
                message.push_str(&format!(" Fine: {}", result.fine));
            }
            console.print(&message)?;
        }
        Err(e) => console.print(&format!("Error: {}", e))?,
    }
    Ok(Flow::Continue)
}

fn advance_day<C: Console>(service: &mut LibraryService, console: &mut C) -> Result<Flow> {
    let Some(days) = console.read_integer("Enter day advancement: ")? else {
        return Ok(Flow::Exit);
    };

    match service.advance_day(days) {
        Ok(day) => console.print(&format!("Advanced to day {}", day))?,
        Err(e) => console.print(&format!("Error: {}", e))?,
    }
    Ok(Flow::Continue)
}

fn read_member_and_book<C: Console>(console: &mut C) -> Result<Option<(i64, i64)>> {
    let Some(member_id) = console.read_integer("Enter Member ID: ")? else {
        return Ok(None);
    };
    let Some(book_id) = console.read_integer("Enter Book ID: ")? else {
        return Ok(None);
    };
    Ok(Some((member_id, book_id)))
}

/// Print the report in the requested format: table, json, csv.
pub fn print_report<C: Console>(
    service: &LibraryService,
    console: &mut C,
    format: &str,
) -> Result<()> {
    let exporter = Exporter::new(service);

    match format {
        "json" => {
            let mut buf = Vec::new();
            exporter.export_report_json(&mut buf)?;
            console.print(String::from_utf8_lossy(&buf).trim_end())?;
        }
        "csv" => {
            let mut buf = Vec::new();
            exporter.export_books_csv(&mut buf)?;
            buf.push(b'\n');
            exporter.export_members_csv(&mut buf)?;
            buf.push(b'\n');
            exporter.export_history_csv(&mut buf)?;
            console.print(String::from_utf8_lossy(&buf).trim_end())?;
        }
        _ => {
            for line in render_report_table(&service.generate_report()) {
                console.print(&line)?;
            }
        }
    }
    Ok(())
}

/// Plain-text report, one entry per line.
pub fn render_report_table(report: &LibraryReport) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "----- Library Report -----".to_string(),
        format!("Current Day: {}", report.current_day),
        String::new(),
        "Books in Library:".to_string(),
    ];

    for book in &report.books {
        lines.push(format!(
            "ID: {}, Title: {}, Available: {}",
            book.id,
            book.title,
            if book.available { "Yes" } else { "No" }
        ));
    }

    lines.push(String::new());
    lines.push("Members:".to_string());
    for member in &report.members {
        lines.push(format!(
            "ID: {}, Name: {}, Books Issued: {}",
            member.id, member.name, member.books_issued
        ));
    }

    lines.push(String::new());
    lines.push("Transaction History (Most recent first):".to_string());
    for tx in &report.history {
        let mut line = format!(
            "Member ID: {}, Book ID: {}, Action: {}",
            tx.member_id, tx.book_id, tx.action
        );
        if tx.collected_fine() {
            line.push_str(&format!(", Fine Collected: {}", tx.fine));
        }
        lines.push(line);
    }

    lines
}
