mod common;

use anyhow::Result;
use biblio::application::LibraryService;
use common::{StandardLibrary, run_script};

#[test]
fn test_full_session() -> Result<()> {
    let mut service = LibraryService::new();

    let output = run_script(
        &mut service,
        &[
            "1", "1", "A", "X", // add book
            "2", "100", "Bob", "Regular", // add member
            "3", "100", "1", // issue
            "5", "20", // advance
            "4", "100", "1", // return
            "6", // report
            "7", // exit
        ],
        "table",
    )?;

    assert!(output.contains("===== Library Menu ====="));
    assert!(output.contains("Book issued successfully."));
    assert!(output.contains("Advanced to day 20"));
    assert!(output.contains("Book returned by Member ID 100. Fine: 6"));
    assert!(output.contains("Current Day: 20"));
    assert!(output.contains("ID: 1, Title: A, Available: Yes"));
    assert!(output.contains("ID: 100, Name: Bob, Books Issued: 0"));
    assert!(output.contains("Member ID: 100, Book ID: 1, Action: Return, Fine Collected: 6"));
    assert!(output.trim_end().ends_with("Exiting program."));

    assert_eq!(service.member(100).unwrap().info, "Regular");
    assert_eq!(service.history().count(), 2);

    Ok(())
}

#[test]
fn test_errors_are_printed_and_loop_continues() -> Result<()> {
    let mut service = StandardLibrary::create()?;

    let output = run_script(
        &mut service,
        &[
            "3", "999", "1", // unknown member
            "3", "100", "42", // unknown book
            "4", "100", "1", // never issued
            "5", "-2", // backwards clock
            "9", // not a menu entry
            "3", "100", "1", // finally succeeds
            "7",
        ],
        "table",
    )?;

    assert!(output.contains("Error: Invalid member ID: 999"));
    assert!(output.contains("Error: Book not found: 42"));
    assert!(output.contains("Error: Book 1 was not issued to member 100"));
    assert!(output.contains("Error: Cannot move the clock backwards by -2 days"));
    assert!(output.contains("Invalid choice. Try again."));
    assert!(output.contains("Book issued successfully."));
    assert_eq!(service.history().count(), 1);
    assert_eq!(service.current_day(), 0);

    Ok(())
}

#[test]
fn test_on_time_return_prints_no_fine() -> Result<()> {
    let mut service = StandardLibrary::create()?;

    let output = run_script(&mut service, &["3", "100", "2", "4", "100", "2", "7"], "table")?;

    assert!(output.contains("Book returned by Member ID 100.\n"));
    assert!(!output.contains("Fine:"));

    Ok(())
}

#[test]
fn test_non_numeric_choice_reprompts() -> Result<()> {
    let mut service = LibraryService::new();

    let output = run_script(&mut service, &["six", "7"], "table")?;

    assert!(output.contains("Please enter a whole number."));
    assert!(output.contains("Exiting program."));

    Ok(())
}

#[test]
fn test_end_of_input_stops_quietly() -> Result<()> {
    let mut service = LibraryService::new();

    // Input ends halfway through adding a book
    let output = run_script(&mut service, &["1", "7"], "table")?;

    assert!(!output.contains("Exiting program."));
    assert!(service.books().is_empty());

    Ok(())
}

#[test]
fn test_duplicate_book_reported() -> Result<()> {
    let mut service = StandardLibrary::create()?;

    let output = run_script(&mut service, &["1", "1", "Copy", "Nobody", "7"], "table")?;

    assert!(output.contains("Error: Book already exists: 1"));
    assert_eq!(service.book(1).unwrap().title, "A");

    Ok(())
}

#[test]
fn test_json_report() -> Result<()> {
    let mut service = StandardLibrary::create()?;

    let output = run_script(&mut service, &["3", "100", "1", "6", "7"], "json")?;

    let start = output.find('{').unwrap();
    let end = output.rfind('}').unwrap();
    let report: serde_json::Value = serde_json::from_str(&output[start..=end])?;

    assert_eq!(report["current_day"], 0);
    assert_eq!(report["books"].as_array().unwrap().len(), 5);
    assert_eq!(report["books"][0]["available"], false);
    assert_eq!(report["history"][0]["action"], "Issue");
    assert_eq!(report["members"][0]["books_issued"], 1);

    Ok(())
}

#[test]
fn test_csv_report() -> Result<()> {
    let mut service = StandardLibrary::create()?;

    let output = run_script(&mut service, &["3", "101", "3", "6", "7"], "csv")?;

    assert!(output.contains("id,title,author,available\n"));
    assert!(output.contains("3,Emma,Jane Austen,false\n"));
    assert!(output.contains("id,name,info,books_issued\n"));
    assert!(output.contains("101,Alice,Student,1\n"));
    assert!(output.contains("member_id,book_id,action,fine\n101,3,Issue,0\n"));

    Ok(())
}

#[test]
fn test_huge_day_advance_is_reported() -> Result<()> {
    let mut service = LibraryService::new();
    let max = i64::MAX.to_string();

    let output = run_script(&mut service, &["5", max.as_str(), "5", "1", "7"], "table")?;

    assert!(output.contains(&format!("Advanced to day {}", max)));
    assert!(output.contains(&format!(
        "Error: Cannot advance the clock from day {} by 1 days",
        max
    )));
    assert_eq!(service.current_day(), i64::MAX);

    Ok(())
}
