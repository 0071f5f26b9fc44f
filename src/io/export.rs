use anyhow::Result;
use std::io::Write;

use crate::application::{LibraryReport, LibraryService};

/// Exporter for rendering library data as CSV or JSON
pub struct Exporter<'a> {
    service: &'a LibraryService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LibraryService) -> Self {
        Self { service }
    }

    /// Export the transaction history to CSV, most recent first
    pub fn export_history_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["member_id", "book_id", "action", "fine"])?;

        let mut count = 0;
        for tx in self.service.history() {
            csv_writer.write_record(&[
                tx.member_id.to_string(),
                tx.book_id.to_string(),
                tx.action.as_str().to_string(),
                tx.fine.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the catalog with availability to CSV
    pub fn export_books_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "title", "author", "available"])?;

        let mut count = 0;
        for book in self.service.books() {
            csv_writer.write_record(&[
                book.id.to_string(),
                book.title.clone(),
                book.author.clone(),
                book.available.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export members with their active loan counts to CSV
    pub fn export_members_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "name", "info", "books_issued"])?;

        let mut count = 0;
        for member in self.service.members() {
            csv_writer.write_record(&[
                member.id.to_string(),
                member.name.clone(),
                member.info.clone(),
                member.loan_count().to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the full report as a pretty-printed JSON document
    pub fn export_report_json<W: Write>(&self, mut writer: W) -> Result<LibraryReport> {
        let report = self.service.generate_report();

        let json = serde_json::to_string_pretty(&report)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(report)
    }
}
