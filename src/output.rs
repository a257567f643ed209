use std::io::{self, Write};

use serde::Serialize;

use crate::app::catalog::CatalogState;
use crate::cli::CliArgs;
use crate::model::Dataset;
use crate::pagination::page_count;
use crate::ui::projection::{BookDetail, PreviewItem};

const NO_RESULTS: &str = "No results found.";

/// Prints catalog pages and book details for non-interactive use.
pub struct OutputFormatter {
    /// `--terse`: matching ids only.
    pub terse: bool,
    /// `--json`: one JSON document per invocation.
    pub json: bool,
    /// Width of the TITLE column.
    pub title_width: usize,
    /// Width of the AUTHOR column.
    pub author_width: usize,
}

/// JSON shape of a printed page.
#[derive(Serialize)]
struct PageReport<'a> {
    page: usize,
    page_size: usize,
    pages: usize,
    total: usize,
    remaining: usize,
    items: &'a [PreviewItem],
}

impl OutputFormatter {
    /// Build an `OutputFormatter` from parsed CLI arguments.
    pub fn from_cli(args: &CliArgs) -> Self {
        OutputFormatter {
            terse: args.terse,
            json: args.json,
            title_width: 40,
            author_width: 24,
        }
    }

    /// Print the current page of `catalog` in the configured format.
    pub fn print_catalog<W: Write>(
        &self,
        out: &mut W,
        catalog: &CatalogState,
        dataset: &Dataset,
    ) -> io::Result<()> {
        if self.terse {
            return self.print_terse(out, catalog);
        }

        let items: Vec<PreviewItem> = catalog
            .visible_page()
            .iter()
            .map(|book| PreviewItem::from_book(book, dataset))
            .collect();

        if self.json {
            let report = PageReport {
                page: catalog.page(),
                page_size: catalog.page_size(),
                pages: page_count(catalog.matches().len(), catalog.page_size()),
                total: catalog.matches().len(),
                remaining: catalog.remaining(),
                items: &items,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
            return Ok(());
        }

        if !catalog.has_results() {
            writeln!(out, "{}", NO_RESULTS)?;
            return Ok(());
        }

        self.print_header(out, &items)?;
        let id_width = id_column_width(&items);
        for (item, book) in items.iter().zip(catalog.visible_page()) {
            writeln!(
                out,
                "{:<id_width$}  {}  {}  {:>4}",
                item.id,
                fit_str(&item.title, self.title_width),
                fit_str(&item.author, self.author_width),
                book.published_year(),
                id_width = id_width,
            )?;
        }
        writeln!(out)?;
        writeln!(out, "Show more ({})", catalog.remaining())
    }

    /// Print the column header line.
    fn print_header<W: Write>(&self, out: &mut W, items: &[PreviewItem]) -> io::Result<()> {
        writeln!(
            out,
            "{:<id_width$}  {}  {}  {:>4}",
            "ID",
            fit_str("TITLE", self.title_width),
            fit_str("AUTHOR", self.author_width),
            "YEAR",
            id_width = id_column_width(items),
        )
    }

    /// Print every matching id, one per line (`--terse`).
    pub fn print_terse<W: Write>(&self, out: &mut W, catalog: &CatalogState) -> io::Result<()> {
        for book in catalog.matches() {
            writeln!(out, "{}", book.id)?;
        }
        Ok(())
    }

    /// Print the detail view of a single book (`--show`).
    pub fn print_detail<W: Write>(&self, out: &mut W, detail: &BookDetail) -> io::Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut *out, detail)?;
            return writeln!(out);
        }

        writeln!(out, "{}", detail.title)?;
        writeln!(out, "{}", detail.subtitle)?;
        if !detail.genres.is_empty() {
            writeln!(out, "{}", detail.genres.join(", "))?;
        }
        writeln!(out)?;
        writeln!(out, "{}", detail.description)?;
        writeln!(out)?;
        writeln!(out, "cover: {}", detail.image)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Truncate or pad a string to exactly `width` characters.
fn fit_str(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        s.chars().take(width).collect()
    } else {
        format!("{:<width$}", s, width = width)
    }
}

fn id_column_width(items: &[PreviewItem]) -> usize {
    items
        .iter()
        .map(|i| i.id.chars().count())
        .max()
        .unwrap_or(0)
        .max(2)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterCriteria;
    use crate::model::test_support::forty_books;
    use crate::pagination::DEFAULT_PAGE_SIZE;

    fn formatter(terse: bool, json: bool) -> OutputFormatter {
        OutputFormatter {
            terse,
            json,
            title_width: 20,
            author_width: 12,
        }
    }

    fn render(fmt: &OutputFormatter, catalog: &CatalogState, dataset: &Dataset) -> String {
        let mut buf = Vec::new();
        fmt.print_catalog(&mut buf, catalog, dataset).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_fit_str_truncate() {
        assert_eq!(fit_str("Twenty Thousand Leagues", 9), "Twenty Th");
    }

    #[test]
    fn test_fit_str_pad() {
        assert_eq!(fit_str("Emma", 6), "Emma  ");
    }

    #[test]
    fn test_table_output() {
        let ds = forty_books();
        let catalog = CatalogState::new(&ds, DEFAULT_PAGE_SIZE);
        let text = render(&formatter(false, false), &catalog, &ds);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("ID"));
        assert!(lines[0].contains("TITLE"));
        assert!(lines[0].contains("AUTHOR"));
        assert!(lines[1].starts_with("b1 "));
        assert!(lines[1].contains("1990"));
        // header + 36 rows + blank + show more
        assert_eq!(lines.len(), 39);
        assert_eq!(lines.last(), Some(&"Show more (4)"));
    }

    #[test]
    fn test_second_page() {
        let ds = forty_books();
        let mut catalog = CatalogState::new(&ds, DEFAULT_PAGE_SIZE);
        catalog.advance();
        let text = render(&formatter(false, false), &catalog, &ds);
        assert_eq!(text.lines().filter(|l| l.starts_with('b')).count(), 4);
        assert!(text.ends_with("Show more (0)\n"));
    }

    #[test]
    fn test_no_results_output() {
        let ds = forty_books();
        let mut catalog = CatalogState::new(&ds, DEFAULT_PAGE_SIZE);
        catalog.apply_filter(&ds, &FilterCriteria::from_form("zzz-no-match", "any", "any"));
        assert_eq!(render(&formatter(false, false), &catalog, &ds), "No results found.\n");
    }

    #[test]
    fn test_terse_lists_all_matches() {
        let ds = forty_books();
        let mut catalog = CatalogState::new(&ds, DEFAULT_PAGE_SIZE);
        catalog.apply_filter(&ds, &FilterCriteria::from_form("", "A1", "any"));
        assert_eq!(render(&formatter(true, false), &catalog, &ds), "b7\nb23\n");
    }

    #[test]
    fn test_json_output() {
        let ds = forty_books();
        let catalog = CatalogState::new(&ds, 10);
        let text = render(&formatter(false, true), &catalog, &ds);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["page"], 1);
        assert_eq!(value["total"], 40);
        assert_eq!(value["pages"], 4);
        assert_eq!(value["remaining"], 30);
        assert_eq!(value["items"].as_array().unwrap().len(), 10);
        assert_eq!(value["items"][0]["author"], "Alan Turing");
    }

    #[test]
    fn test_detail_output() {
        let ds = forty_books();
        let catalog = CatalogState::new(&ds, DEFAULT_PAGE_SIZE);
        let detail = BookDetail::from_book(catalog.find("b7").unwrap(), &ds);
        let mut buf = Vec::new();
        formatter(false, false).print_detail(&mut buf, &detail).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Book Number 7");
        assert_eq!(lines[1], "Ada Lovelace (1990)");
        assert!(text.contains("cover: https://covers.example/b7.jpg"));
    }
}
