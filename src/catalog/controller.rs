use std::io::{BufRead, Write};
use std::str::FromStr;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::change_status_cmd::{ChangeStatusCommand, ChangeStatusCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

const MENU: &str = "
Available commands:
1. Add book
2. Remove book
3. Search books
4. List all books
5. Change book status
6. Exit";

enum Flow {
    Continue,
    Exit,
}

/// Interactive menu over a catalog. Reads one selection at a time from
/// `input` and writes prompts and results to `output`.
///
/// Missing books, bad statuses and unparsable numbers are reported and the
/// loop goes on; storage failures end [`CatalogController::run`] with the
/// error. End of input behaves like the exit selection.
pub struct CatalogController<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CatalogController<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub async fn run(&mut self, catalog: &mut dyn CatalogService) -> Result<(), CommandError> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter command number: ")? else {
                writeln!(self.output)?;
                return Ok(());
            };
            let res = match choice.as_str() {
                "1" => self.add_book(catalog).await,
                "2" => self.remove_book(catalog).await,
                "3" => self.search_books(catalog).await,
                "4" => self.list_books(catalog).await,
                "5" => self.change_status(catalog).await,
                "6" => {
                    writeln!(self.output, "Exiting.")?;
                    Ok(Flow::Exit)
                }
                _ => {
                    writeln!(self.output, "Invalid command. Please try again.")?;
                    Ok(Flow::Continue)
                }
            };
            match res {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(err) if err.recoverable() => writeln!(self.output, "Error: {}", err)?,
                Err(err) => return Err(err),
            }
        }
    }

    async fn add_book(&mut self, catalog: &mut dyn CatalogService) -> Result<Flow, CommandError> {
        let Some(title) = self.prompt("Enter title: ")? else { return Ok(Flow::Exit) };
        let Some(author) = self.prompt("Enter author: ")? else { return Ok(Flow::Exit) };
        let Some(year) = self.prompt("Enter publication year: ")? else { return Ok(Flow::Exit) };
        let year: i64 = parse_number(year.as_str(), "year")?;

        let res = AddBookCommand::new(catalog)
            .execute(AddBookCommandRequest::new(title.as_str(), author.as_str(), year)).await?;
        writeln!(self.output, "Book added successfully (ID: {}).", res.book.id)?;
        Ok(Flow::Continue)
    }

    async fn remove_book(&mut self, catalog: &mut dyn CatalogService) -> Result<Flow, CommandError> {
        let Some(id) = self.prompt("Enter the ID of the book to remove: ")? else { return Ok(Flow::Exit) };
        let id: u64 = parse_number(id.as_str(), "book ID")?;

        let _ = RemoveBookCommand::new(catalog).execute(RemoveBookCommandRequest::new(id)).await?;
        writeln!(self.output, "Book removed successfully.")?;
        Ok(Flow::Continue)
    }

    async fn search_books(&mut self, catalog: &dyn CatalogService) -> Result<Flow, CommandError> {
        let Some(query) = self.prompt("Enter title, author or year to search for: ")? else { return Ok(Flow::Exit) };

        let res = SearchBooksCommand::new(catalog).execute(SearchBooksCommandRequest::new(query.as_str())).await?;
        if res.books.is_empty() {
            writeln!(self.output, "No books found.")?;
        } else {
            writeln!(self.output, "Search results:")?;
            for book in res.books {
                writeln!(self.output, "{}", book)?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn list_books(&mut self, catalog: &dyn CatalogService) -> Result<Flow, CommandError> {
        let res = ListBooksCommand::new(catalog).execute(ListBooksCommandRequest::new()).await?;
        if res.books.is_empty() {
            writeln!(self.output, "The catalog is empty.")?;
        }
        for book in res.books {
            writeln!(self.output, "{}", book)?;
        }
        Ok(Flow::Continue)
    }

    async fn change_status(&mut self, catalog: &mut dyn CatalogService) -> Result<Flow, CommandError> {
        let Some(id) = self.prompt("Enter the ID of the book: ")? else { return Ok(Flow::Exit) };
        let id: u64 = parse_number(id.as_str(), "book ID")?;
        let Some(status) = self.prompt("Enter new status ('available' or 'lent'): ")? else { return Ok(Flow::Exit) };

        let _ = ChangeStatusCommand::new(catalog)
            .execute(ChangeStatusCommandRequest::new(id, status.as_str())).await?;
        writeln!(self.output, "Book status changed.")?;
        Ok(Flow::Continue)
    }

    // None once input is exhausted
    fn prompt(&mut self, label: &str) -> Result<Option<String>, CommandError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn parse_number<T: FromStr>(raw: &str, what: &str) -> Result<T, CommandError> {
    raw.parse::<T>()
        .map_err(|_| CommandError::validation(format!("'{}' is not a valid {}", raw, what).as_str()))
}
