//! Interactive command shell.
//!
//! Commands are single characters read one line at a time, matched
//! without regard to case. Errors from any command are printed and
//! the loop resumes; only `X` or the end of input ends the session.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::{AppError, AppResult};
use crate::models::{validate_name_part, Operator};
use crate::snapshot::BookStore;

mod books;
mod files;
mod loans;
mod patrons;

/// One console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListCommands,
    SearchByAuthor,
    SearchByTitle,
    AddBook,
    RemoveBook,
    CheckOut,
    Return,
    SortBooks,
    ListBooks,
    PatronCheckouts,
    AddPatron,
    ListPatrons,
    RemovePatron,
    LoadFile,
    SaveFile,
    Exit,
}

impl Command {
    /// Parse a single command letter, ignoring case. Anything other
    /// than exactly one character is rejected.
    pub fn parse(input: &str) -> AppResult<Command> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter,
            _ => {
                return Err(AppError::Validation(
                    "Commands are a single letter; enter L to list them".to_string(),
                ))
            }
        };
        match letter.to_ascii_lowercase() {
            'l' => Ok(Command::ListCommands),
            'a' => Ok(Command::SearchByAuthor),
            'b' => Ok(Command::SearchByTitle),
            'i' => Ok(Command::AddBook),
            'm' => Ok(Command::RemoveBook),
            'c' => Ok(Command::CheckOut),
            'u' => Ok(Command::Return),
            's' => Ok(Command::SortBooks),
            'v' => Ok(Command::ListBooks),
            'p' => Ok(Command::PatronCheckouts),
            'n' => Ok(Command::AddPatron),
            't' => Ok(Command::ListPatrons),
            'd' => Ok(Command::RemovePatron),
            'r' => Ok(Command::LoadFile),
            'w' => Ok(Command::SaveFile),
            'x' => Ok(Command::Exit),
            _ => Err(AppError::Validation(format!(
                "Unknown command '{}'",
                letter
            ))),
        }
    }
}

/// Interactive session over any pair of input/output streams.
pub struct Shell<'a, R, W> {
    input: R,
    output: W,
    catalog: &'a mut Catalog,
    store: &'a dyn BookStore,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(input: R, output: W, catalog: &'a mut Catalog, store: &'a dyn BookStore) -> Self {
        Self {
            input,
            output,
            catalog,
            store,
        }
    }

    /// Prompt the operator's name, retrying until both parts are
    /// single words.
    pub fn sign_in(&mut self) -> AppResult<Operator> {
        loop {
            let first_name = self.require_line("Enter your first name: ")?;
            let last_name = self.require_line("Enter your last name: ")?;
            if validate_name_part(&first_name).is_err() || validate_name_part(&last_name).is_err()
            {
                writeln!(
                    self.output,
                    "Names are single words with no spaces; try again."
                )?;
                continue;
            }
            return Ok(Operator::new(first_name, last_name));
        }
    }

    /// Load the book file when one exists. Problems are reported and
    /// the session goes on with whatever is already in memory.
    pub fn load_if_present(&mut self, path: &str) -> AppResult<()> {
        if !Path::new(path).exists() {
            return Ok(());
        }
        if let Err(e) = self.load_file() {
            writeln!(self.output, "{}", e)?;
        }
        Ok(())
    }

    /// Run the command loop until exit or end of input.
    pub fn run(&mut self) -> AppResult<()> {
        self.print_commands()?;
        loop {
            let line = match self.prompt("\nEnter a command (L to list commands): ")? {
                Some(line) => line,
                None => break,
            };
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };
            if command == Command::Exit {
                writeln!(self.output, "Goodbye.")?;
                break;
            }
            if let Err(e) = self.dispatch(command) {
                tracing::warn!("Command {:?} failed: {}", command, e);
                writeln!(self.output, "{}", e)?;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> AppResult<()> {
        match command {
            Command::ListCommands => self.print_commands(),
            Command::SearchByAuthor => self.search_by_author(),
            Command::SearchByTitle => self.search_by_title(),
            Command::AddBook => self.add_book(),
            Command::RemoveBook => self.remove_book(),
            Command::CheckOut => self.check_out(),
            Command::Return => self.return_book(),
            Command::SortBooks => self.sort_books(),
            Command::ListBooks => self.list_books(),
            Command::PatronCheckouts => self.patron_checkouts(),
            Command::AddPatron => self.add_patron(),
            Command::ListPatrons => self.list_patrons(),
            Command::RemovePatron => self.remove_patron(),
            Command::LoadFile => self.load_file(),
            Command::SaveFile => self.save_file(),
            Command::Exit => Ok(()),
        }
    }

    fn print_commands(&mut self) -> AppResult<()> {
        writeln!(self.output, "Commands:")?;
        writeln!(self.output, "  L - List available commands")?;
        writeln!(self.output, "  V - View all books")?;
        writeln!(self.output, "  I - Add a book")?;
        writeln!(self.output, "  M - Remove a book")?;
        writeln!(self.output, "  B - Search for a book by title")?;
        writeln!(self.output, "  A - Search for books by author")?;
        writeln!(self.output, "  S - Sort and view books")?;
        writeln!(self.output, "  C - Check out a book")?;
        writeln!(self.output, "  U - Return a book")?;
        writeln!(self.output, "  N - Add a patron")?;
        writeln!(self.output, "  D - Remove a patron")?;
        writeln!(self.output, "  T - View all patrons")?;
        writeln!(self.output, "  P - View a patron's checked out books")?;
        writeln!(self.output, "  R - Load books from the book file")?;
        writeln!(self.output, "  W - Write books to the save file")?;
        writeln!(self.output, "  X - Exit")?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn require_line(&mut self, message: &str) -> AppResult<String> {
        self.prompt(message)?
            .ok_or_else(|| AppError::Io(std::io::ErrorKind::UnexpectedEof.into()))
    }
}
