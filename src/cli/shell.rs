//! Interactive menu loop
//!
//! Reads a menu option, then the word or prefix it needs, and reports the
//! result. Invalid input and store failures are printed and the loop goes on;
//! only terminal I/O errors end it. End of input behaves like `0 - exit`.

use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::application::services::{DeleteOutcome, Dictionary, InsertOutcome};
use crate::cli::input::{validate, InputKind};
use crate::cli::output;
use crate::cli::{CliError, CliResult};

/// Entries of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Insert,
    Delete,
    Search,
    List,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 5] = [
        MenuOption::Insert,
        MenuOption::Delete,
        MenuOption::Search,
        MenuOption::List,
        MenuOption::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuOption::Insert => 1,
            MenuOption::Delete => 2,
            MenuOption::Search => 3,
            MenuOption::List => 4,
            MenuOption::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Insert => "insert word",
            MenuOption::Delete => "delete word",
            MenuOption::Search => "search words by prefix",
            MenuOption::List => "list words in order",
            MenuOption::Exit => "exit",
        }
    }

    /// Parse a menu number; anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let number: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|option| option.number() == number)
    }
}

pub struct Shell<'a, R, W> {
    dict: &'a mut Dictionary,
    input: R,
    output: W,
    prompt: String,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(dict: &'a mut Dictionary, input: R, output: W) -> Self {
        Self {
            dict,
            input,
            output,
            prompt: "> ".to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Run until the user exits or input ends.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            self.print_menu()?;
            output::prompt(&mut self.output, &format!("option{}", self.prompt))?;

            let Some(line) = self.read_line()? else {
                debug!("end of input");
                output::info(&mut self.output, "")?;
                return self.farewell();
            };

            match MenuOption::parse(&line) {
                Some(MenuOption::Exit) => return self.farewell(),
                Some(option) => self.dispatch(option)?,
                None => output::failure(
                    &mut self.output,
                    "invalid option, pick one of the menu entries",
                )?,
            }
        }
    }

    fn dispatch(&mut self, option: MenuOption) -> CliResult<()> {
        debug!(?option, "menu selection");
        let result = match option {
            MenuOption::Insert => self.insert(),
            MenuOption::Delete => self.delete(),
            MenuOption::Search => self.search(),
            MenuOption::List => self.list(),
            MenuOption::Exit => Ok(()),
        };

        match result {
            Err(CliError::Io(e)) => Err(CliError::Io(e)),
            Err(e) => {
                output::failure(&mut self.output, &e.report())?;
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    fn insert(&mut self) -> CliResult<()> {
        let raw = self.ask(InputKind::Word)?;
        let word = validate(&raw, InputKind::Word)?;
        match self.dict.insert(word)? {
            InsertOutcome::Inserted => {
                output::success(&mut self.output, &format!("inserted '{word}'"))?
            }
            InsertOutcome::Duplicate => output::warning(
                &mut self.output,
                &format!("'{word}' is already in the dictionary"),
            )?,
        }
        Ok(())
    }

    fn delete(&mut self) -> CliResult<()> {
        let raw = self.ask(InputKind::Word)?;
        let word = validate(&raw, InputKind::Word)?;
        match self.dict.delete(word)? {
            DeleteOutcome::Deleted => {
                output::success(&mut self.output, &format!("removed '{word}'"))?
            }
            DeleteOutcome::NotFound => {
                output::warning(&mut self.output, &format!("'{word}' not found"))?
            }
        }
        Ok(())
    }

    fn search(&mut self) -> CliResult<()> {
        let raw = self.ask(InputKind::Prefix)?;
        let prefix = validate(&raw, InputKind::Prefix)?;
        let matches = self.dict.complete(prefix);
        output::word_list(
            &mut self.output,
            &format!("words with prefix '{}'", prefix.to_lowercase()),
            &matches,
        )?;
        Ok(())
    }

    fn list(&mut self) -> CliResult<()> {
        let words = self.dict.words();
        output::word_list(&mut self.output, "words in order", &words)?;
        Ok(())
    }

    fn print_menu(&mut self) -> CliResult<()> {
        output::header(&mut self.output, "--- wordtree ---")?;
        for option in MenuOption::ALL {
            output::info(
                &mut self.output,
                &format!("{} - {}", option.number(), option.label()),
            )?;
        }
        Ok(())
    }

    /// Prompt for a word or prefix; end of input yields an empty answer.
    fn ask(&mut self, kind: InputKind) -> CliResult<String> {
        output::prompt(&mut self.output, &format!("{kind}{}", self.prompt))?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn read_line(&mut self) -> CliResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn farewell(&mut self) -> CliResult<()> {
        output::info(&mut self.output, "bye")?;
        Ok(())
    }
}
