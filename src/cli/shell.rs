//! Interactive shell
//!
//! Reads one command per line, runs it against the contact service and
//! prints a single reply. Errors are turned into a message line here and
//! never end the session. Every way out of the session saves the address
//! book first.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::cli::commands::{find_command, format_help, parse_input, Command, CommandAction};
use crate::config::settings::Settings;
use crate::display::{format_birthday, format_contact_list, format_phones, format_upcoming_birthdays};
use crate::error::{AddressBookError, AddressBookResult};
use crate::services::{AddOutcome, BirthdayOutcome, ContactService};
use crate::storage::Storage;

const PROMPT: &str = "Enter a command: ";
const GREETING: &str = "Welcome to the assistant bot!";
const FAREWELL: &str = "Good bye!";

/// Whether the shell keeps reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Line-based command interpreter
pub struct Shell<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
    today: Option<NaiveDate>,
}

impl<'a> Shell<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            today: None,
        }
    }

    /// Pin the reference date used by `birthdays`
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Run the read-eval-print loop until `exit` or end of input
    ///
    /// The address book is saved however the loop ends, including when the
    /// input stream fails. Bytes that are not UTF-8 are replaced rather than
    /// rejected.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, output: &mut W) -> AddressBookResult<()> {
        let session = self.read_loop(&mut input, output);
        let farewell = finish_session(self.storage)?;
        session?;
        writeln!(output, "{}", farewell)?;
        Ok(())
    }

    fn read_loop<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> AddressBookResult<()> {
        writeln!(output, "{}", GREETING)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    writeln!(output)?;
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "failed to read shell input");
                    writeln!(output, "Error: failed to read input: {}", e)?;
                    return Ok(());
                }
            }

            let line = String::from_utf8_lossy(&buf);
            let (reply, flow) = self.handle_line(&line);
            if let Some(reply) = reply {
                writeln!(output, "{}", reply)?;
            }
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Run a single input line
    ///
    /// Returns the reply to print (nothing for a blank line) and whether
    /// the session continues.
    pub fn handle_line(&self, line: &str) -> (Option<String>, Flow) {
        let Some((word, args)) = parse_input(line) else {
            return (None, Flow::Continue);
        };

        let Some(command) = find_command(word) else {
            return (Some("Invalid command.".to_string()), Flow::Continue);
        };

        if command.action == CommandAction::Exit {
            return (None, Flow::Exit);
        }

        debug!(command = command.name, args = args.len(), "running shell command");

        let reply = match self.execute(command, &args) {
            Ok(message) => match self.autosave(command.action) {
                Ok(()) => message,
                Err(e) => format!("{}\n{}", message, describe_error(&e)),
            },
            Err(e) => describe_error(&e),
        };

        (Some(reply), Flow::Continue)
    }

    fn execute(&self, command: &Command, args: &[&str]) -> AddressBookResult<String> {
        let service = ContactService::new(self.storage);

        match command.action {
            CommandAction::Hello => Ok("How can I help you?".to_string()),
            CommandAction::Help => Ok(format_help()),
            CommandAction::AddContact => {
                let [name, phone] = require_args::<2>(command, args)?;
                Ok(match service.add_contact(name, phone)? {
                    AddOutcome::Created => "Contact added.".to_string(),
                    AddOutcome::Updated => "Contact updated.".to_string(),
                })
            }
            CommandAction::ChangePhone => {
                let [name, old, new] = require_args::<3>(command, args)?;
                service.change_phone(name, old, new)?;
                Ok("Contact phone number updated.".to_string())
            }
            CommandAction::RemovePhone => {
                let [name, phone] = require_args::<2>(command, args)?;
                let removed = service.remove_phone(name, phone)?;
                Ok(format!("Phone {} removed.", removed))
            }
            CommandAction::ShowPhones => {
                let [name] = require_args::<1>(command, args)?;
                Ok(format_phones(&service.phones(name)?))
            }
            CommandAction::ShowAll => Ok(format_contact_list(&service.list()?)),
            CommandAction::AddBirthday => {
                let [name, date] = require_args::<2>(command, args)?;
                Ok(match service.set_birthday(name, date)? {
                    BirthdayOutcome::Added => "Contact's birthday added".to_string(),
                    BirthdayOutcome::Updated => "Contact's birthday updated".to_string(),
                })
            }
            CommandAction::ShowBirthday => {
                let [name] = require_args::<1>(command, args)?;
                let birthday = service.birthday(name)?;
                Ok(format_birthday(name, birthday.as_ref()))
            }
            CommandAction::Birthdays => {
                let report =
                    service.upcoming_birthdays(self.today(), self.settings.birthday_window_days)?;
                Ok(format_upcoming_birthdays(&report))
            }
            CommandAction::DeleteContact => {
                let [name] = require_args::<1>(command, args)?;
                service.delete(name)?;
                Ok(format!("Contact '{}' has been deleted", name))
            }
            CommandAction::Exit => Ok(String::new()),
        }
    }

    fn autosave(&self, action: CommandAction) -> AddressBookResult<()> {
        if self.settings.autosave && action.is_mutating() {
            self.storage.save_all()?;
        }
        Ok(())
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Take exactly the leading `N` arguments a command needs
///
/// Extra arguments are ignored.
fn require_args<'s, const N: usize>(
    command: &Command,
    args: &[&'s str],
) -> AddressBookResult<[&'s str; N]> {
    args.get(..N)
        .and_then(|head| <[&str; N]>::try_from(head).ok())
        .ok_or_else(|| AddressBookError::Usage(command.usage.to_string()))
}

/// Save the address book at the end of a session and return the farewell
///
/// Shared by normal exit, end of input and the Ctrl-C handler in `main`.
pub fn finish_session(storage: &Storage) -> AddressBookResult<&'static str> {
    storage.save_all()?;
    Ok(FAREWELL)
}

/// Turn an error into the line shown to the user
fn describe_error(err: &AddressBookError) -> String {
    match err {
        AddressBookError::Validation(e) => e.to_string(),
        AddressBookError::NotFound { .. } | AddressBookError::Usage(_) => err.to_string(),
        other => {
            warn!(error = %other, "shell command failed");
            format!("Error: {}", other)
        }
    }
}
