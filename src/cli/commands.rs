//! Command definitions for the interactive shell
//!
//! Defines every command the shell understands, with its aliases and usage
//! line, and the tokenizer that splits an input line into command and
//! arguments.

/// A command that can be typed at the prompt
#[derive(Debug, Clone)]
pub struct Command {
    /// Command name (what user types)
    pub name: &'static str,
    /// Other accepted spellings
    pub aliases: &'static [&'static str],
    /// Usage line shown in help and on missing arguments
    pub usage: &'static str,
    /// Short description
    pub description: &'static str,
    /// Command action
    pub action: CommandAction,
}

/// Actions that commands can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Hello,
    Help,
    AddContact,
    ChangePhone,
    RemovePhone,
    ShowPhones,
    ShowAll,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    DeleteContact,
    Exit,
}

impl CommandAction {
    /// Whether the action can change stored contacts
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            Self::AddContact
                | Self::ChangePhone
                | Self::RemovePhone
                | Self::AddBirthday
                | Self::DeleteContact
        )
    }
}

/// All available commands
pub static COMMANDS: &[Command] = &[
    Command {
        name: "hello",
        aliases: &[],
        usage: "hello",
        description: "Greeting",
        action: CommandAction::Hello,
    },
    Command {
        name: "add",
        aliases: &[],
        usage: "add [name] [phone]",
        description: "Add/Update contact",
        action: CommandAction::AddContact,
    },
    Command {
        name: "change",
        aliases: &[],
        usage: "change [name] [old_phone] [new_phone]",
        description: "Change phone number",
        action: CommandAction::ChangePhone,
    },
    Command {
        name: "remove-phone",
        aliases: &[],
        usage: "remove-phone [name] [phone]",
        description: "Remove a phone number",
        action: CommandAction::RemovePhone,
    },
    Command {
        name: "phone",
        aliases: &[],
        usage: "phone [name]",
        description: "Show contact's phones",
        action: CommandAction::ShowPhones,
    },
    Command {
        name: "all",
        aliases: &[],
        usage: "all",
        description: "Show all contacts",
        action: CommandAction::ShowAll,
    },
    Command {
        name: "add-birthday",
        aliases: &[],
        usage: "add-birthday [name] [DD-MM-YYYY]",
        description: "Add or change birthday",
        action: CommandAction::AddBirthday,
    },
    Command {
        name: "show-birthday",
        aliases: &[],
        usage: "show-birthday [name]",
        description: "Show contact's birthday",
        action: CommandAction::ShowBirthday,
    },
    Command {
        name: "birthdays",
        aliases: &[],
        usage: "birthdays",
        description: "Show upcoming birthdays",
        action: CommandAction::Birthdays,
    },
    Command {
        name: "del",
        aliases: &[],
        usage: "del [name]",
        description: "Delete contact",
        action: CommandAction::DeleteContact,
    },
    Command {
        name: "help",
        aliases: &["?", "command"],
        usage: "help",
        description: "Show this list",
        action: CommandAction::Help,
    },
    Command {
        name: "exit",
        aliases: &["close"],
        usage: "exit",
        description: "Save and exit",
        action: CommandAction::Exit,
    },
];

/// Find a command by name or alias (case-insensitive)
pub fn find_command(name: &str) -> Option<&'static Command> {
    let name = name.to_lowercase();
    COMMANDS
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name.as_str()))
}

/// Split a line into command word and arguments
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?;
    Some((command, words.collect()))
}

/// Format the command list for `help`
pub fn format_help() -> String {
    let width = COMMANDS.iter().map(|c| c.usage.len()).max().unwrap_or(0);
    let separator = "-".repeat(width + 25);

    let mut output = String::new();
    output.push_str(&separator);
    output.push('\n');
    for cmd in COMMANDS {
        output.push_str(&format!(
            "{:<width$} - {}\n",
            cmd.usage,
            cmd.description,
            width = width
        ));
    }
    output.push_str(&separator);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_name_and_alias() {
        assert_eq!(find_command("add").unwrap().action, CommandAction::AddContact);
        assert_eq!(find_command("?").unwrap().action, CommandAction::Help);
        assert_eq!(find_command("command").unwrap().action, CommandAction::Help);
        assert_eq!(find_command("close").unwrap().action, CommandAction::Exit);
        assert!(find_command("frobnicate").is_none());
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find_command("ADD").unwrap().action, CommandAction::AddContact);
        assert_eq!(
            find_command("Show-Birthday").unwrap().action,
            CommandAction::ShowBirthday
        );
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(
            parse_input("  add John   1234567890 "),
            Some(("add", vec!["John", "1234567890"]))
        );
        assert_eq!(parse_input("all"), Some(("all", vec![])));
        assert_eq!(parse_input("   "), None);
    }

    #[test]
    fn test_command_names_unique() {
        let mut names: Vec<&str> = COMMANDS
            .iter()
            .flat_map(|c| std::iter::once(c.name).chain(c.aliases.iter().copied()))
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = format_help();
        for cmd in COMMANDS {
            assert!(help.contains(cmd.usage), "missing {}", cmd.name);
        }
    }

    #[test]
    fn test_mutating_actions() {
        assert!(CommandAction::AddContact.is_mutating());
        assert!(CommandAction::DeleteContact.is_mutating());
        assert!(!CommandAction::ShowAll.is_mutating());
        assert!(!CommandAction::Birthdays.is_mutating());
    }
}
