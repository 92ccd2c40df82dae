use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", bin_name = "rolodex", version)]
#[command(about = "Contacts, birthdays and notes from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the contacts, notes and config files
    #[arg(long, env = "ROLODEX_HOME", global = true, help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Parser for one line typed into the interactive session.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct ReplCli {
    #[command(subcommand)]
    pub command: ReplCommand,
}

#[derive(Subcommand, Debug)]
pub enum ReplCommand {
    #[command(flatten)]
    Run(Commands),

    /// End the session
    #[command(aliases = ["close", "quit"], display_order = 99)]
    Exit,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Contacts,
    Notes,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Contacts => "Contact Commands:",
            CommandGroup::Notes => "Note Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "delete" | "change" | "phone" | "remove-phone" | "add-birthday"
            | "show-birthday" | "all" | "search" | "birthdays" => Some(CommandGroup::Contacts),
            "add-note" | "update-note" | "replace-note" | "remove-note" | "note"
            | "find-notes" | "find-tag" | "notes" | "add-tag" | "remove-tag" => {
                Some(CommandGroup::Notes)
            }
            "hello" | "config" | "exit" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Contacts,
            CommandGroup::Notes,
            CommandGroup::Misc,
        ]
    }
}

/// Command listing for the interactive session, grouped like the one-shot help.
pub fn get_grouped_help() -> String {
    let cmd = ReplCli::command();
    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    let mut output = String::new();
    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| CommandGroup::for_command(sc.get_name()) == Some(*group))
            .collect();
        if group_cmds.is_empty() {
            continue;
        }

        output.push_str(&format!("{}\n", group.heading()));
        for sc in group_cmds {
            let usage: String = sc
                .get_positionals()
                .map(|arg| {
                    let name = arg.get_id().as_str().replace('_', "-");
                    if arg.is_required_set() {
                        format!(" <{}>", name)
                    } else {
                        format!(" [{}]", name)
                    }
                })
                .collect();
            let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
            output.push_str(&format!(
                ">>> {:<40}: {}\n",
                format!("{}{}", sc.get_name(), usage),
                about
            ));
        }
        output.push('\n');
    }
    output
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Contacts(ContactCommands),

    #[command(flatten)]
    Notes(NoteCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// Add a contact, or another phone to an existing one
    #[command(display_order = 1)]
    Add { name: String, phone: String },

    /// Delete a contact
    #[command(display_order = 2)]
    Delete { name: String },

    /// Replace one of a contact's phones
    #[command(display_order = 3)]
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Show a contact's phones
    #[command(display_order = 4)]
    Phone { name: String },

    /// Remove one of a contact's phones
    #[command(display_order = 5)]
    RemovePhone { name: String, phone: String },

    /// Set a contact's birthday (DD.MM.YYYY)
    #[command(display_order = 6)]
    AddBirthday { name: String, birthday: String },

    /// Show a contact's birthday
    #[command(display_order = 7)]
    ShowBirthday { name: String },

    /// List every contact
    #[command(display_order = 8)]
    All,

    /// Search contacts by name, phone or birthday
    #[command(display_order = 9)]
    Search { term: String },

    /// Birthdays in the next <period> days
    #[command(display_order = 10)]
    Birthdays { period: Option<String> },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Add a note
    #[command(display_order = 20)]
    AddNote {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Append text to a note
    #[command(display_order = 21)]
    UpdateNote {
        position: usize,
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Replace the text of a note
    #[command(display_order = 22)]
    ReplaceNote {
        position: usize,
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Remove a note
    #[command(display_order = 23)]
    RemoveNote { position: usize },

    /// Show one note
    #[command(display_order = 24)]
    Note { position: usize },

    /// Find notes containing some text
    #[command(display_order = 25)]
    FindNotes {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Find notes carrying a tag
    #[command(display_order = 26)]
    FindTag { tag: String },

    /// List every note
    #[command(display_order = 27)]
    Notes,

    /// Tag a note
    #[command(display_order = 28)]
    AddTag { position: usize, tag: String },

    /// Remove a tag from a note
    #[command(display_order = 29)]
    RemoveTag { position: usize, tag: String },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Say hello
    #[command(display_order = 40)]
    Hello,

    /// Get or set configuration
    #[command(display_order = 41)]
    Config {
        /// Configuration key (contacts-file, notes-file, birthday-period)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
