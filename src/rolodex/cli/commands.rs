//! # CLI Layer
//!
//! This module is one client of the rolodex library, not the application itself. It is
//! the only place that parses arguments, touches stdin/stdout and decides exit codes.
//!
//! - `run()`: parses the command line and either runs one command or starts the session loop
//! - `init_context()`: resolves the data directory, loads the config and opens the API
//! - `dispatch()`: maps a parsed command onto one `RolodexApi` call and prints the result
//! - `repl()`: the interactive session; errors are printed and the loop continues

use super::print::{
    print_birthdays, print_config, print_error, print_messages, print_notes, print_records,
};
use super::setup::{
    get_grouped_help, Cli, Commands, ContactCommands, MiscCommands, NoteCommands, ReplCli,
    ReplCommand,
};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use log::debug;
use rolodex::api::{CmdMessage, CmdResult, ConfigAction, RolodexApi};
use rolodex::config::{parse_period, RolodexConfig};
use rolodex::error::{Result, RolodexError};
use rolodex::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

struct AppContext {
    api: RolodexApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::initialize_logger(cli.verbose);

    let mut ctx = init_context(&cli)?;
    match cli.command {
        Some(command) => dispatch(&mut ctx, command),
        None => repl(&mut ctx),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "rolodex", "rolodex")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RolodexError::Config("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    debug!("Using data directory {}", data_dir.display());

    let config = RolodexConfig::load(&data_dir)?;
    let store = FileStore::new(config.contacts_path(&data_dir), config.notes_path(&data_dir));
    let api = RolodexApi::open(store, config, data_dir)?;

    Ok(AppContext { api })
}

fn joined(words: Vec<String>) -> String {
    words.join(" ")
}

fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<()> {
    let api = &mut ctx.api;
    let result = match command {
        Commands::Contacts(cmd) => match cmd {
            ContactCommands::Add { name, phone } => api.add_contact(&name, &phone)?,
            ContactCommands::Delete { name } => api.delete_contact(&name)?,
            ContactCommands::Change {
                name,
                old_phone,
                new_phone,
            } => api.change_phone(&name, &old_phone, &new_phone)?,
            ContactCommands::Phone { name } => api.show_phones(&name)?,
            ContactCommands::RemovePhone { name, phone } => api.remove_phone(&name, &phone)?,
            ContactCommands::AddBirthday { name, birthday } => {
                api.add_birthday(&name, &birthday)?
            }
            ContactCommands::ShowBirthday { name } => api.show_birthday(&name)?,
            ContactCommands::All => api.all_contacts()?,
            ContactCommands::Search { term } => api.search_contacts(&term)?,
            ContactCommands::Birthdays { period } => {
                let period = period.as_deref().map(parse_period).transpose()?;
                api.birthdays(period)?
            }
        },
        Commands::Notes(cmd) => match cmd {
            NoteCommands::AddNote { text } => api.add_note(&joined(text))?,
            NoteCommands::UpdateNote { position, text } => {
                api.update_note(position, &joined(text))?
            }
            NoteCommands::ReplaceNote { position, text } => {
                api.replace_note(position, &joined(text))?
            }
            NoteCommands::RemoveNote { position } => api.remove_note(position)?,
            NoteCommands::Note { position } => api.note_by_index(position)?,
            NoteCommands::FindNotes { text } => api.find_notes(&joined(text))?,
            NoteCommands::FindTag { tag } => api.find_notes_by_tag(&tag)?,
            NoteCommands::Notes => api.show_notes()?,
            NoteCommands::AddTag { position, tag } => api.add_tag(position, &tag)?,
            NoteCommands::RemoveTag { position, tag } => api.remove_tag(position, &tag)?,
        },
        Commands::Misc(MiscCommands::Hello) => {
            CmdResult::default().with_message(CmdMessage::success("How can I help you?"))
        }
        Commands::Misc(MiscCommands::Config { key, value }) => {
            return handle_config(ctx, key, value)
        }
    };

    print_result(&result);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_result(result: &CmdResult) {
    print_records(&result.listed_records);
    print_birthdays(&result.birthdays);
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
}

fn repl(ctx: &mut AppContext) -> Result<()> {
    println!("{}", "Welcome to the assistant bot!".magenta());
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let mut tokens = match shell_words::split(line.trim()) {
            Ok(tokens) => tokens,
            Err(e) => {
                print_error(&e.to_string());
                continue;
            }
        };
        let Some(first) = tokens.first_mut() else {
            print!("{}", get_grouped_help().magenta());
            continue;
        };
        *first = first.to_lowercase();

        match ReplCli::try_parse_from(&tokens) {
            Ok(ReplCli {
                command: ReplCommand::Exit,
            }) => break,
            Ok(ReplCli {
                command: ReplCommand::Run(command),
            }) => {
                if let Err(e) = dispatch(ctx, command) {
                    print_error(&e.to_string());
                }
            }
            Err(e) => e.print()?,
        }
    }

    println!("{}", "Good bye!".magenta());
    Ok(())
}
