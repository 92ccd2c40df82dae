use colored::Colorize;
use rolodex::api::{BirthdayGroup, CmdMessage, MessageLevel};
use rolodex::config::RolodexConfig;
use rolodex::note::NoteView;
use rolodex::record::Record;

const RULE: &str = "----------";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_records(records: &[Record]) {
    for record in records {
        println!("{}", record.to_string().bright_blue());
    }
}

pub(super) fn print_birthdays(groups: &[BirthdayGroup]) {
    if groups.is_empty() {
        return;
    }
    println!("{}", "Upcoming birthdays:".yellow());
    println!("{}", RULE.yellow());
    for group in groups {
        println!(
            "{}",
            format!("{}: {}", group.date, group.names.join(", ")).yellow()
        );
    }
    println!("{}", RULE.yellow());
}

pub(super) fn print_notes(notes: &[NoteView]) {
    for note in notes {
        println!(
            "{} {}",
            format!("Note {}:", note.position).yellow(),
            note.text.green()
        );
        if !note.tags.is_empty() {
            println!(" {} {}", "Tags:".dimmed(), note.tags.join(" ").cyan());
        }
    }
}

pub(super) fn print_config(config: &RolodexConfig) {
    for key in RolodexConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

pub(super) fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
