use crate::address_book::AddressBook;
use crate::commands::{BirthdayGroup, CmdMessage, CmdResult};
use crate::config::check_period;
use crate::error::Result;
use chrono::NaiveDate;
use log::debug;

pub fn run(book: &AddressBook, period: u32, today: NaiveDate) -> Result<CmdResult> {
    let period = check_period(period)?;
    let groups: Vec<BirthdayGroup> = book
        .birthdays_per_period_from(period, today)
        .into_iter()
        .map(|(date, names)| BirthdayGroup { date, names })
        .collect();
    debug!(
        "{} birthday group(s) within {} day(s) of {}",
        groups.len(),
        period,
        today
    );

    if groups.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "There is no one to celebrate in the next {} day(s)",
            period
        ))));
    }
    Ok(CmdResult::default().with_birthdays(groups))
}
