//! Test fixtures and sample data.
//!
//! This module provides reusable contacts and directories for tests.

use chrono::NaiveDate;
use contact_book::{Contact, ContactDirectory};

/// Create a sample contact with the given phones and `DD.MM.YYYY` birthdays.
///
/// Panics if a phone or birthday is invalid; fixtures are expected to be valid.
pub fn sample_contact(name: &str, phones: &[&str], birthdays: &[&str]) -> Contact {
    let mut contact = Contact::new(name);
    for phone in phones {
        contact.add_phone(phone).expect("fixture phone must be valid");
    }
    for birthday in birthdays {
        assert!(
            contact.add_birthday(birthday).is_added(),
            "fixture birthday must be new and valid: {}",
            birthday
        );
    }
    contact
}

/// The five contacts the book is usually seeded with.
#[allow(dead_code)]
pub fn sample_book() -> ContactDirectory {
    let mut book = ContactDirectory::new();
    for contact in [
        sample_contact("John", &["1234567890"], &["01.01.2006"]),
        sample_contact("Jane", &["9876543210"], &["15.02.1990"]),
        sample_contact("Borys", &["1234567895"], &["01.05.1990"]),
        sample_contact("Nadiia", &["1234567812"], &["09.05.1995"]),
        sample_contact("Nuna", &["1458567812"], &["25.05.1993"]),
    ] {
        book.add_record(contact).expect("fixture names are unique");
    }
    book
}

/// A book of `count` contacts named `Contact00`, `Contact01`, ...
#[allow(dead_code)]
pub fn numbered_book(count: usize) -> ContactDirectory {
    let mut book = ContactDirectory::new();
    for i in 0..count {
        let phone = format!("{:010}", i);
        let contact = sample_contact(&format!("Contact{:02}", i), &[phone.as_str()], &[]);
        book.add_record(contact).expect("fixture names are unique");
    }
    book
}

#[allow(dead_code)]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}
