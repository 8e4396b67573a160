//! Contact model representing a person in the contact book.

use crate::domain::birthday::INPUT_FORMAT;
use crate::domain::{BirthdayTracker, DateStatus, Field};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use std::fmt;

/// A contact: a name, an ordered list of unique phones and a set of birthdays.
///
/// The name is the contact's identity inside a
/// [`ContactDirectory`](crate::directory::ContactDirectory) and cannot be
/// changed after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: Field,
    phones: Vec<Field>,
    birthday: BirthdayTracker,
}

impl Contact {
    /// Create a new contact with no phones and no birthdays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Field::text(name),
            phones: Vec::new(),
            birthday: BirthdayTracker::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.value()
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[Field] {
        &self.phones
    }

    pub fn birthdays(&self) -> &BirthdayTracker {
        &self.birthday
    }

    /// Add a phone number. Adding a number that is already stored does nothing.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if the number is not ten digits.
    pub fn add_phone(&mut self, number: &str) -> BookResult<()> {
        let phone = Field::phone(number)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    /// Find a stored phone by its exact value.
    pub fn find_phone(&self, number: &str) -> Option<&Field> {
        self.phones.iter().find(|phone| phone.value() == number)
    }

    /// Replace `old` with `new`, keeping its position.
    ///
    /// The new value is validated like any added phone. If `new` is already
    /// another stored phone, `old` is simply dropped.
    ///
    /// # Errors
    ///
    /// - `BookError::NotFound` if `old` is not stored
    /// - `BookError::Validation` if `new` is not ten digits (nothing changes)
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| BookError::NotFound(format!("Old phone not found: {}", old)))?;

        if old != new && self.find_phone(new).is_some() {
            self.phones.remove(index);
            return Ok(());
        }

        self.phones[index].set_value(new)?;
        Ok(())
    }

    /// Remove a stored phone.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if the phone is not stored.
    pub fn remove_phone(&mut self, number: &str) -> BookResult<()> {
        let index = self
            .position_of(number)
            .ok_or_else(|| BookError::NotFound(format!("Phone not found: {}", number)))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Add a birthday given as `DD.MM.YYYY`.
    pub fn add_birthday(&mut self, text: &str) -> DateStatus {
        self.birthday.add_date(text)
    }

    /// Remove a birthday given as `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if the text is not a stored date.
    pub fn remove_birthday(&mut self, text: &str) -> BookResult<()> {
        let removed = NaiveDate::parse_from_str(text, INPUT_FORMAT)
            .map(|date| self.birthday.remove(&date))
            .unwrap_or(false);

        if removed {
            Ok(())
        } else {
            Err(BookError::NotFound(format!("Birthday not found: {}", text)))
        }
    }

    /// Days from the local date to the nearest upcoming birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.birthday.days_to_next_birthday()
    }

    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.days_to_next_birthday_from(today)
    }

    /// Human-readable summary with the birthday countdown taken from `today`.
    pub fn render_on(&self, today: NaiveDate) -> String {
        let phones = self
            .phones
            .iter()
            .map(Field::value)
            .collect::<Vec<_>>()
            .join(", ");
        let days = match self.days_to_birthday_from(today) {
            Some(days) => format!("{} days", days),
            None => "unknown".to_string(),
        };

        format!(
            "Contact name: {}, phones: [{}], date of birthday: {}, days to birthday: {}",
            self.name,
            phones,
            self.birthday.format_dates(),
            days
        )
    }

    fn position_of(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.value() == number)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_on(Local::now().date_naive()))
    }
}
