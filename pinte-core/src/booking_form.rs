//! The table booking form and the request built from it.
//!
//! Each field knows its own constraints, mirroring the `required`, `type`
//! and `min`/`max` attributes of the form inputs; the view only asks the
//! form whether it is valid.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub const MIN_PARTY_SIZE: u32 = 1;
pub const MAX_PARTY_SIZE: u32 = 20;

/// JSON body of `POST /booking`: form field name to string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub party_size: String,
    pub notes: String,
}

/// Identifies a form input, for validation reports and focus handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Date,
    Time,
    PartySize,
    Notes,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Date,
        Field::Time,
        Field::PartySize,
        Field::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Date => "Date",
            Field::Time => "Time",
            Field::PartySize => "Guests",
            Field::Notes => "Notes",
        }
    }

    pub fn is_required(self) -> bool {
        self != Field::Notes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    InvalidEmail,
    InvalidDate,
    InvalidTime,
    PartySizeOutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub problem: FieldProblem,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = self.field.label();
        match self.problem {
            FieldProblem::Missing => write!(f, "{label} is required"),
            FieldProblem::InvalidEmail => write!(f, "{label} must be an email address"),
            FieldProblem::InvalidDate => write!(f, "{label} must look like YYYY-MM-DD"),
            FieldProblem::InvalidTime => write!(f, "{label} must look like HH:MM"),
            FieldProblem::PartySizeOutOfRange => write!(
                f,
                "{label} must be a number from {MIN_PARTY_SIZE} to {MAX_PARTY_SIZE}"
            ),
        }
    }
}

/// Current values of the booking form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub party_size: String,
    pub notes: String,
}

impl BookingForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::PartySize => &self.party_size,
            Field::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::PartySize => &mut self.party_size,
            Field::Notes => &mut self.notes,
        };
        *slot = value.into();
    }

    /// Clear every input.
    pub fn reset(&mut self) {
        *self = BookingForm::default();
    }

    /// Validate one input against its constraints.
    pub fn check_field(&self, field: Field) -> Result<(), FieldError> {
        let value = self.value(field).trim();
        let fail = |problem| Err(FieldError { field, problem });

        if value.is_empty() {
            return if field.is_required() {
                fail(FieldProblem::Missing)
            } else {
                Ok(())
            };
        }

        match field {
            Field::Email if !looks_like_email(value) => fail(FieldProblem::InvalidEmail),
            Field::Date if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() => {
                fail(FieldProblem::InvalidDate)
            }
            Field::Time if NaiveTime::parse_from_str(value, "%H:%M").is_err() => {
                fail(FieldProblem::InvalidTime)
            }
            Field::PartySize => match value.parse::<u32>() {
                Ok(n) if (MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&n) => Ok(()),
                _ => fail(FieldProblem::PartySizeOutOfRange),
            },
            _ => Ok(()),
        }
    }

    /// Validate all inputs, reporting every failing field in form order.
    pub fn report_validity(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<_> = Field::ALL
            .iter()
            .filter_map(|&field| self.check_field(field).err())
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Build the request body from the current values.
    pub fn to_request(&self) -> BookingRequest {
        BookingRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            party_size: self.party_size.trim().to_string(),
            notes: self.notes.clone(),
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
