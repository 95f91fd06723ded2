//! Entry data model.
//!
//! An [`Entry`] is one recorded income or expense. Entries are created only
//! through [`NewEntry`], which validates every field at once, and are
//! immutable afterwards: fields are private and exposed through accessors.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{LedgerError, ValidationError};

/// Identifier of an entry, unique for the lifetime of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| LedgerError::InvalidInput(format!("invalid entry id: {:?}", s)))
    }
}

/// Direction of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(LedgerError::InvalidInput(format!(
                "unknown kind {:?} (expected income or expense)",
                s
            ))),
        }
    }
}

/// A strictly positive currency magnitude with exact decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

/// Largest accepted amount, in whole currency units.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000_000;

impl Amount {
    /// Largest accepted amount (one quadrillion).
    pub fn max() -> Decimal {
        Decimal::new(MAX_AMOUNT_UNITS, 0)
    }

    /// Accept a decimal value in `(0, Amount::max()]`.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(value));
        }
        let max = Self::max();
        if value > max {
            return Err(ValidationError::AmountTooLarge { got: value, max });
        }
        Ok(Self(value))
    }

    /// Parse a numeric literal such as `"250.50"`.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a complete
    /// finite decimal number (including trailing garbage like `"12abc"`) is
    /// rejected.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidAmount(text.to_string()));
        }
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| ValidationError::InvalidAmount(text.to_string()))?;
        Self::new(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Amount as supplied by a caller, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawAmount {
    Text(String),
    Number(Decimal),
    Float(f64),
}

impl RawAmount {
    fn validate(&self) -> Result<Amount, ValidationError> {
        match self {
            Self::Text(text) => Amount::parse(text),
            Self::Number(value) => Amount::new(*value),
            Self::Float(value) => {
                let value = Decimal::try_from(*value)
                    .map_err(|_| ValidationError::InvalidAmount(value.to_string()))?;
                Amount::new(value)
            }
        }
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Decimal> for RawAmount {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// A recorded income or expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    id: EntryId,
    description: String,
    amount: Amount,
    kind: Kind,
    category: String,
    date: NaiveDate,
}

impl Entry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_income(&self) -> bool {
        self.kind == Kind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == Kind::Expense
    }
}

/// Input for a new entry: all four caller-supplied fields at once.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub description: String,
    pub amount: RawAmount,
    pub kind: Kind,
    pub category: String,
}

/// Fields of a [`NewEntry`] that passed validation.
#[derive(Debug, Clone)]
pub(crate) struct CheckedEntry {
    description: String,
    amount: Amount,
    kind: Kind,
    category: String,
}

impl CheckedEntry {
    pub(crate) fn into_entry(self, id: EntryId, date: NaiveDate) -> Entry {
        Entry {
            id,
            description: self.description,
            amount: self.amount,
            kind: self.kind,
            category: self.category,
            date,
        }
    }
}

impl NewEntry {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<RawAmount>,
        kind: Kind,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            kind,
            category: category.into(),
        }
    }

    pub fn income(
        description: impl Into<String>,
        amount: impl Into<RawAmount>,
        category: impl Into<String>,
    ) -> Self {
        Self::new(description, amount, Kind::Income, category)
    }

    pub fn expense(
        description: impl Into<String>,
        amount: impl Into<RawAmount>,
        category: impl Into<String>,
    ) -> Self {
        Self::new(description, amount, Kind::Expense, category)
    }

    /// Check all fields without building an entry.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check().map(|_| ())
    }

    /// Validation order: description, amount, category.
    pub(crate) fn check(&self) -> Result<CheckedEntry, ValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let amount = self.amount.validate()?;
        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        Ok(CheckedEntry {
            description: description.to_string(),
            amount,
            kind: self.kind,
            category: category.to_string(),
        })
    }
}
