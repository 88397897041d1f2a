//! Mapping profiles: per-field strategy lists as first-class configuration.
//!
//! Source systems disagree on where dates of birth live and whether empty
//! unmapped columns are worth keeping, so those choices are profiles the
//! caller selects rather than behavior baked into the mapper.

use serde::Serialize;

use contact_model::BorrowerStage;

use crate::schema::ContactField;

/// One way of locating the source column for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldStrategy {
    /// Whole-header match, ignoring ASCII case.
    ExactHeader(&'static str),
    /// Case-insensitive substring keywords, tried in order.
    Keywords(&'static [&'static str]),
    /// The n-th column of the row.
    Position(usize),
}

/// How FirstName/LastName are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NameRule {
    /// Separate first/last columns, falling back to a single full-name
    /// column when neither resolves.
    Columns,
    /// A single full-name column only.
    FullNameOnly,
    /// [`NameRule::Columns`], then the row's first column as a last resort.
    ColumnsThenPositional,
}

/// What happens to source columns no field claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PassthroughMode {
    /// Attach every unclaimed column verbatim, empty or not.
    Permissive,
    /// Attach only columns whose value is non-empty after trimming.
    SkipEmpty,
}

/// Strategy list for one target field, evaluated top-down.
#[derive(Debug, Clone, Serialize)]
pub struct FieldRule {
    pub field: ContactField,
    pub strategies: Vec<FieldStrategy>,
}

/// A complete, inspectable mapping configuration.
#[derive(Debug, Clone, Serialize)]
pub struct MappingProfile {
    pub name: &'static str,
    pub name_rule: NameRule,
    /// Rules for every field except the two name fields.
    pub rules: Vec<FieldRule>,
    pub passthrough: PassthroughMode,
    pub default_stage: BorrowerStage,
}

impl MappingProfile {
    /// Keyword matching everywhere; dates of birth found by the DOB
    /// keyword set; empty unmapped columns kept.
    pub fn standard() -> Self {
        Self {
            name: "standard",
            name_rule: NameRule::Columns,
            rules: keyword_rules(),
            passthrough: PassthroughMode::Permissive,
            default_stage: BorrowerStage::Prospect,
        }
    }

    /// For sources with no date-of-birth concept: the registration date
    /// column fills the DOB slot, and empty unmapped columns are dropped.
    pub fn registration() -> Self {
        let mut rules = keyword_rules();
        set_strategies(
            &mut rules,
            ContactField::DateOfBirth,
            vec![FieldStrategy::ExactHeader("Date Registered")],
        );
        Self {
            name: "registration",
            name_rule: NameRule::Columns,
            rules,
            passthrough: PassthroughMode::SkipEmpty,
            default_stage: BorrowerStage::Prospect,
        }
    }

    /// Keyword matching with positional fallbacks for headerless-ish
    /// sheets: the first column stands in for the name and the second for
    /// the date of birth when nothing matches by header.
    pub fn positional() -> Self {
        let mut rules = keyword_rules();
        set_strategies(
            &mut rules,
            ContactField::DateOfBirth,
            vec![
                FieldStrategy::Keywords(ContactField::DateOfBirth.keywords()),
                FieldStrategy::Position(1),
            ],
        );
        Self {
            name: "positional",
            name_rule: NameRule::ColumnsThenPositional,
            rules,
            passthrough: PassthroughMode::Permissive,
            default_stage: BorrowerStage::Prospect,
        }
    }

    /// Override the passthrough mode, keeping the rest of the profile.
    #[must_use]
    pub fn with_passthrough(mut self, mode: PassthroughMode) -> Self {
        self.passthrough = mode;
        self
    }

    /// The strategy list for a field, if this profile has one.
    pub fn strategies_for(&self, field: ContactField) -> Option<&[FieldStrategy]> {
        self.rules
            .iter()
            .find(|rule| rule.field == field)
            .map(|rule| rule.strategies.as_slice())
    }
}

/// One keyword rule per non-name field, in schema order.
fn keyword_rules() -> Vec<FieldRule> {
    ContactField::ALL
        .iter()
        .filter(|field| {
            !matches!(field, ContactField::FirstName | ContactField::LastName)
        })
        .map(|field| FieldRule {
            field: *field,
            strategies: vec![FieldStrategy::Keywords(field.keywords())],
        })
        .collect()
}

fn set_strategies(rules: &mut [FieldRule], field: ContactField, strategies: Vec<FieldStrategy>) {
    if let Some(rule) = rules.iter_mut().find(|rule| rule.field == field) {
        rule.strategies = strategies;
    }
}
