//! Row mapping: one raw row in, one contact record out.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use contact_model::{BorrowerStage, ContactRecord, RawRow};

use crate::address::decompose_address;
use crate::date::normalize_date;
use crate::name::{combine_and_split, split_full_name};
use crate::profile::{MappingProfile, NameRule, PassthroughMode};
use crate::resolve::{Match, find_keywords, find_position, resolve};
use crate::schema::{ContactField, FULL_NAME_KEYWORDS};

/// Maps raw rows onto [`ContactRecord`]s under a [`MappingProfile`].
pub struct RowMapper {
    profile: MappingProfile,
}

/// Where each target field would read from, given a header set.
///
/// Resolution depends only on headers, so the plan computed once for a
/// table is exact for every row of that table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingPlan {
    pub profile: String,
    pub entries: Vec<PlanEntry>,
    /// Headers no field claimed; these feed the extension area.
    pub passthrough_columns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEntry {
    pub field: ContactField,
    pub source_column: Option<String>,
}

#[derive(Debug, Default)]
struct NameResolution {
    first: String,
    last: String,
    first_source: Option<String>,
    last_source: Option<String>,
}

impl NameResolution {
    fn from_full_column(found: Match<'_>) -> Self {
        let (first, last) = split_full_name(found.value);
        Self {
            first,
            last,
            first_source: Some(found.header.to_string()),
            last_source: Some(found.header.to_string()),
        }
    }
}

impl RowMapper {
    pub fn new(profile: MappingProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &MappingProfile {
        &self.profile
    }

    /// Map one raw row to exactly one contact record. Never fails: fields
    /// that do not resolve stay empty, odd values degrade to raw text.
    pub fn map_row(&self, row: &RawRow) -> ContactRecord {
        let mut consumed: BTreeSet<String> = BTreeSet::new();
        let mut record = ContactRecord {
            borrower_stage: self.profile.default_stage,
            ..ContactRecord::default()
        };

        let name = self.resolve_name(row);
        record.first_name = name.first;
        record.last_name = name.last;
        consumed.extend(name.first_source);
        consumed.extend(name.last_source);

        for rule in &self.profile.rules {
            let Some(found) = resolve(row, &rule.strategies) else {
                continue;
            };
            consumed.insert(found.header.to_string());
            self.assign(&mut record, rule.field, found.value);
        }

        // A lone address column may carry the whole address; decompose it
        // only when no separate locality columns resolved.
        if !record.address.is_empty()
            && record.city.is_empty()
            && record.province.is_empty()
            && record.postal_code.is_empty()
        {
            let parts = decompose_address(&record.address);
            record.address = parts.street;
            record.city = parts.city;
            record.province = parts.province;
            record.postal_code = parts.postal_code;
        }

        for (header, value) in row.iter() {
            if consumed.contains(header) {
                continue;
            }
            if self.profile.passthrough == PassthroughMode::SkipEmpty && value.trim().is_empty() {
                continue;
            }
            record.extras.insert(header.to_string(), value.to_string());
        }

        record
    }

    /// Map a batch of rows, one record per row.
    pub fn map_rows(&self, rows: &[RawRow]) -> Vec<ContactRecord> {
        rows.iter().map(|row| self.map_row(row)).collect()
    }

    /// Report which source column each field reads from for this header
    /// set, and which columns pass through unmapped.
    pub fn plan(&self, headers: &[String]) -> MappingPlan {
        let row: RawRow = headers
            .iter()
            .map(|header| (header.clone(), String::new()))
            .collect();
        let mut consumed: BTreeSet<String> = BTreeSet::new();
        let mut entries = Vec::with_capacity(ContactField::ALL.len());

        let name = self.resolve_name(&row);
        entries.push(PlanEntry {
            field: ContactField::FirstName,
            source_column: name.first_source.clone(),
        });
        entries.push(PlanEntry {
            field: ContactField::LastName,
            source_column: name.last_source.clone(),
        });
        consumed.extend(name.first_source);
        consumed.extend(name.last_source);

        for rule in &self.profile.rules {
            let found = resolve(&row, &rule.strategies);
            if let Some(m) = &found {
                consumed.insert(m.header.to_string());
            }
            entries.push(PlanEntry {
                field: rule.field,
                source_column: found.map(|m| m.header.to_string()),
            });
        }

        let passthrough_columns = headers
            .iter()
            .filter(|header| !consumed.contains(*header))
            .cloned()
            .collect();

        MappingPlan {
            profile: self.profile.name.to_string(),
            entries,
            passthrough_columns,
        }
    }

    fn resolve_name(&self, row: &RawRow) -> NameResolution {
        match self.profile.name_rule {
            NameRule::FullNameOnly => find_keywords(row, FULL_NAME_KEYWORDS)
                .map(NameResolution::from_full_column)
                .unwrap_or_default(),
            NameRule::Columns | NameRule::ColumnsThenPositional => {
                let first = find_keywords(row, ContactField::FirstName.keywords());
                let last = find_keywords(row, ContactField::LastName.keywords());
                if first.is_some() || last.is_some() {
                    let (first_name, last_name) = combine_and_split(
                        first.map(|m| m.value).unwrap_or(""),
                        last.map(|m| m.value).unwrap_or(""),
                    );
                    return NameResolution {
                        first: first_name,
                        last: last_name,
                        first_source: first.map(|m| m.header.to_string()),
                        last_source: last.map(|m| m.header.to_string()),
                    };
                }
                if let Some(full) = find_keywords(row, FULL_NAME_KEYWORDS) {
                    return NameResolution::from_full_column(full);
                }
                if self.profile.name_rule == NameRule::ColumnsThenPositional
                    && let Some(first_column) = find_position(row, 0)
                {
                    return NameResolution::from_full_column(first_column);
                }
                NameResolution::default()
            }
        }
    }

    fn assign(&self, record: &mut ContactRecord, field: ContactField, value: &str) {
        match field {
            // Names are resolved through the profile's name rule.
            ContactField::FirstName | ContactField::LastName => {}
            ContactField::Email => record.email = value.trim().to_string(),
            ContactField::Phone => record.phone = value.trim().to_string(),
            ContactField::Address => record.address = value.trim().to_string(),
            ContactField::City => record.city = value.trim().to_string(),
            ContactField::Province => record.province = value.trim().to_string(),
            ContactField::PostalCode => record.postal_code = value.trim().to_string(),
            ContactField::DateOfBirth => record.date_of_birth = normalize_date(value),
            // Stage matching is exact on the raw value; the validator does
            // not trim or fold case.
            ContactField::BorrowerStage => {
                record.borrower_stage =
                    BorrowerStage::from_str(value).unwrap_or(self.profile.default_stage);
            }
            ContactField::PartnerType => record.partner_type = value.trim().to_string(),
            ContactField::LeadSource => record.lead_source = value.trim().to_string(),
            ContactField::Campaign => record.campaign = value.trim().to_string(),
        }
    }
}
