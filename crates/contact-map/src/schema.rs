//! Target schema fields and their header keyword sets.

use serde::{Deserialize, Serialize};

/// Keywords that identify a single full-name column, tried when no
/// separate first/last columns resolve. "name" alone over-matches columns
/// like "Company Name"; that is accepted heuristic behavior.
pub const FULL_NAME_KEYWORDS: &[&str] = &["full name", "name"];

/// A field of the fixed contact schema.
///
/// Declaration order is the export column order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    Province,
    PostalCode,
    DateOfBirth,
    BorrowerStage,
    PartnerType,
    LeadSource,
    Campaign,
}

impl ContactField {
    pub const ALL: [ContactField; 13] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Address,
        ContactField::City,
        ContactField::Province,
        ContactField::PostalCode,
        ContactField::DateOfBirth,
        ContactField::BorrowerStage,
        ContactField::PartnerType,
        ContactField::LeadSource,
        ContactField::Campaign,
    ];

    /// The human column header used on export, matching
    /// [`contact_model::FIELD_HEADERS`].
    pub fn header(&self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Address => "Address",
            ContactField::City => "City",
            ContactField::Province => "Province",
            ContactField::PostalCode => "Postal Code",
            ContactField::DateOfBirth => "Date of Birth",
            ContactField::BorrowerStage => "Borrower Stage",
            ContactField::PartnerType => "Partner Type",
            ContactField::LeadSource => "Lead Source",
            ContactField::Campaign => "Campaign",
        }
    }

    /// Substring keywords tried against source headers, most specific
    /// first.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ContactField::FirstName => &["first name", "firstname", "first"],
            ContactField::LastName => &["last name", "lastname", "surname", "last"],
            ContactField::Email => &["email", "e-mail"],
            ContactField::Phone => &["phone", "mobile", "cell"],
            ContactField::Address => &["address", "street"],
            ContactField::City => &["city", "town"],
            ContactField::Province => &["province", "state"],
            ContactField::PostalCode => &["postal", "zip"],
            ContactField::DateOfBirth => &["date of birth", "birth date", "dob", "birth"],
            ContactField::BorrowerStage => &["stage", "status"],
            ContactField::PartnerType => &["partner type", "partner"],
            ContactField::LeadSource => &["lead source", "source"],
            ContactField::Campaign => &["campaign"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact_model::FIELD_HEADERS;

    #[test]
    fn headers_stay_in_sync_with_the_model() {
        let headers: Vec<&str> = ContactField::ALL.iter().map(ContactField::header).collect();
        assert_eq!(headers, FIELD_HEADERS);
    }
}
