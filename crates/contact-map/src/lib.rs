//! Heuristic mapping of arbitrary spreadsheet columns onto the contact schema.
//!
//! The mapper guesses which source column feeds each target field using an
//! ordered list of strategies per field (exact header, keyword substring,
//! positional), evaluated top-down. The precedence is data, not code
//! branching: a [`MappingProfile`] is a plain inspectable value.
//!
//! Keyword matching is case-insensitive substring matching and will
//! over-match ("Phone Extension" matches "phone"). That imprecision is
//! inherent to the heuristic and deliberately not papered over.

pub mod address;
pub mod date;
pub mod mapper;
pub mod name;
pub mod profile;
pub mod resolve;
pub mod schema;

pub use address::{AddressParts, decompose_address};
pub use date::normalize_date;
pub use mapper::{MappingPlan, PlanEntry, RowMapper};
pub use name::{combine_and_split, split_full_name};
pub use profile::{FieldRule, FieldStrategy, MappingProfile, NameRule, PassthroughMode};
pub use resolve::{Match, resolve};
pub use schema::ContactField;
