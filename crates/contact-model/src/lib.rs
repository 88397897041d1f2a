pub mod raw;
pub mod record;
pub mod stage;

pub use raw::RawRow;
pub use record::{ContactRecord, FIELD_HEADERS};
pub use stage::BorrowerStage;
