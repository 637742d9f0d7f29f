pub mod dominance;
pub mod inspect;
pub mod translate;

pub use crate::domain::model::{
    Design, DesignTable, InspectSummary, ParetoFront, TranslateReport, HEADER_FIELDS,
    MINIMIZE_MARKER,
};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
