//! mapper module
pub mod mapping_data;
pub mod shaw_mapper;

/// Re-export
pub use mapping_data::ShawMappingData;
pub use shaw_mapper::{PhonemeMapper, ShawMapper};
