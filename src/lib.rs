pub mod config;
pub mod core;
pub mod josa;
pub mod matcher;

pub use crate::core::normalizer::{extract_choseong, separate, separate_char};
pub use crate::core::unicode::{jamo_level, JamoLevel};
pub use josa::{append_josa, append_josa_type, Josa};
pub use matcher::{char_equals, contains, equals, index_of, matches, Comparator, ComparatorKind};
