//! dictionary module
pub mod phrase_dictionary;
pub mod reference_tables;
pub mod synonym_table;

/// Re-export
pub use phrase_dictionary::PhraseDictionary;
pub use reference_tables::ReferenceTables;
pub use synonym_table::{SynonymRecord, SynonymTable, SynonymTables};
