use thiserror::Error;

use crate::OptionTable;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Integrity violations found while validating an option table.
pub enum CatalogError {
    /// A record has a blank label or name.
    #[error("{table}: record #{index} has an empty label")]
    EmptyLabel {
        /// Table being validated.
        table: OptionTable,
        /// Zero-based record position.
        index: usize,
    },
    /// Two records share a label.
    #[error("{table}: duplicate label `{label}`")]
    DuplicateLabel {
        /// Table being validated.
        table: OptionTable,
        /// Repeated label.
        label: String,
    },
    /// A non-sentinel record has a blank selection key.
    #[error("{table}: `{label}` has an empty key")]
    EmptyKey {
        /// Table being validated.
        table: OptionTable,
        /// Label of the offending record.
        label: String,
    },
    /// Two records share a selection key.
    #[error("{table}: duplicate key `{key}`")]
    DuplicateKey {
        /// Table being validated.
        table: OptionTable,
        /// Repeated key.
        key: String,
    },
    /// A sentinel key appears in a table that does not support it.
    #[error("{table}: sentinel `{key}` is not valid here")]
    MisplacedSentinel {
        /// Table being validated.
        table: OptionTable,
        /// Sentinel key.
        key: String,
    },
    /// A palette is missing colors, or the surprise-me palette declares some.
    #[error("{table}: `{label}` has an invalid swatch list")]
    InvalidSwatches {
        /// Table being validated.
        table: OptionTable,
        /// Name of the offending palette.
        label: String,
    },
    /// A swatch is not `#RGB` or `#RRGGBB`.
    #[error("invalid hex color `{0}`")]
    InvalidColor(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Lookup failures surfaced to the consuming layer.
pub enum LookupError {
    /// No record in `table` carries `key`.
    #[error("no `{key}` entry in {table}")]
    NotFound {
        /// Table that was searched.
        table: OptionTable,
        /// Key that was requested.
        key: String,
    },
    /// The requested table name is not part of the catalog.
    #[error("unknown option table `{0}`")]
    UnknownTable(String),
}
