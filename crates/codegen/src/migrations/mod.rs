//! # Migration Generation
//!
//! Turns derived [`PivotNames`](crate::context::PivotNames) into the token
//! values a pivot stub is rendered with.
//!
//! ## Tokens
//!
//! | Token                | Value                                   |
//! |----------------------|-----------------------------------------|
//! | `{{class}}`          | class override or derived migration name |
//! | `{{pivotTableName}}` | pivot table name                        |
//! | `{{columnOne}}`      | first foreign-key column                |
//! | `{{columnTwo}}`      | second foreign-key column               |
//! | `{{tableOne}}`       | first sorted table                      |
//! | `{{tableTwo}}`       | second sorted table                     |
//! | `{{foreignKeys}}`    | foreign-key clause, or empty            |

pub mod pivot;

pub use pivot::{foreign_keys, token_values};
