// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The variable domain shared by every variable of a model.
//!
//! # Examples
//!
//! ```
//! use sparse_bqm::Vartype;
//!
//! let vartype = Vartype::from_name("spin").unwrap();
//! assert_eq!(vartype, Vartype::Spin);
//! assert_eq!(vartype.to_string(), "SPIN");
//! assert_eq!(vartype.values(), [-1, 1]);
//! assert!(Vartype::from_name("ternary").is_err());
//! ```

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::error::{ModelError, Result};

/// Domain of the model's variables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCountMacro,
)]
#[strum(ascii_case_insensitive)]
pub enum Vartype {
    /// Variables take values in {0, 1}.
    #[strum(to_string = "BINARY", serialize = "{0,1}")]
    Binary,

    /// Variables take values in {-1, +1}.
    #[strum(to_string = "SPIN", serialize = "{-1,1}")]
    Spin,
}

impl Vartype {
    /// Parse a domain name, accepting `BINARY`/`SPIN` in any case or the
    /// value sets `{0,1}` / `{-1,1}`.
    pub fn from_name(name: &str) -> Result<Self> {
        name.trim().parse().map_err(|_| {
            let known: Vec<String> = Vartype::iter().map(|v| v.to_string()).collect();
            ModelError::invalid(format!(
                "unknown vartype {:?}, expected one of {}",
                name,
                known.join(", ")
            ))
        })
    }

    /// The two values of the domain, low then high.
    pub const fn values(self) -> [i8; 2] {
        match self {
            Vartype::Binary => [0, 1],
            Vartype::Spin => [-1, 1],
        }
    }

    /// Check whether `value` belongs to the domain.
    pub const fn contains(self, value: i8) -> bool {
        match self {
            Vartype::Binary => value == 0 || value == 1,
            Vartype::Spin => value == -1 || value == 1,
        }
    }

    /// The other domain.
    pub const fn flipped(self) -> Self {
        match self {
            Vartype::Binary => Vartype::Spin,
            Vartype::Spin => Vartype::Binary,
        }
    }

    /// Map a value of this domain onto its counterpart in `target`
    /// (0 ↔ -1, 1 ↔ +1).
    ///
    /// The value is assumed to be in the domain; callers validate first.
    pub const fn map_value(self, value: i8, target: Vartype) -> i8 {
        match (self, target) {
            (Vartype::Binary, Vartype::Spin) => 2 * value - 1,
            (Vartype::Spin, Vartype::Binary) => (value + 1) / 2,
            _ => value,
        }
    }
}
