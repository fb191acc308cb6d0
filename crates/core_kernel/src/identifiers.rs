//! Strongly-typed identifiers for portfolio entities
//!
//! Holdings and purchase plans are keyed by UUID v7 newtypes, so ids sort in
//! creation order and a holding id can never stand in for a plan id.
//!
//! The text form carries a short entity tag, `HLD-<uuid>` or `PLN-<uuid>`.
//! Parsing accepts the tagged form and the bare UUID, since clients often echo
//! back whichever one they were given.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! tagged_id {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a time-ordered id
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($tag, "-{}"), self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let bare = s.strip_prefix(concat!($tag, "-")).unwrap_or(s);
                Uuid::parse_str(bare).map(Self)
            }
        }
    };
}

tagged_id!(
    /// Identity of a stored holding
    HoldingId,
    "HLD"
);
tagged_id!(
    /// Identity of an investment quote
    PlanId,
    "PLN"
);
