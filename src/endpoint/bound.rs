use std::ops::Bound;

use chrono::{DateTime, TimeZone};

use crate::endpoint::Endpoint;

impl<Tz: TimeZone> Endpoint<Tz> {
    /// Left endpoint of an interval, [`Bound::Unbounded`] being minus infinity.
    pub fn lower(bound: Bound<DateTime<Tz>>) -> Self {
        match bound {
            Bound::Included(value) => Self::closed(value),
            Bound::Excluded(value) => Self::open(value),
            Bound::Unbounded => Self::MinusInfinity,
        }
    }

    /// Right endpoint of an interval, [`Bound::Unbounded`] being plus infinity.
    pub fn upper(bound: Bound<DateTime<Tz>>) -> Self {
        match bound {
            Bound::Included(value) => Self::closed(value),
            Bound::Excluded(value) => Self::open(value),
            Bound::Unbounded => Self::PlusInfinity,
        }
    }

    #[must_use]
    pub const fn as_bound(&self) -> Bound<&DateTime<Tz>> {
        match self {
            Self::Finite { value, included: true } => Bound::Included(value),
            Self::Finite { value, included: false } => Bound::Excluded(value),
            Self::MinusInfinity | Self::PlusInfinity => Bound::Unbounded,
        }
    }
}

impl<Tz: TimeZone> From<Endpoint<Tz>> for Bound<DateTime<Tz>> {
    fn from(endpoint: Endpoint<Tz>) -> Self {
        match endpoint {
            Endpoint::Finite { value, included: true } => Self::Included(value),
            Endpoint::Finite { value, included: false } => Self::Excluded(value),
            Endpoint::MinusInfinity | Endpoint::PlusInfinity => Self::Unbounded,
        }
    }
}
