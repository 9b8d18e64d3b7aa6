pub mod bound;
pub mod kind;

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    mem::discriminant,
};

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

use crate::endpoint::kind::EndpointKind;

/// One boundary of a time interval.
///
/// A finite endpoint is either closed, which means the interval contains its instant,
/// or open, which means it does not. Infinite endpoints are always open: no interval
/// contains an infinity.
///
/// Endpoints are totally ordered. Minus infinity precedes everything else, plus infinity
/// follows everything else, and finite endpoints are ordered by their instant. At the same
/// instant, a closed endpoint precedes an open one.
#[must_use]
#[derive(Clone, derive_more::IsVariant)]
pub enum Endpoint<Tz: TimeZone = Utc> {
    MinusInfinity,

    Finite {
        value: DateTime<Tz>,

        /// Whether the interval contains the instant.
        included: bool,
    },

    PlusInfinity,
}

impl<Tz: TimeZone> Copy for Endpoint<Tz> where DateTime<Tz>: Copy {}

impl<Tz: TimeZone> Endpoint<Tz> {
    /// Finite endpoint, excluded from its interval.
    pub const fn open(value: DateTime<Tz>) -> Self {
        Self::Finite { value, included: false }
    }

    /// Finite endpoint, included in its interval.
    pub const fn closed(value: DateTime<Tz>) -> Self {
        Self::Finite { value, included: true }
    }

    pub const fn minus_infinity() -> Self {
        Self::MinusInfinity
    }

    pub const fn plus_infinity() -> Self {
        Self::PlusInfinity
    }

    #[must_use]
    pub const fn kind(&self) -> EndpointKind {
        match self {
            Self::MinusInfinity => EndpointKind::MinusInfinity,
            Self::Finite { .. } => EndpointKind::Finite,
            Self::PlusInfinity => EndpointKind::PlusInfinity,
        }
    }

    /// Instant of a finite endpoint, [`None`] for the infinities.
    #[must_use]
    pub const fn value(&self) -> Option<&DateTime<Tz>> {
        match self {
            Self::Finite { value, .. } => Some(value),
            Self::MinusInfinity | Self::PlusInfinity => None,
        }
    }

    /// Whether the interval excludes the endpoint. Always `true` for the infinities.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !self.is_closed()
    }

    /// Whether the interval includes the endpoint. Always `false` for the infinities.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Finite { included: true, .. })
    }

    /// Check whether the endpoint strictly precedes the other one.
    ///
    /// A closed endpoint precedes an open endpoint at the same instant.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub fn is_before(&self, other: &Self) -> bool {
        match (self, other) {
            (_, Self::MinusInfinity) => false,
            (Self::MinusInfinity, _) => true,
            (Self::PlusInfinity, _) => false,
            (_, Self::PlusInfinity) => true,
            (
                Self::Finite { value: lhs, included: true },
                Self::Finite { value: rhs, included: true },
            ) => lhs < rhs,
            (
                Self::Finite { value: lhs, included: true },
                Self::Finite { value: rhs, included: false },
            ) => lhs <= rhs,
            (Self::Finite { value: lhs, .. }, Self::Finite { value: rhs, .. }) => lhs < rhs,
        }
    }

    /// Check whether the endpoint strictly follows the other one.
    ///
    /// An open endpoint follows a closed endpoint at the same instant.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub fn is_after(&self, other: &Self) -> bool {
        match (self, other) {
            (_, Self::PlusInfinity) => false,
            (Self::PlusInfinity, _) => true,
            (Self::MinusInfinity, _) => false,
            (_, Self::MinusInfinity) => true,
            (
                Self::Finite { value: lhs, included: true },
                Self::Finite { value: rhs, included: true },
            ) => lhs > rhs,
            (
                Self::Finite { value: lhs, included: false },
                Self::Finite { value: rhs, included: true },
            ) => lhs >= rhs,
            (Self::Finite { value: lhs, .. }, Self::Finite { value: rhs, .. }) => lhs > rhs,
        }
    }

    /// Express the endpoint in another time zone, keeping its instant and inclusion.
    pub fn with_timezone<Tz2: TimeZone>(&self, tz: &Tz2) -> Endpoint<Tz2> {
        match self {
            Self::MinusInfinity => Endpoint::MinusInfinity,
            Self::Finite { value, included } => {
                Endpoint::Finite { value: value.with_timezone(tz), included: *included }
            }
            Self::PlusInfinity => Endpoint::PlusInfinity,
        }
    }
}

impl<Tz: TimeZone> Display for Endpoint<Tz>
where
    Tz::Offset: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite { value, .. } => {
                write!(f, "{}", value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Self::MinusInfinity | Self::PlusInfinity => Display::fmt(&self.kind(), f),
        }
    }
}

impl<Tz: TimeZone> Debug for Endpoint<Tz> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MinusInfinity => f.write_str("MinusInfinity"),
            Self::Finite { value, included: true } => {
                f.debug_tuple("Closed").field(value).finish()
            }
            Self::Finite { value, included: false } => {
                f.debug_tuple("Open").field(value).finish()
            }
            Self::PlusInfinity => f.write_str("PlusInfinity"),
        }
    }
}

impl<Tz: TimeZone> PartialEq for Endpoint<Tz> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MinusInfinity, Self::MinusInfinity)
            | (Self::PlusInfinity, Self::PlusInfinity) => true,
            (
                Self::Finite { value: lhs, included: lhs_included },
                Self::Finite { value: rhs, included: rhs_included },
            ) => lhs == rhs && lhs_included == rhs_included,
            _ => false,
        }
    }
}

impl<Tz: TimeZone> Eq for Endpoint<Tz> {}

impl<Tz: TimeZone> Hash for Endpoint<Tz> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        discriminant(self).hash(state);
        if let Self::Finite { value, included } = self {
            value.hash(state);
            included.hash(state);
        }
    }
}

impl<Tz: TimeZone> PartialOrd for Endpoint<Tz> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Tz: TimeZone> Ord for Endpoint<Tz> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.is_before(other) {
            Ordering::Less
        } else if self.is_after(other) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
