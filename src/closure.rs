//! Interval closure modes.
//!
//! Each tree is specialized on one closure mode at compile time through the
//! [`Closure`] trait. [`ClosureMode`] is the runtime counterpart, used to pick
//! a specialization from a string such as `"right"`.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Which endpoints of an interval are contained in it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClosureMode {
    /// `[left, right)`
    Left,
    /// `(left, right]`
    #[default]
    Right,
    /// `[left, right]`
    Both,
    /// `(left, right)`
    Neither,
}

impl ClosureMode {
    pub const ALL: [ClosureMode; 4] = [
        ClosureMode::Left,
        ClosureMode::Right,
        ClosureMode::Both,
        ClosureMode::Neither,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClosureMode::Left => "left",
            ClosureMode::Right => "right",
            ClosureMode::Both => "both",
            ClosureMode::Neither => "neither",
        }
    }

    pub fn closed_left(&self) -> bool {
        matches!(self, ClosureMode::Left | ClosureMode::Both)
    }

    pub fn closed_right(&self) -> bool {
        matches!(self, ClosureMode::Right | ClosureMode::Both)
    }
}

impl FromStr for ClosureMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(ClosureMode::Left),
            "right" => Ok(ClosureMode::Right),
            "both" => Ok(ClosureMode::Both),
            "neither" => Ok(ClosureMode::Neither),
            _ => Err(Error::InvalidClosureMode(s.to_string())),
        }
    }
}

impl fmt::Display for ClosureMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compile-time closure mode.
///
/// The two associated constants select between `<` and `<=` for each side;
/// the comparison helpers are resolved statically so queries carry no
/// per-comparison branch on the mode.
///
/// | mode      | left contains | right contains |
/// |-----------|---------------|----------------|
/// | `left`    | `<=`          | `<`            |
/// | `right`   | `<`           | `<=`           |
/// | `both`    | `<=`          | `<=`           |
/// | `neither` | `<`           | `<`            |
pub trait Closure: Copy + Default + Send + Sync + 'static {
    const MODE: ClosureMode;
    const CLOSED_LEFT: bool;
    const CLOSED_RIGHT: bool;

    /// `left <cmp_left> point`
    #[inline(always)]
    fn left_contains<K: PartialOrd>(left: K, point: K) -> bool {
        if Self::CLOSED_LEFT {
            left <= point
        } else {
            left < point
        }
    }

    /// `point <cmp_right> right`
    #[inline(always)]
    fn right_contains<K: PartialOrd>(point: K, right: K) -> bool {
        if Self::CLOSED_RIGHT {
            point <= right
        } else {
            point < right
        }
    }

    /// True iff an interval with the given bounds lies entirely before
    /// `pivot`, i.e. its right bound does not contain the pivot.
    #[inline(always)]
    fn before<K: PartialOrd>(right: K, pivot: K) -> bool {
        if Self::CLOSED_RIGHT {
            right < pivot
        } else {
            right <= pivot
        }
    }

    /// True iff an interval with the given left bound lies entirely after
    /// `pivot`.
    #[inline(always)]
    fn after<K: PartialOrd>(pivot: K, left: K) -> bool {
        if Self::CLOSED_LEFT {
            pivot < left
        } else {
            pivot <= left
        }
    }

    #[inline(always)]
    fn contains<K: PartialOrd + Copy>(left: K, right: K, point: K) -> bool {
        Self::left_contains(left, point) && Self::right_contains(point, right)
    }
}

macro_rules! closure_marker {
    ($(#[$doc:meta])* $name:ident, $mode:expr, $closed_left:expr, $closed_right:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Closure for $name {
            const MODE: ClosureMode = $mode;
            const CLOSED_LEFT: bool = $closed_left;
            const CLOSED_RIGHT: bool = $closed_right;
        }
    };
}

closure_marker!(
    /// Intervals contain their left bound only: `[left, right)`.
    ClosedLeft, ClosureMode::Left, true, false
);
closure_marker!(
    /// Intervals contain their right bound only: `(left, right]`.
    ClosedRight, ClosureMode::Right, false, true
);
closure_marker!(
    /// Intervals contain both bounds: `[left, right]`.
    ClosedBoth, ClosureMode::Both, true, true
);
closure_marker!(
    /// Intervals contain neither bound: `(left, right)`.
    ClosedNeither, ClosureMode::Neither, false, false
);
