//! The two opposing sides and per-side data storage.
//!
//! ## Side
//!
//! Senet is strictly a two-player game: Light and Dark. Which human (or AI)
//! controls Dark is only settled by the start protocol, so the engine talks
//! in sides throughout and leaves the side-to-player mapping to the caller.
//!
//! ## SideMap
//!
//! Two-slot per-side storage with `Index<Side>` access, for things like
//! borne-off piece lists.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competing sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    /// The opposing side.
    ///
    /// ```
    /// use senet_engine::Side;
    ///
    /// assert_eq!(Side::Light.opponent(), Side::Dark);
    /// assert_eq!(Side::Dark.opponent(), Side::Light);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Both sides, Light first.
    #[must_use]
    pub const fn both() -> [Side; 2] {
        [Side::Light, Side::Dark]
    }

    const fn index(self) -> usize {
        match self {
            Side::Light => 0,
            Side::Dark => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Light => write!(f, "Light"),
            Side::Dark => write!(f, "Dark"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use senet_engine::{Side, SideMap};
///
/// let mut borne_off: SideMap<u32> = SideMap::with_value(0);
/// borne_off[Side::Dark] += 1;
///
/// assert_eq!(borne_off[Side::Light], 0);
/// assert_eq!(borne_off[Side::Dark], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Light), factory(Side::Dark)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's entry.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's entry.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, Light first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::both().into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
