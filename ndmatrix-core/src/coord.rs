//! Coordinate keys for N-dimensional cell addressing
//!
//! A [`Coord`] is the fixed-arity tuple of unsigned integers used as the key
//! into a matrix backing store. Equality, ordering, and hashing are
//! component-wise in dimension order.

use core::hash::{BuildHasherDefault, Hasher};
use core::ops::Index;

/// Fixed-arity cell address in N-dimensional space
///
/// An immutable value type: two coordinates are equal iff all `N` components
/// are equal. Construct one from a plain array, which also gives callers a
/// statically checked arity:
///
/// ```
/// use ndmatrix_core::Coord;
///
/// let coord = Coord::from([3, 7]);
/// assert_eq!(coord[0], 3);
/// assert_eq!(coord.arity(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord<const N: usize>([usize; N]);

impl<const N: usize> Coord<N> {
    /// Create a coordinate from its components, in dimension order
    pub const fn new(components: [usize; N]) -> Self {
        Self(components)
    }

    /// Number of dimensions this coordinate addresses
    pub const fn arity(&self) -> usize {
        N
    }

    /// Component along `axis`, or `None` when `axis >= N`
    pub fn get(&self, axis: usize) -> Option<usize> {
        self.0.get(axis).copied()
    }

    /// All components, in dimension order
    pub const fn components(&self) -> &[usize; N] {
        &self.0
    }

    /// Consume the coordinate into its component array
    pub const fn into_components(self) -> [usize; N] {
        self.0
    }

    /// Iterate components in dimension order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl<const N: usize> From<[usize; N]> for Coord<N> {
    fn from(components: [usize; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> Index<usize> for Coord<N> {
    type Output = usize;

    fn index(&self, axis: usize) -> &usize {
        &self.0[axis]
    }
}

/// FNV-1a offset basis
const FNV_OFFSET: u64 = 2166136261;
/// FNV-1a prime
const FNV_PRIME: u64 = 16777619;

/// FNV-1a hasher used as the default hasher for hash-backed stores
///
/// A streaming hash keeps component order significant: the internal state
/// evolves between writes, so `(0, 1)` and `(1, 0)` hash differently. This
/// replaces the order-insensitive XOR-of-component-hashes combiner sometimes
/// seen in tuple hashing, which collides on any permutation of equal-typed
/// components.
#[derive(Debug, Clone)]
pub struct CoordHasher {
    state: u64,
}

impl Default for CoordHasher {
    fn default() -> Self {
        Self { state: FNV_OFFSET }
    }
}

impl Hasher for CoordHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= byte as u64;
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }
}

/// Build-hasher producing [`CoordHasher`] instances
pub type CoordBuildHasher = BuildHasherDefault<CoordHasher>;

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Coord<N> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;

        let mut tuple = serializer.serialize_tuple(N)?;
        for component in &self.0 {
            tuple.serialize_element(component)?;
        }
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Coord<N> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct CoordVisitor<const N: usize>;

        impl<'de, const N: usize> serde::de::Visitor<'de> for CoordVisitor<N> {
            type Value = Coord<N>;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "a sequence of {N} coordinate components")
            }

            fn visit_seq<A>(self, mut seq: A) -> core::result::Result<Coord<N>, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut components = [0usize; N];
                for (axis, slot) in components.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(axis, &self))?;
                }
                Ok(Coord::new(components))
            }
        }

        deserializer.deserialize_tuple(N, CoordVisitor)
    }
}
