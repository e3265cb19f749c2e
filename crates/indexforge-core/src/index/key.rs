//! Index key values.

use std::fmt;
use std::sync::Arc;

/// A single hashable index value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum IndexKey {
    /// The implicit index of a scalar component.
    Scalar,
    /// Integer index.
    Int(i64),
    /// String index.
    Str(Arc<str>),
    /// Multi-dimensional index, e.g. a member of a Cartesian product.
    Tuple(Vec<IndexKey>),
}

impl IndexKey {
    /// Returns true if this is the scalar sentinel.
    pub fn is_scalar(&self) -> bool {
        matches!(self, IndexKey::Scalar)
    }

    /// Number of dimensions this key spans.
    pub fn dimen(&self) -> usize {
        match self {
            IndexKey::Scalar => 0,
            IndexKey::Tuple(parts) => parts.len(),
            _ => 1,
        }
    }

    /// Joins two keys into one flat key.
    ///
    /// Scalar parts vanish; a single remaining part stays a plain key.
    pub(crate) fn join(&self, other: &IndexKey) -> IndexKey {
        let mut parts: Vec<IndexKey> = Vec::with_capacity(self.dimen() + other.dimen());
        for key in [self, other] {
            match key {
                IndexKey::Scalar => {}
                IndexKey::Tuple(inner) => parts.extend(inner.iter().cloned()),
                single => parts.push(single.clone()),
            }
        }
        match parts.len() {
            0 => IndexKey::Scalar,
            1 => parts.pop().unwrap_or(IndexKey::Scalar),
            _ => IndexKey::Tuple(parts),
        }
    }
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKey::Scalar => write!(f, "None"),
            IndexKey::Int(v) => write!(f, "{v}"),
            IndexKey::Str(s) => write!(f, "'{s}'"),
            IndexKey::Tuple(parts) => {
                write!(f, "(")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{part}")?;
                }
                write!(f, ")")
            }
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for IndexKey {
                fn from(v: $t) -> Self {
                    IndexKey::Int(v as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for IndexKey {
    fn from(s: &str) -> Self {
        IndexKey::Str(Arc::from(s))
    }
}

impl From<String> for IndexKey {
    fn from(s: String) -> Self {
        IndexKey::Str(Arc::from(s))
    }
}

impl From<()> for IndexKey {
    fn from(_: ()) -> Self {
        IndexKey::Scalar
    }
}

impl<A, B> From<(A, B)> for IndexKey
where
    A: Into<IndexKey>,
    B: Into<IndexKey>,
{
    fn from((a, b): (A, B)) -> Self {
        IndexKey::Tuple(vec![a.into(), b.into()])
    }
}

impl<A, B, C> From<(A, B, C)> for IndexKey
where
    A: Into<IndexKey>,
    B: Into<IndexKey>,
    C: Into<IndexKey>,
{
    fn from((a, b, c): (A, B, C)) -> Self {
        IndexKey::Tuple(vec![a.into(), b.into(), c.into()])
    }
}
