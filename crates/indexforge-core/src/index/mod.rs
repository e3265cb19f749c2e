//! Index keys and index sets.
//!
//! An index set is the ordered, finite space of keys over which a component
//! organizes its entries. A scalar component is the degenerate case of an
//! index set holding exactly one [`IndexKey::Scalar`] member.

mod key;
mod set;

pub use key::IndexKey;
pub use set::IndexSet;

#[cfg(test)]
mod tests;
