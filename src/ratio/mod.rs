//! Ratio identifiers and the normalized/export coordinate spaces they define.

pub(crate) mod resolver;
pub(crate) mod transform;
