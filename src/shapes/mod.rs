//! Shape registry, renderer-facing descriptors and static path assets.

pub(crate) mod assets;
pub(crate) mod descriptor;
pub(crate) mod registry;
