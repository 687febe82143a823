pub(crate) mod defaults;
