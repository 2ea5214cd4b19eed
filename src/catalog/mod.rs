pub(crate) mod builtin;
pub(crate) mod model;
pub(crate) mod scope;
pub(crate) mod store;
