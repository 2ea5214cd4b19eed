pub(crate) mod bezier;
pub(crate) mod limb;
