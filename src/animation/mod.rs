pub(crate) mod clock;
pub(crate) mod pose;
pub(crate) mod ticker;
