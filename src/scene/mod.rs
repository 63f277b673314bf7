pub(crate) mod catalog;
pub(crate) mod lineup;
pub(crate) mod record;
