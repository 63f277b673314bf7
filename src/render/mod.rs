pub(crate) mod canvas;
pub(crate) mod card;
pub(crate) mod frame;
pub(crate) mod starting6;
