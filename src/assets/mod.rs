mod color;
pub(crate) mod decode;
pub(crate) mod provider;
pub(crate) mod slug;
pub(crate) mod text;
