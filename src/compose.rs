pub(crate) mod section;
pub(crate) mod text;
