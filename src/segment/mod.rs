pub(crate) mod transformer;
