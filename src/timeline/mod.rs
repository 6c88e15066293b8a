pub(crate) mod objects;
