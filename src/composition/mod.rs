pub(crate) mod dve;
