pub(crate) mod builders;
pub(crate) mod content;
pub(crate) mod output;
