pub(crate) mod private;
pub(crate) mod string;
pub(crate) mod unicode;
pub(crate) mod utf8;
