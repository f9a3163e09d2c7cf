pub(crate) mod adjust;
pub(crate) mod arithmetic;
pub(crate) mod resolution;
