pub(crate) mod bill;
pub(crate) mod config;
pub(crate) mod denomination;
pub(crate) mod product;
