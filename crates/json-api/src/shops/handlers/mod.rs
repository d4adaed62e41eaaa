//! Shop Handlers

pub(crate) mod index;
