//! Shops

mod handlers;

pub(crate) use handlers::*;
