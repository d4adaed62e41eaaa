//! Cart Repositories

mod entries;
mod lines;

pub(crate) use entries::PgCartEntriesRepository;
pub(crate) use lines::PgCartLinesRepository;
