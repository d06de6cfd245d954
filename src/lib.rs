//! godclass library: God Class detection (WMC, TCC, ATFD) over a resolved class model.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod server;
