pub mod model;
pub mod ports;
pub mod access;
pub mod cohesion;
pub mod foreign;
pub mod verdict;
