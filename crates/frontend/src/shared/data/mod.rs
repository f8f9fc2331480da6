//! Static sample content of the prototype.

pub mod sample;
