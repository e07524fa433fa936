//! Command implementations for OxiVLC CLI.

pub mod pack;
pub mod unpack;

pub use pack::cmd_pack;
pub use unpack::cmd_unpack;
