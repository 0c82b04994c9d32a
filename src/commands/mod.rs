//! Command implementations

pub mod index;
pub mod init;
pub mod list;
pub mod new;
