//! Command implementations for taskfile-cli

pub mod init;
pub mod list;
pub mod show;

pub use init::run_init;
pub use list::run_list;
pub use show::run_show;
