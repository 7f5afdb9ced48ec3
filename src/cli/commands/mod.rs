pub mod build;
mod command_result;
pub mod helper;
pub mod init;
pub mod inspect;
pub mod lookup;

pub use command_result::*;
