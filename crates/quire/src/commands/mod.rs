pub mod check;
pub mod features;
pub mod init;
