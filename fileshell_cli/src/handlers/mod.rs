pub mod compress;
pub mod crypt;
pub mod files;
pub mod memory;
pub mod open;
pub mod process;
