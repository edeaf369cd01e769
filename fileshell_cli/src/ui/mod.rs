pub mod printer;
pub mod prompt;
