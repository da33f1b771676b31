pub mod common;
pub mod roots_of_unity;
