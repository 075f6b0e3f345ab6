pub mod logic;
pub mod parameters;
pub mod utils;
pub mod warnings;
