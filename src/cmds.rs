pub mod generate;
pub mod locate;
pub mod validate;
