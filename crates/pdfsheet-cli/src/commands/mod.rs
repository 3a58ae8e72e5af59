pub mod extract;
pub mod inspect;
pub mod tables;
pub mod text;
