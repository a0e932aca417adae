pub mod embed;
pub mod extract;
