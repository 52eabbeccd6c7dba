pub mod compare;
pub mod phrases;
