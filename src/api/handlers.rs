pub mod garden;
pub mod vegetables;
