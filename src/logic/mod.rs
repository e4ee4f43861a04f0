pub mod companion;
pub mod placement;
