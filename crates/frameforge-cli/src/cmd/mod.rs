pub mod parts;
pub mod predict;
