pub mod figures;
pub mod sweep;
