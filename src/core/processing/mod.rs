pub mod crop;
pub mod split;
