pub mod Assets;
pub mod Common;
