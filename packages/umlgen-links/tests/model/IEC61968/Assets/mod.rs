pub mod Asset;
