pub mod Breaker;
