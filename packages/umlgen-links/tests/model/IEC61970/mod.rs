pub mod Core;
pub mod SCADA;
pub mod Wires;
