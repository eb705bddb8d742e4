//! Input-file generation for the MODFLOW-CFP conduit flow process and node
//! water budget extraction from its list file.

pub mod config;
pub mod domain;
pub mod modules;
