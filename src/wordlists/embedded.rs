//! Embedded word list
//!
//! Themed words and hints compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/themed.rs"));
