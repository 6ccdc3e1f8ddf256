//! Host-based tests for the infrared remote core
//!
//! Everything here runs against the mock HAL with its virtual
//! microsecond clock; no hardware or time driver is involved.

#[cfg(test)]
mod scenario_tests;

#[cfg(test)]
mod encoder_props;

#[cfg(test)]
mod async_tests;
