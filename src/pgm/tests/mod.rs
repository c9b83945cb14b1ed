#![cfg(test)]

mod raster_tests;
pub(crate) mod test_utils;
