//! Tests for the IVR flow service

#[cfg(test)]
mod service_tests;
