//! Tests for the verification store and sweeper
