//! Tests for the geographic primitives

mod distance_tests;
