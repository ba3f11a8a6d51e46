//! Property-based tests

mod pagination_proptest;
