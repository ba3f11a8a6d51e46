//! Integration tests against the in-process router
