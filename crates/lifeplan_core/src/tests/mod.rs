//! Scenario and integration tests for the projection engine
//!
//! Leaf modules keep their own unit tests inline; the modules here
//! exercise whole operations end to end.

mod projection;
