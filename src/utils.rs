//! Some utility methods.
