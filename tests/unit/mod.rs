//! Unit test modules.

mod climate_test;
mod display_properties_test;
mod journal_test;
