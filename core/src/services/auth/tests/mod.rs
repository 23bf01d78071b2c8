//! Account lifecycle service tests

mod service_tests;
