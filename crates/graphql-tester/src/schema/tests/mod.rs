mod schema_builder_tests;
mod schema_tests;
