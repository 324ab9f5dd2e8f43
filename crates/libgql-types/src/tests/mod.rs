mod descriptor_tests;
mod loader_tests;
mod schema_config_tests;
