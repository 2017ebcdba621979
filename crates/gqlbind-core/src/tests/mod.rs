mod config_tests;
mod directive_resolver_tests;
