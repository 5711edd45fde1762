mod metadata_tests;
mod validate_tests;
