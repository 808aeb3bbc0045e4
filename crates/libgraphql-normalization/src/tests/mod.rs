mod directive_include_skip_tests;
mod normalization_proptest_tests;
mod parallel_normalization_tests;
mod selection_tests;
mod variables_extraction_tests;
