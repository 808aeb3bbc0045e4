mod printer_proptest_tests;
mod printer_tests;
