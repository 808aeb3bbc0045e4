mod end_to_end_tests;
