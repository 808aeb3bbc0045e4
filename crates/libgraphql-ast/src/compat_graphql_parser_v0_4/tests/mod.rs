mod from_query_tests;
