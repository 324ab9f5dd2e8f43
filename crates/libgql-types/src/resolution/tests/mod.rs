mod lazy_resolution_tests;
