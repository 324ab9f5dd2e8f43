mod to_array_tests;
