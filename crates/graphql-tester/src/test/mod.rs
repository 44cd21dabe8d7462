mod fixture_tests;
