mod tally_tests;
