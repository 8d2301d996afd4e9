mod fragment_spread_tests;
