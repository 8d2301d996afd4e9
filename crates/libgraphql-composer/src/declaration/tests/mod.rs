mod json_loader_tests;
