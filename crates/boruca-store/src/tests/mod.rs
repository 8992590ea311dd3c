mod http_source_tests;
