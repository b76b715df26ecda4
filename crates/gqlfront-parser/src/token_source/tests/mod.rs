mod str_token_source_position_tests;
