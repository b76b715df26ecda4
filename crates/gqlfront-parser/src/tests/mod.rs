mod lexer_tests;
mod parser_definition_tests;
mod parser_extension_tests;
mod parser_operation_tests;
mod parser_type_ref_tests;
