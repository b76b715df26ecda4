mod equals_ast_tests;
mod node_ref_tests;
