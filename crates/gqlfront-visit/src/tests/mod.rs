mod contextual_visitor_tests;
mod document_schema_tests;
mod parallel_visitor_tests;
mod transformer_tests;
mod traversing_visitor_tests;
mod visitor_tests;
