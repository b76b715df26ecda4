mod check_tests;
mod input_files_tests;
mod stats_tests;
