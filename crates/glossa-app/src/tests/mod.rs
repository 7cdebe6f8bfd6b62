mod state_tests;
mod support;
