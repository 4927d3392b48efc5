
mod harvest_tests;
mod loading_tests;
