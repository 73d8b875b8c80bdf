pub mod scoring_testkit;
