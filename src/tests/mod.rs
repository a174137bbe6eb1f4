mod error_reporting_tests;
