mod transcript_tests;
