//! Property-based tests for the title transformer
