//! Shared test utilities for deck-store unit tests.
