//! Integration tests driving widgets the way a host would
