//! Workspace-level integration tests for BigMul. See `tests/`.
