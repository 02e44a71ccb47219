//! IDE feature tests
//!
//! Tests for:
//! - Snapshot replacement on document events
//! - Cursor → node reveal and node → cursor activation
//! - Outline rendering
