#![cfg(feature = "serde")]

use stacktrim::{CapturedError, Traced};

#[test]
fn captured_error_round_trips_through_json() {
    let err = CapturedError::new("QueryError", "connection reset")
        .with_frames(["bin/server.rs:12:in `main'", "src/db.rs:41:in `query'"]);

    let json = serde_json::to_string(&err).unwrap();
    assert!(json.contains("QueryError"));

    let back: CapturedError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
    assert_eq!(back.frames()[0], "bin/server.rs:12:in `main'");
}
