use std::sync::Mutex;

use stacktrim::{CapturedError, ErrorSink, FnSink, Guard, Traced};

#[derive(Default)]
struct FakeLog {
    sent: Mutex<Vec<String>>,
}

impl ErrorSink for FakeLog {
    fn error(&self, message: &str) {
        self.sent.lock().unwrap().push(message.to_string());
    }
}

fn failing() -> Result<u32, CapturedError> {
    Err(CapturedError::new("JobError", "It is intended").with_frames([
        "bin/worker.rs:9:in `main'",
        "src/jobs.rs:33:in `sync'",
        "vendor/retry.rs:58:in `attempt'",
    ]))
}

#[test]
fn success_passes_through_untouched() {
    let log = FakeLog::default();
    let outcome = Guard::new().log(&log).run(|| Ok::<_, CapturedError>(7));
    assert_eq!(outcome, Ok(Some(7)));
    assert!(log.sent.lock().unwrap().is_empty());
}

#[test]
fn swallowed_failure_is_routed_to_the_sink() {
    let log = FakeLog::default();
    let outcome = Guard::new().swallow(true).log(&log).run(failing);
    assert_eq!(outcome, Ok(None));

    let sent = log.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].starts_with("JobError: It is intended\n\t"));
    assert!(sent[0].contains("intended"));
}

#[test]
fn mine_filter_trims_the_routed_trace() {
    let log = FakeLog::default();
    let _ = Guard::new().swallow(true).mine("src/").log(&log).run(failing);

    let sent = log.sent.lock().unwrap();
    assert!(sent[0].contains("src/jobs.rs"));
    assert!(sent[0].contains("bin/worker.rs"));
    assert!(!sent[0].contains("vendor/retry.rs"));
}

#[test]
fn unswallowed_failure_is_reraised_verbatim() {
    let log = FakeLog::default();
    let error = Guard::new().log(&log).run(failing).unwrap_err();

    assert_eq!(error.kind(), "JobError");
    assert_eq!(error.message(), "It is intended");
    assert_eq!(error.frames().len(), 3);
    // Routing happened before the re-raise.
    assert_eq!(log.sent.lock().unwrap().len(), 1);
}

#[test]
fn guard_without_sink_falls_back_to_stdout() {
    let outcome = Guard::new().swallow(true).mine("jobs").run(failing);
    assert_eq!(outcome, Ok(None));
}

#[test]
fn closure_sink_receives_the_rendered_text() {
    let seen = Mutex::new(Vec::new());
    let sink = FnSink::new(|message: &str| seen.lock().unwrap().push(message.to_string()));

    let outcome = Guard::new().swallow(true).log(&sink).run(failing);
    assert_eq!(outcome, Ok(None));

    let seen = seen.into_inner().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains("intended"));
}

#[test]
fn guard_defaults_keep_the_full_trace() {
    let log = FakeLog::default();
    let _ = Guard::new().swallow(true).log(&log).run(failing);

    let sent = log.sent.lock().unwrap();
    assert!(sent[0].contains("vendor/retry.rs"));
}
