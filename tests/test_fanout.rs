use log::*;

#[test]
fn fan_out_to_three_files() {
    let dir = tempfile::tempdir().unwrap();
    let f1 = dir.path().join("a.log");
    let f2 = dir.path().join("b.log");
    let f3 = dir.path().join("c.log");

    let handle = fanlog::Logger::with_str("info")
        .log_to_files(vec![f1.clone(), f2.clone(), f3.clone()])
        .start()
        .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e));

    error!("This is an error message");
    warn!("This is a warning");
    info!("This is an info message");
    debug!("This is a debug message - you must not see it!");
    trace!("This is a trace message - you must not see it!");

    handle.flush().unwrap();
    handle.close().unwrap();
    // second close is a no-op
    handle.close().unwrap();

    let b1 = std::fs::read(&f1).unwrap();
    let b2 = std::fs::read(&f2).unwrap();
    let b3 = std::fs::read(&f3).unwrap();
    assert!(!b1.is_empty(), "a.log is empty");
    assert_eq!(b1, b2, "a.log != b.log");
    assert_eq!(b2, b3, "b.log != c.log");

    let content = String::from_utf8(b1).unwrap();
    assert_eq!(content.lines().count(), 3);
    assert!(content.contains(" ERROR This is an error message"));
    assert!(content.contains(" WARN This is a warning"));
    assert!(content.contains(" INFO This is an info message"));
    assert!(!content.contains("debug message"));
    assert!(!content.contains("trace message"));

    // after close, the files no longer grow; stderr still gets the line
    let len_before = std::fs::metadata(&f1).unwrap().len();
    info!("This message is written after close - only to stderr");
    assert_eq!(std::fs::metadata(&f1).unwrap().len(), len_before);
}
