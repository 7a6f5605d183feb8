use chrono::DateTime;
use log::*;
use std::path::Path;
use std::thread::JoinHandle;

const NO_OF_THREADS: usize = 5;
const NO_OF_LOGLINES_PER_THREAD: usize = 2_000;

#[test]
fn multi_threaded() {
    let dir = tempfile::tempdir().unwrap();
    let f1 = dir.path().join("one.log");
    let f2 = dir.path().join("two.log");

    let handle = fanlog::Logger::with_str("debug")
        .log_to_files(vec![f1.clone(), f2.clone()])
        .start()
        .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e));
    info!("create a considerable number of log lines with several threads, verify the log");

    wait_for_workers_to_close(start_worker_threads(NO_OF_THREADS));

    handle.close().unwrap();
    verify_logs(&f1, &f2);
}

// Starts given number of worker threads and lets each execute `do_work`
fn start_worker_threads(no_of_workers: usize) -> Vec<JoinHandle<u8>> {
    let mut worker_handles: Vec<JoinHandle<u8>> = Vec::with_capacity(no_of_workers);
    for thread_number in 0..no_of_workers {
        worker_handles.push(
            std::thread::Builder::new()
                .name(thread_number.to_string())
                .spawn(move || {
                    do_work(thread_number);
                    0
                })
                .unwrap(),
        );
    }
    worker_handles
}

fn do_work(thread_number: usize) {
    for idx in 0..NO_OF_LOGLINES_PER_THREAD {
        debug!("({})  writing out line number {}", thread_number, idx);
    }
}

fn wait_for_workers_to_close(worker_handles: Vec<JoinHandle<u8>>) {
    for worker_handle in worker_handles {
        worker_handle
            .join()
            .unwrap_or_else(|e| panic!("Joining worker thread failed: {:?}", e));
    }
}

fn verify_logs(f1: &Path, f2: &Path) {
    let b1 = std::fs::read(f1).unwrap();
    let b2 = std::fs::read(f2).unwrap();
    assert_eq!(b1, b2, "both files must carry identical content");

    let content = String::from_utf8(b1).unwrap();
    let mut line_count = 0;
    for line in content.lines() {
        line_count += 1;
        // every line is a complete record: timestamp, severity, message
        let mut tokens = line.splitn(3, ' ');
        let ts = tokens.next().unwrap();
        assert!(
            DateTime::parse_from_rfc3339(ts).is_ok(),
            "bad line: {}",
            line
        );
        let severity = tokens.next().unwrap();
        assert!(
            severity == "INFO" || severity == "DEBUG",
            "bad line: {}",
            line
        );
        assert!(tokens.next().is_some(), "bad line: {}", line);
    }
    assert_eq!(line_count, 1 + NO_OF_THREADS * NO_OF_LOGLINES_PER_THREAD);
}
