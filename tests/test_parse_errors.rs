use fanlog::{FanLogError, Logger};
use log::*;

#[test]
fn parse_errors_logger() {
    let result = Logger::with_str("loud").check_parse_error();
    assert!(result.is_err());
    let error = result.err().unwrap();
    println!("err: {}", error);
    match error {
        FanLogError::LevelFilter(s) => assert!(s.contains("loud")),
        _ => panic!("wrong error from parsing"),
    }

    // "warning" is accepted as an alias for "warn"
    Logger::with_str("warning")
        .check_parse_error()
        .unwrap()
        .start()
        .unwrap();
    warn!("logging works");
    info!("This is an info message - you must not see it!");
}
