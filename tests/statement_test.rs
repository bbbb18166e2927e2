mod common;
use common::*;

#[test]
fn test_let_and_print() {
    assert_eq!(session(&["10 LET X = 5", "20 PRINT X * 2", "RUN"]), "10\n");
}

#[test]
fn test_goto_skips_ahead() {
    assert_eq!(
        session(&["10 GOTO 30", "20 PRINT 1", "30 PRINT 2", "RUN"]),
        "2\n"
    );
}

#[test]
fn test_countdown_loop() {
    assert_eq!(
        session(&[
            "10 LET X = 3",
            "20 PRINT X",
            "30 LET X = X - 1",
            "40 IF X > 0 THEN 20",
            "RUN",
        ]),
        "3\n2\n1\n"
    );
}

#[test]
fn test_if_taken_jump_skips_assignment() {
    assert_eq!(
        session(&[
            "10 LET X = 1",
            "20 IF X = 1 THEN 40",
            "30 LET X = 2",
            "40 PRINT X",
            "RUN",
        ]),
        "1\n"
    );
}

#[test]
fn test_if_false_never_checks_target() {
    assert_eq!(
        session(&["10 IF 1 > 2 THEN 99", "20 PRINT 4", "RUN"]),
        "4\n"
    );
}

#[test]
fn test_end_stops_the_run() {
    assert_eq!(
        session(&["10 PRINT 1", "20 END", "30 PRINT 2", "RUN"]),
        "1\n"
    );
}

#[test]
fn test_rem_does_nothing() {
    assert_eq!(
        session(&["10 REM say something", "20 PRINT 7", "RUN"]),
        "7\n"
    );
}

#[test]
fn test_goto_undefined_line() {
    assert_eq!(session(&["10 GOTO 99", "RUN"]), "UNDEFINED LINE IN 10\n");
}

#[test]
fn test_goto_zero() {
    assert_eq!(
        session(&["10 GOTO 0", "RUN"]),
        "SYNTAX ERROR IN 10; INVALID LINE NUMBER\n"
    );
}

#[test]
fn test_variables_persist_across_runs() {
    assert_eq!(session(&["10 PRINT A", "LET A = 6", "RUN"]), "6\n");
}

#[test]
fn test_error_reports_the_running_line() {
    assert_eq!(
        session(&["10 PRINT 1", "20 PRINT Z", "RUN"]),
        "1\nUNDEFINED VARIABLE IN 20 (9..10)\n"
    );
}
