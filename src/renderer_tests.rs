use color_eyre::eyre::eyre;

use super::*;

#[test]
fn loop_error_wins_over_exit_error() {
    let res = first_error(Err(eyre!("draw failed")), Err(eyre!("raw mode")));

    assert_eq!(res.unwrap_err().to_string(), "draw failed");
}

#[test]
fn exit_error_surfaces_after_clean_loop() {
    let res = first_error(Ok(()), Err(eyre!("raw mode")));

    assert_eq!(res.unwrap_err().to_string(), "raw mode");
}

#[test]
fn clean_loop_and_exit_succeed() {
    assert!(first_error(Ok(()), Ok(())).is_ok());
}
