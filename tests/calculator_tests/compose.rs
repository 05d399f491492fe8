use super::*;

#[test]
fn missing_argument() {
  assert_eq!(stderr_of("COMPOSE\n"), "ERROR 1 WRONG COUNT\n");
}

#[test]
fn zero_count_keeps_constant_term() {
  assert_eq!(
    stdout_of("((2,5),6)+(3,3)+(3,0)+(2,0)\nCOMPOSE 0\nPRINT\n"),
    "5\n"
  );
}

#[test]
fn largest_count_underflows() {
  assert_eq!(stderr_of("COMPOSE 4294967295\n"), "ERROR 1 STACK UNDERFLOW\n");
  assert_eq!(stderr_of("COMPOSE 4294967296\n"), "ERROR 1 STACK UNDERFLOW\n");
  assert_eq!(
    stderr_of("COMPOSE 9999999999999999999999999999999\n"),
    "ERROR 1 STACK UNDERFLOW\n"
  );
}

#[test]
fn malformed_counts() {
  for script in [
    "COMPOSE -1\n",
    "COMPOSE sdjkfndsifnaui\n",
    "COMPOSE 543frd34fds4wrt434s\n",
    "COMPOSE  1\n",
    "COMPOSE1\n",
  ] {
    assert_eq!(stderr_of(script), "ERROR 1 WRONG COUNT\n", "{script:?}");
  }
}

#[test]
fn count_is_checked_before_stack() {
  assert_eq!(stderr_of("COMPOSE 0\n"), "ERROR 1 STACK UNDERFLOW\n");
  assert_eq!(stderr_of("COMPOSE x\n"), "ERROR 1 WRONG COUNT\n");
}

#[test]
fn substitutes_polynomial() {
  assert_eq!(stdout_of("(3,3)\n(2,2)\nCOMPOSE 1\nPRINT\n"), "(18,6)\n");
}

#[test]
fn leading_zeros_in_count() {
  assert_eq!(stdout_of("(3,3)\n(2,2)\nCOMPOSE 01\nPRINT\n"), "(18,6)\n");
}

#[test]
fn constant_composes_to_itself() {
  assert_eq!(stdout_of("5\nCOMPOSE 0\nPRINT\n"), "5\n");
  assert_eq!(stdout_of("(1,1)\n5\nCOMPOSE 1\nPRINT\n"), "5\n");
}

#[test]
fn first_substitution_is_directly_below() {
  // x0^2 * x1 with x0 = 2 and x1 = 3
  assert_eq!(stdout_of("3\n2\n((1,1),2)\nCOMPOSE 2\nPRINT\n"), "12\n");
}

#[test]
fn other_polynomials_stay() {
  assert_eq!(
    stdout_of("7\n(1,1)\n(1,2)\nCOMPOSE 1\nPRINT\nPOP\nPRINT\n"),
    "(1,2)\n7\n"
  );
}

#[test]
fn unsubstituted_variables_become_zero() {
  assert_eq!(stdout_of("(1,1)\n((1,1),1)\nCOMPOSE 1\nPRINT\n"), "0\n");
}

#[test]
fn underflow_keeps_stack() {
  let script = "(1,1)\n(2,2)\nCOMPOSE 2\nPRINT\nPOP\nPRINT\n";
  assert_eq!(stderr_of(script), "ERROR 3 STACK UNDERFLOW\n");
  assert_eq!(stdout_of(script), "(2,2)\n(1,1)\n");
}
