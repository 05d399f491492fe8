use super::*;

#[test]
fn each_variable() {
  assert_eq!(
    stdout_of("((2,5),6)+(3,3)+(5,0)\nDEG_BY 0\nDEG_BY 1\nDEG_BY 2\n"),
    "6\n5\n0\n"
  );
}

#[test]
fn zero_polynomial() {
  assert_eq!(stdout_of("0\nDEG_BY 3\n"), "-1\n");
}

#[test]
fn leading_zeros_in_index() {
  assert_eq!(stdout_of("((1,4),1)\nDEG_BY 01\nDEG_BY 00\n"), "4\n1\n");
}

#[test]
fn largest_index() {
  assert_eq!(stdout_of("(1,1)\nDEG_BY 4294967295\n"), "0\n");
}

#[test]
fn stack_is_checked_before_argument() {
  assert_eq!(stderr_of("DEG_BY 1\n"), "ERROR 1 STACK UNDERFLOW\n");
  assert_eq!(stderr_of("DEG_BY x\n"), "ERROR 1 STACK UNDERFLOW\n");
}

#[test]
fn invalid_arguments() {
  for script in [
    "1\nDEG_BY -1\n",
    "1\nDEG_BY\n",
    "1\nDEG_BY \n",
    "1\nDEG_BY  1\n",
    "1\nDEG_BY 1 \n",
    "1\nDEG_BY 4294967296\n",
    "1\nDEG_BYx\n",
  ] {
    assert_eq!(stderr_of(script), "ERROR 2 WRONG VARIABLE\n", "{script:?}");
    assert_eq!(stdout_of(script), "");
  }
}
