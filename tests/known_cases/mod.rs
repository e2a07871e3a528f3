//! End-to-end checks of individual, fully determined fixtures of the standard run

use rstest::{fixture, rstest};
use tempfile::TempDir;

use crate::support::{generate_into, read_answer, read_tokens};

/// One full run shared by the cases below; the checked fixtures do not depend on the seed.
#[fixture]
fn generated() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    generate_into(dir.path(), 1);
    dir
}

#[rstest]
fn first_case_is_the_classic_two_by_two(generated: TempDir) {
    let dat = std::fs::read_to_string(generated.path().join("001.dat")).unwrap();

    assert_eq!(dat, "2 1 2 3 4\n");
    assert_eq!(read_answer(generated.path(), 1), "-2\n");
}

#[rstest]
fn all_ones_two_by_two_is_singular(generated: TempDir) {
    assert_eq!(read_tokens(generated.path(), 3), vec![2, 1, 1, 1, 1]);
    assert_eq!(read_answer(generated.path(), 3), "0\n");
}

#[rstest]
fn diagonal_of_size_four_alternates(generated: TempDir) {
    // six known cases come first
    assert_eq!(
        read_tokens(generated.path(), 7),
        vec![4, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2]
    );
    assert_eq!(read_answer(generated.path(), 7), "4\n");
}

#[rstest]
#[case(1, "-2")]
#[case(2, "6")]
#[case(3, "0")]
#[case(4, "1")]
#[case(5, "6")]
#[case(6, "0")]
fn known_answers(generated: TempDir, #[case] index: u16, #[case] expected: &str) {
    assert_eq!(read_answer(generated.path(), index).trim_end(), expected);
}

#[rstest]
#[case::identity_4(8, 4)]
#[case::identity_100(29, 100)]
#[case::identity_200(33, 200)]
fn identity_cases_sit_at_fixed_indices(
    generated: TempDir,
    #[case] index: u16,
    #[case] size: usize,
) {
    let tokens = read_tokens(generated.path(), index);

    assert_eq!(tokens[0] as usize, size);
    assert_eq!(tokens[1..].iter().sum::<i64>(), size as i64);
    assert_eq!(read_answer(generated.path(), index), "1\n");
}
