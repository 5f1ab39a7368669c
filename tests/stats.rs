use approx::assert_abs_diff_eq;
use kira_compound_usage::math::stats::{average_ranks, mann_whitney_u, mean};

#[test]
fn mean_basic_and_empty() {
    assert_abs_diff_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
    assert_eq!(mean(&[]), 0.0);
}

#[test]
fn average_ranks_with_ties() {
    let (ranks, tie_term) = average_ranks(&[3.0, 1.0, 3.0, 2.0]);
    assert_eq!(ranks, vec![3.5, 1.0, 3.5, 2.0]);
    assert_abs_diff_eq!(tie_term, 6.0);
}

#[test]
fn mann_whitney_separated_samples() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [6.0, 7.0, 8.0, 9.0, 10.0];
    let res = mann_whitney_u(&x, &y);
    assert_abs_diff_eq!(res.statistic, 0.0);
    assert_abs_diff_eq!(res.pvalue, 0.012185780355344818, epsilon = 1e-9);

    let rev = mann_whitney_u(&y, &x);
    assert_abs_diff_eq!(rev.statistic, 25.0);
    assert_abs_diff_eq!(rev.pvalue, res.pvalue, epsilon = 1e-12);
}

#[test]
fn mann_whitney_with_ties() {
    let res = mann_whitney_u(&[0.0, 1.0, 2.0, 2.0, 3.0], &[2.0, 3.0, 3.0, 4.0]);
    assert_abs_diff_eq!(res.statistic, 3.0);
    assert_abs_diff_eq!(res.pvalue, 0.09934224785346527, epsilon = 1e-9);
}

#[test]
fn mann_whitney_two_by_two_tied_groups() {
    let res = mann_whitney_u(&[1.0, 1.0], &[5.0, 5.0]);
    assert_abs_diff_eq!(res.statistic, 0.0);
    assert!(res.pvalue < 1.0);
    assert_abs_diff_eq!(res.pvalue, 0.1939308522824107, epsilon = 1e-9);
}

#[test]
fn mann_whitney_empty_sample_sentinel() {
    let res = mann_whitney_u(&[], &[1.0, 2.0]);
    assert_eq!(res.statistic, 0.0);
    assert_eq!(res.pvalue, 1.0);

    let res = mann_whitney_u(&[1.0], &[]);
    assert_eq!(res.statistic, 0.0);
    assert_eq!(res.pvalue, 1.0);
}

#[test]
fn mann_whitney_all_identical_sentinel() {
    let res = mann_whitney_u(&[2.0, 2.0, 2.0], &[2.0, 2.0]);
    assert_eq!(res.statistic, 3.0);
    assert_eq!(res.pvalue, 1.0);

    let res = mann_whitney_u(&[0.0], &[0.0]);
    assert_eq!(res.statistic, 0.5);
    assert_eq!(res.pvalue, 1.0);
}

#[test]
fn mann_whitney_pvalue_never_exceeds_one() {
    let res = mann_whitney_u(&[1.0, 2.0], &[1.0, 2.0]);
    assert!(res.pvalue.is_finite());
    assert_eq!(res.pvalue, 1.0);
    assert_abs_diff_eq!(res.statistic, 2.0);
}
