//! Unit tests for dense ranking

use promotrix::analytics::dense_rank_desc;

#[test]
fn ties_share_rank_without_gaps() {
    assert_eq!(dense_rank_desc(&[100.0, 100.0, 80.0]), vec![1, 1, 2]);
}

#[test]
fn highest_revenue_ranks_first() {
    assert_eq!(dense_rank_desc(&[80.0, 100.0, 100.0, 50.0]), vec![2, 1, 1, 3]);
}

#[test]
fn single_segment_ranks_one() {
    assert_eq!(dense_rank_desc(&[42.0]), vec![1]);
}

#[test]
fn empty_input_yields_empty_ranks() {
    assert!(dense_rank_desc(&[]).is_empty());
}

#[test]
fn all_tied_share_rank_one() {
    assert_eq!(dense_rank_desc(&[10.0, 10.0, 10.0]), vec![1, 1, 1]);
}
