//! Dense ranking of segments by revenue.

/// Dense ranks for `values`, descending (1 = highest).
///
/// Tied values share a rank and the next distinct value takes the
/// immediately following integer: [100, 100, 80] ranks as [1, 1, 2].
pub fn dense_rank_desc(values: &[f64]) -> Vec<u32> {
    let mut distinct: Vec<f64> = values.to_vec();
    distinct.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    distinct.dedup();

    values
        .iter()
        .map(|value| {
            let position = distinct
                .iter()
                .position(|candidate| candidate == value)
                .unwrap_or(0);
            position as u32 + 1
        })
        .collect()
}
