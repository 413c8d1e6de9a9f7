use crate::error::ReportError;

/// Arithmetic mean, or `0.0` for no values.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle value of the sorted input; the mean of the two middle values when
/// the count is even.
pub fn median(values: &[f64]) -> Result<f64, ReportError> {
    if values.is_empty() {
        return Err(ReportError::EmptyDataset);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[middle])
    } else {
        Ok((sorted[middle - 1] + sorted[middle]) / 2.0)
    }
}
