use super::*;
use scalargrad_core::Sample;

#[test]
fn test_vec_dataset_new() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_vec_dataset_get_valid_index() {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(dataset.get(0).unwrap(), 10);
    assert_eq!(dataset.get(1).unwrap(), 20);
    assert_eq!(dataset.get(2).unwrap(), 30);
}

#[test]
fn test_vec_dataset_get_invalid_index() {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(
        dataset.get(3).unwrap_err(),
        ScalarGradError::IndexOutOfBounds { index: 3, len: 3 }
    );
}

#[test]
fn test_vec_dataset_empty() {
    let dataset: VecDataset<i32> = VecDataset::new(Vec::new());
    assert_eq!(dataset.len(), 0);
    assert!(dataset.is_empty());
    assert!(dataset.get(0).is_err());
    assert!(dataset.to_vec().unwrap().is_empty());
}

#[test]
fn test_vec_dataset_of_samples() {
    let samples = vec![Sample::scalar(0.0, 0.0), Sample::scalar(1.0, 2.0)];
    let dataset = VecDataset::from(samples.clone());
    assert!(!dataset.is_empty());
    assert_eq!(dataset.get(1).unwrap().target, vec![2.0]);
    assert_eq!(dataset.to_vec().unwrap(), samples);
    assert_eq!(dataset.into_inner(), samples);
}
