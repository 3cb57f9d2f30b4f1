//! Integration tests for the Array1, Array2 and RaggedArray containers.

use array_layouts::error::IndexError;
use array_layouts::math::{Array1, Array2, Axis, RaggedArray};

// ---------------------------------------------------------------------------
// Array1 basics
// ---------------------------------------------------------------------------

#[test]
fn array1_from_vec_and_len() {
    let a = Array1::from_vec(vec![1, 2, 3]);
    assert_eq!(a.len(), 3);
    assert_eq!(a.shape(), (3,));
    assert!(!a.is_empty());
}

#[test]
fn array1_zeros() {
    let a: Array1<i32> = Array1::zeros(5);
    assert_eq!(a.len(), 5);
    for v in a.iter() {
        assert_eq!(*v, 0);
    }
}

#[test]
fn array1_indexing_and_checked_get() {
    let mut a: Array1<i32> = vec![10, 20, 30].into();
    assert_eq!(a[2], 30);
    a[0] = 11;
    assert_eq!(*a.get(0).unwrap(), 11);
    assert_eq!(a.get(3), Err(IndexError::OutOfRange { index: 3, len: 3 }));
}

#[test]
fn array1_iter_mut() {
    let mut a: Array1<i32> = (1..=3).collect();
    for v in a.iter_mut() {
        *v *= 10;
    }
    assert_eq!(a.as_slice(), &[10, 20, 30]);
    assert_eq!(Vec::from(a), vec![10, 20, 30]);
}

#[test]
fn array1_display() {
    let a = Array1::from_vec(vec![7, 8, 9]);
    assert_eq!(a.to_string(), "[7, 8, 9]");
}

// ---------------------------------------------------------------------------
// End-relative access
// ---------------------------------------------------------------------------

#[test]
fn from_end_one_is_last_element() {
    let a: Array1<i32> = (1..=9).collect();
    assert_eq!(*a.from_end(1).unwrap(), 9);
    assert_eq!(*a.from_end(9).unwrap(), 1);
}

#[test]
fn from_end_on_empty_sequence_errors() {
    let a: Array1<i32> = Array1::from_vec(vec![]);
    assert_eq!(
        a.from_end(1),
        Err(IndexError::FromEndOutOfRange { offset: 1, len: 0 })
    );
}

#[test]
fn from_end_past_start_errors() {
    let a: Array1<i32> = (1..=9).collect();
    assert!(a.from_end(10).is_err());
}

#[test]
fn suffix_keeps_original_order() {
    let a: Array1<i32> = (1..=9).collect();
    assert_eq!(a.suffix(3).unwrap().to_vec(), vec![7, 8, 9]);
}

#[test]
fn suffix_longer_than_sequence_errors() {
    let a: Array1<i32> = (1..=9).collect();
    let err = a.suffix(10).unwrap_err();
    assert_eq!(
        err,
        IndexError::SuffixTooLong {
            requested: 10,
            len: 9
        }
    );
    assert!(err.to_string().contains("length 9"));
}

// ---------------------------------------------------------------------------
// Array2 basics
// ---------------------------------------------------------------------------

#[test]
fn array2_zeros_shape() {
    let a: Array2<i32> = Array2::zeros(2, 3).unwrap();
    assert_eq!(a.shape(), (2, 3));
    assert_eq!(a.len_of(Axis::Row), 2);
    assert_eq!(a.len_of(Axis::Column), 3);
    assert!(a.as_slice().iter().all(|&v| v == 0));
}

#[test]
fn array2_from_shape_vec_mismatch_errors() {
    let result = Array2::<i32>::from_shape_vec((2, 3), vec![1, 2, 3]);
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "invalid shape (2, 3) for buffer of length 3");
}

#[test]
fn array2_is_row_major() {
    let a = Array2::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a[(1, 0)], 4);
    assert_eq!(a.row_slice(1), &[4, 5, 6]);
    let rows: Vec<&[i32]> = a.rows().collect();
    assert_eq!(rows, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);
}

#[test]
fn array2_get_mut_in_place() {
    let mut a: Array2<i32> = Array2::zeros(2, 2).unwrap();
    *a.get_mut(1, 1).unwrap() = 5;
    a[(0, 1)] = 3;
    assert_eq!(a.to_vec(), vec![0, 3, 0, 5]);
    assert_eq!(*a.get(1, 1).unwrap(), 5);
}

#[test]
fn array2_get_out_of_range_errors() {
    let a: Array2<i32> = Array2::zeros(3, 3).unwrap();
    assert_eq!(
        a.get(0, 3),
        Err(IndexError::GridOutOfRange {
            row: 0,
            col: 3,
            shape: (3, 3)
        })
    );
    assert!(a.get(3, 0).is_err());
}

#[test]
fn array2_without_columns_keeps_its_rows() {
    let a: Array2<i32> = Array2::zeros(3, 0).unwrap();
    assert_eq!(a.len_of(Axis::Row), 3);
    let rows: Vec<&[i32]> = a.rows().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.is_empty()));
}

#[test]
fn array2_zeros_overflowing_shape_errors() {
    let err = Array2::<i32>::zeros(usize::MAX / 2 + 1, 2).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("shape ({}, 2) overflows usize", usize::MAX / 2 + 1)
    );
}

#[test]
fn array2_from_shape_vec_overflowing_shape_errors() {
    assert!(Array2::from_shape_vec((usize::MAX, 2), vec![0i32; 2]).is_err());
}

// ---------------------------------------------------------------------------
// RaggedArray
// ---------------------------------------------------------------------------

#[test]
fn ragged_rows_may_differ_in_length() {
    let r = RaggedArray::from_rows(vec![
        Array1::from_vec(vec![1]),
        Array1::from_vec(vec![2, 3, 4]),
        Array1::from_vec(vec![]),
    ]);
    assert_eq!(r.row_lengths(), vec![1, 3, 0]);
    assert_eq!(*r.get((1, 2)).unwrap(), 4);
    assert_eq!(
        r.get((0, 1)),
        Err(IndexError::RaggedOutOfRange {
            row: 0,
            col: 1,
            row_len: Some(1)
        })
    );
}

#[test]
fn ragged_get_mut_and_iteration() {
    let mut r = RaggedArray::with_rows(2);
    r.set_row(1, Array1::from_vec(vec![0, 0])).unwrap();
    *r.get_mut((1, 0)).unwrap() = 9;
    let collected: Vec<Vec<i32>> = r.rows().map(Array1::to_vec).collect();
    assert_eq!(collected, vec![vec![], vec![9, 0]]);
    assert!(r.get_mut((1, 2)).is_err());
}

#[test]
fn ragged_default_is_empty() {
    let r: RaggedArray<i32> = RaggedArray::default();
    assert!(r.is_empty());
    assert!(r.row(0).is_err());
}
