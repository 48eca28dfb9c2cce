use numeth_core::{Complex64, Matrix};
use numeth_solvers::factorization::{Error, ldlt, lu};

fn spd() -> Matrix<f64> {
    Matrix::from_rows(&[
        [4.0, 12.0, -16.0],
        [12.0, 37.0, -43.0],
        [-16.0, -43.0, 98.0],
    ])
}

#[test]
fn lu_and_ldlt_reconstruct_the_same_matrix() {
    let a = spd();

    let lu = lu(&a).expect("lu should succeed");
    let ldlt = ldlt(&a).expect("ldlt should succeed");

    assert_eq!(lu.reconstruct(), a);
    assert_eq!(ldlt.reconstruct(), a);
    // Without pivoting both share the unit lower factor.
    assert_eq!(lu.l, ldlt.l);
}

#[test]
fn repeated_factorizations_are_identical() {
    let a = Matrix::from_rows(&[
        [0.0, 0.0, -1.0, 1.0],
        [1.0, 1.0, -1.0, 2.0],
        [-1.0, -1.0, 2.0, 0.0],
        [1.0, 2.0, 0.0, 2.0],
    ]);

    assert_eq!(lu(&a), lu(&a));
    assert_eq!(ldlt(&spd()), ldlt(&spd()));
}

#[test]
fn complex_hermitian_factorizes_both_ways() {
    let i = Complex64::new(0.0, 1.0);
    let one = Complex64::new(1.0, 0.0);
    let a = Matrix::from_rows(&[[one * 2.0, one + i], [one - i, one * 3.0]]);

    assert_eq!(lu(&a).expect("lu should succeed").reconstruct(), a);
    assert_eq!(ldlt(&a).expect("ldlt should succeed").reconstruct(), a);
}

#[test]
fn rectangular_input_is_rejected_by_both() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let expected = Err(Error::NotSquare { rows: 2, cols: 3 });

    assert_eq!(lu(&a).map(|_| ()), expected);
    assert_eq!(ldlt(&a).map(|_| ()), expected);
}
