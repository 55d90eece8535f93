mod support;

use approx::assert_relative_eq;
use orient3::{
    ConversionError, IsClose, Matrix3, Orthogonality, Vector3,
    float_types::{FRAC_PI_2, PI},
};

fn sample() -> Matrix3 {
    Matrix3::new(2.0, -3.0, 1.0, 2.0, 0.0, -1.0, 1.0, 4.0, 5.0)
}

#[test]
fn construction_from_rows_and_columns() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(4.0, 5.0, 6.0);
    let c = Vector3::new(7.0, 8.0, 9.0);
    let by_rows = Matrix3::from_rows(a, b, c);
    let by_columns = Matrix3::from_columns(a, b, c);

    assert_eq!(by_rows.row(1), b);
    assert_eq!(by_rows.column(0), Vector3::new(1.0, 4.0, 7.0));
    assert_eq!(by_columns.column(2), c);
    assert_eq!(by_columns, by_rows.transpose());
    assert_eq!(by_rows.rows(), [a, b, c]);
    assert_eq!(by_columns.columns(), [a, b, c]);
    assert_eq!(
        by_rows.to_array(),
        [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]
    );
}

#[test]
#[should_panic]
fn row_index_out_of_range_panics() {
    let _ = Matrix3::identity().row(3);
}

#[test]
fn arithmetic() {
    let a = sample();
    let b = Matrix3::random_with(&mut support::rng());
    assert!((&(&a + &b) - &b).is_close(&a));
    assert_eq!(&a * 2.0, 2.0 * a.clone());
    assert_eq!(a.clone() + Matrix3::zero(), a);
    assert_eq!(&a - &a, Matrix3::zero());
    assert_eq!(&a * Matrix3::identity(), a);
    assert_eq!(Matrix3::identity() * &a, a);
}

#[test]
fn matrix_vector_product_is_row_dot_vector() {
    let m = sample();
    let v = Vector3::new(1.0, -1.0, 2.0);
    assert_eq!(&m * v, Vector3::new(7.0, 0.0, 7.0));
    assert_eq!(m * Vector3::zero(), Vector3::zero());
}

#[test]
fn matrix_product_is_row_dot_column() {
    let a = Matrix3::new(1.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
    let b = Matrix3::new(1.0, 0.0, 0.0, 3.0, 1.0, 0.0, 0.0, 0.0, 2.0);
    assert_eq!(&a * &b, Matrix3::new(7.0, 2.0, 0.0, 3.0, 1.0, 0.0, 0.0, 0.0, 2.0));
    assert_eq!(&b * &a, Matrix3::new(1.0, 2.0, 0.0, 3.0, 7.0, 0.0, 0.0, 0.0, 2.0));
}

#[test]
fn determinant() {
    assert_eq!(sample().determinant(), 49.0);
    assert_eq!(Matrix3::identity().determinant(), 1.0);
    assert_eq!(Matrix3::zero().determinant(), 0.0);
    assert_eq!(Matrix3::diagonal(Vector3::new(2.0, 3.0, 4.0)).determinant(), 24.0);
    let rotation = Matrix3::create_rotation(Vector3::new(1.0, 2.0, 3.0), 0.7).unwrap();
    assert!(rotation.determinant().is_close(&1.0));
}

#[test]
fn trace() {
    assert_eq!(sample().trace(), 7.0);
    assert_eq!(Matrix3::identity().trace(), 3.0);
}

#[test]
fn inverse_of_general_matrix() {
    let m = sample();
    let inverse = m.inverse().unwrap();
    assert!((&m * &inverse).is_close(&Matrix3::identity()));
    assert!((&inverse * &m).is_close(&Matrix3::identity()));
    assert_relative_eq!(inverse[(0, 0)], 4.0 / 49.0, epsilon = 1e-15);
}

#[test]
fn inverse_of_random_well_conditioned_matrices() {
    let mut rng = support::rng();
    let mut checked = 0;
    while checked < support::SAMPLES {
        let m = Matrix3::random_with(&mut rng);
        if m.determinant().abs() < 0.1 {
            continue;
        }
        let inverse = m.inverse().unwrap();
        assert!((&m * &inverse).is_close(&Matrix3::identity()), "{m}");
        checked += 1;
    }
}

#[test]
fn singular_matrix_has_no_inverse() {
    let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    assert!(m.inverse().is_none());
    assert!(Matrix3::zero().inverse().is_none());
}

#[test]
fn inverse_of_orthogonal_matrix_is_its_transpose() {
    let mut rng = support::rng();
    for _ in 0..support::SAMPLES {
        let axis = support::random_axis(&mut rng);
        let m = Matrix3::create_rotation(axis, support::random_angle(&mut rng)).unwrap();
        assert_eq!(m.inverse().unwrap(), m.transpose());
        assert!((&m * &m.transpose()).is_close(&Matrix3::identity()));

        let frame = Matrix3::create_coordinate_system(axis, support::random_axis(&mut rng));
        assert!(frame.inverse().unwrap().is_close(&frame.transpose()));
        assert!((&frame * &frame.transpose()).is_close(&Matrix3::identity()));
    }
}

#[test]
fn quarter_turn_about_z_maps_x_to_y() {
    let m = Matrix3::create_rotation(Vector3::unit_z(), FRAC_PI_2).unwrap();
    assert!((&m * Vector3::unit_x()).is_close(&Vector3::unit_y()));
    assert!((&m * Vector3::unit_y()).is_close(&-Vector3::unit_x()));
    assert!((&m * Vector3::unit_z()).is_close(&Vector3::unit_z()));
}

#[test]
fn rotation_about_non_unit_axis_uses_its_direction() {
    let m = Matrix3::create_rotation(Vector3::new(0.0, 5.0, 0.0), PI).unwrap();
    assert!(m.is_close(&Matrix3::diagonal(Vector3::new(-1.0, 1.0, -1.0))));
}

#[test]
fn rotation_about_zero_axis_is_absent() {
    assert!(Matrix3::create_rotation(Vector3::zero(), 0.0).is_none());
    assert!(Matrix3::create_rotation(Vector3::zero(), 1.234).is_none());
}

#[test]
fn rotation_preserves_lengths_and_axis() {
    let mut rng = support::rng();
    for _ in 0..support::SAMPLES {
        let axis = support::random_axis(&mut rng);
        let m = Matrix3::create_rotation(axis, support::random_angle(&mut rng)).unwrap();
        let v = Vector3::random_with(&mut rng);
        assert!((&m * v).length().is_close(&v.length()));
        assert!((&m * axis).is_close(&axis));
    }
}

#[test]
fn scale_about_axis() {
    let m = Matrix3::create_scale(Vector3::unit_x(), 2.0);
    assert_eq!(m, Matrix3::diagonal(Vector3::new(2.0, 1.0, 1.0)));
    assert!(!m.is_orthogonal());

    let diagonal = Vector3::new(1.0, 1.0, 1.0);
    let m = Matrix3::create_scale(diagonal, 3.0);
    assert!((&m * diagonal).is_close(&(diagonal * 3.0)));
    let across = Vector3::new(1.0, -1.0, 0.0);
    assert!((&m * across).is_close(&across));
}

#[test]
fn coordinate_system_from_two_vectors() {
    let m = Matrix3::create_coordinate_system(
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(1.0, 1.0, 0.0),
    );
    assert_eq!(m, Matrix3::identity());
    assert_eq!(m.orthogonality(), Orthogonality::Orthogonal);

    let i = Vector3::new(1.0, 1.0, 0.0);
    let j = Vector3::new(0.0, 1.0, 0.0);
    let m = Matrix3::create_coordinate_system(i, j);
    assert!(m.column(0).is_close(&i.unit()));
    assert!(m.column(1).dot(&i).is_close(&0.0));
    assert!(m.column(2).is_close(&Vector3::unit_z()));
    assert!(m.determinant().is_close(&1.0));
}

#[test]
fn orthogonality_of_constants_is_pretagged() {
    assert_eq!(Matrix3::identity().orthogonality(), Orthogonality::Orthogonal);
    assert_eq!(Matrix3::zero().orthogonality(), Orthogonality::NotOrthogonal);
    let rotation = Matrix3::create_rotation(Vector3::unit_y(), 0.3).unwrap();
    assert_eq!(rotation.orthogonality(), Orthogonality::Orthogonal);
}

#[test]
fn orthogonality_is_resolved_lazily_and_memoized() {
    let m = Matrix3::from_columns(Vector3::unit_y(), Vector3::unit_z(), Vector3::unit_x());
    assert_eq!(m.orthogonality(), Orthogonality::Unknown);
    assert!(m.is_orthogonal());
    assert_eq!(m.orthogonality(), Orthogonality::Orthogonal);

    let skewed = Matrix3::from_columns(
        Vector3::unit_x(),
        Vector3::new(1.0, 1.0, 0.0).unit(),
        Vector3::unit_z(),
    );
    assert!(!skewed.is_orthogonal());
    assert_eq!(skewed.orthogonality(), Orthogonality::NotOrthogonal);
}

#[test]
fn reflection_counts_as_orthogonal() {
    let mirror = Matrix3::diagonal(Vector3::new(1.0, 1.0, -1.0));
    assert!(mirror.is_orthogonal());
    assert_eq!(mirror.inverse().unwrap(), mirror);
}

#[test]
fn transpose_inherits_orthogonality() {
    let unknown = Matrix3::from_rows(Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z());
    assert_eq!(unknown.transpose().orthogonality(), Orthogonality::Unknown);

    assert!(unknown.is_orthogonal());
    assert_eq!(unknown.transpose().orthogonality(), Orthogonality::Orthogonal);

    let scale = Matrix3::create_scale(Vector3::unit_z(), 0.5);
    assert!(!scale.is_orthogonal());
    assert_eq!(scale.transpose().orthogonality(), Orthogonality::NotOrthogonal);
}

#[test]
fn product_orthogonality_is_propagated_not_computed() {
    let a = Matrix3::create_rotation(Vector3::unit_x(), 0.4).unwrap();
    let b = Matrix3::create_rotation(Vector3::new(1.0, 2.0, 0.0), -1.1).unwrap();
    assert_eq!((&a * &b).orthogonality(), Orthogonality::Orthogonal);

    let unknown = Matrix3::from_rows(Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z());
    let product = &a * &unknown;
    assert_eq!(product.orthogonality(), Orthogonality::Unknown);
    // Neither the operand nor the product was checked eagerly.
    assert_eq!(unknown.orthogonality(), Orthogonality::Unknown);
    assert!(product.is_orthogonal());

    let scale = Matrix3::create_scale(Vector3::unit_x(), 2.0);
    assert!(!scale.is_orthogonal());
    assert_eq!((&a * &scale).orthogonality(), Orthogonality::NotOrthogonal);
    assert_eq!((&scale * &scale).orthogonality(), Orthogonality::Unknown);
}

#[test]
fn arithmetic_results_start_unresolved() {
    let identity = Matrix3::identity();
    assert_eq!((&identity * 1.0).orthogonality(), Orthogonality::Unknown);
    assert_eq!((&identity + &Matrix3::zero()).orthogonality(), Orthogonality::Unknown);
}

#[test]
fn random_rows_lie_in_unit_cube() {
    let mut rng = support::rng();
    for _ in 0..support::SAMPLES {
        let m = Matrix3::random_with(&mut rng);
        assert!(m.to_array().iter().flatten().all(|c| (-1.0..=1.0).contains(c)));
        assert_eq!(m.orthogonality(), Orthogonality::Unknown);
    }
    let _ = Matrix3::random();
}

#[test]
fn is_close_is_entrywise() {
    let m = sample();
    let nudged = &m + &Matrix3::diagonal(Vector3::new(1e-12, 0.0, 0.0));
    assert!(m.is_close(&nudged));
    let moved = &m + &Matrix3::diagonal(Vector3::new(0.0, 0.0, 1e-3));
    assert!(m.is_far(&moved));
}

#[test]
fn conversion_from_slice() {
    let values = [2.0, -3.0, 1.0, 2.0, 0.0, -1.0, 1.0, 4.0, 5.0];
    assert_eq!(Matrix3::try_from(&values[..]), Ok(sample()));
    assert_eq!(
        Matrix3::try_from(&values[..8]),
        Err(ConversionError::WrongLength { expected: 9, found: 8 })
    );
    assert_eq!(
        Matrix3::from([[2.0, -3.0, 1.0], [2.0, 0.0, -1.0], [1.0, 4.0, 5.0]]),
        sample()
    );
}

#[test]
fn display_renders_a_grid() {
    let text = Matrix3::identity().to_string();
    assert_eq!(
        text,
        "[1.00000000, 0.00000000, 0.00000000]\n\
         [0.00000000, 1.00000000, 0.00000000]\n\
         [0.00000000, 0.00000000, 1.00000000]"
    );
    assert_eq!(sample().to_string().lines().count(), 3);
}
