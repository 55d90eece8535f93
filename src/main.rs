// main.rs
//
// Minimal tour of orient3: build the same rotation as a matrix and as a quaternion,
// convert between them and print the results. Set RUST_LOG=orient3=debug to see the
// library's diagnostics for the degenerate cases at the end.

use orient3::{
    IsClose, Matrix3, Quaternion, Vector3,
    float_types::{FRAC_PI_2, PI},
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 1) Vectors
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::random();
    println!("a = {a}\nb = {b}");
    println!("a x b = {}", a.cross(&b));
    println!("angle(a, b) = {:.8} rad", a.angle_to(&b));
    let (parallel, perpendicular) = a.decompose(&b);
    println!("a = {parallel} + {perpendicular}");

    // 2) Rodrigues: a quarter turn about +Z sends +X to +Y
    if let Some(quarter_turn) = Matrix3::create_rotation(Vector3::unit_z(), FRAC_PI_2) {
        println!("\nRz(pi/2) =\n{quarter_turn}");
        println!("Rz(pi/2) * X = {}", &quarter_turn * Vector3::unit_x());
    }

    // 3) Same rotation as a quaternion, and back again
    let axis = Vector3::new(1.0, -1.0, 0.5);
    if let (Some(q), Some(m)) = (
        Quaternion::create_rotation(axis, 2.0 * PI / 3.0),
        Matrix3::create_rotation(axis, 2.0 * PI / 3.0),
    ) {
        println!("\nq = {q}");
        println!("q.to_matrix() =\n{}", q.to_matrix());
        println!("matches Rodrigues: {}", q.to_matrix().is_close(&m));
        if let Some(back) = Quaternion::create_from_matrix(&m) {
            println!("from matrix = {back} (equivalent: {})", back.is_equivalent(&q));
        }
    }

    // 4) Inverses
    let frame = Matrix3::create_coordinate_system(Vector3::new(1.0, 1.0, 0.0), Vector3::unit_z());
    println!("\nframe =\n{frame}\northogonality = {:?}", frame.orthogonality());
    if let Some(inverse) = frame.inverse() {
        println!("frame^-1 == frame^T: {}", inverse.is_close(&frame.transpose()));
    }

    // 5) Degenerate inputs produce absence, not panics
    println!(
        "\nrotation about zero axis: {:?}",
        Matrix3::create_rotation(Vector3::zero(), 1.0).is_some()
    );
    println!(
        "quaternion from scale matrix: {:?}",
        Quaternion::create_from_matrix(&Matrix3::create_scale(Vector3::unit_x(), 2.0)).is_some()
    );
    println!("inverse of zero matrix: {:?}", Matrix3::zero().inverse().is_some());
    println!("axis of identity: {:?}", Quaternion::identity().axis());
}
