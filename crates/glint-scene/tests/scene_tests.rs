// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use approx::assert_abs_diff_eq;
use glint_math::{Mat4, UniformMat4, Vec3};
use glint_scene::{
    model_matrix, Camera, FrameUniforms, KnotParams, LightToggles, TorusKnot, KNOT_PRIMES,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn default_knot_has_expected_counts() {
    let mesh = TorusKnot::default().build().unwrap();
    assert_eq!(mesh.vertices.len(), 256 * 32);
    assert_eq!(mesh.normals.len(), mesh.vertices.len());
    assert_eq!(mesh.triangle_count(), 256 * 32 * 2);
    assert_eq!(mesh.position_buffer().len(), 3 * 256 * 32);
    let normals = mesh.normal_buffer();
    assert_eq!(normals.len(), 3 * 256 * 32);
    let n0 = mesh.normals[0].to_array();
    assert_abs_diff_eq!(f64::from(normals[0]), n0[0], epsilon = 1e-6);
    assert_abs_diff_eq!(f64::from(normals[2]), n0[2], epsilon = 1e-6);
    assert!(mesh
        .indices
        .iter()
        .all(|&i| usize::from(i) < mesh.vertices.len()));
}

#[test]
fn normals_are_unit_and_perpendicular_to_tangent() {
    let knot = TorusKnot {
        rings: 16,
        samples: 8,
        ..TorusKnot::new(KnotParams { p: 3, q: 5 })
    };
    let mesh = knot.build().unwrap();
    for n in &mesh.normals {
        assert_abs_diff_eq!(n.norm(), 1.0, epsilon = 1e-9);
    }
    // opposite samples on one ring straddle the centre line
    let ring0 = &mesh.vertices[0..8];
    let centre = (ring0[0] + ring0[4]) * 0.5;
    assert_abs_diff_eq!(centre.x(), 1.5, epsilon = 1e-9);
    assert_abs_diff_eq!(centre.y(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(centre.z(), 0.0, epsilon = 1e-9);
}

#[test]
fn first_quad_wraps_to_next_ring() {
    let knot = TorusKnot {
        rings: 4,
        samples: 3,
        ..TorusKnot::default()
    };
    let mesh = knot.build().unwrap();
    assert_eq!(&mesh.indices[0..6], &[0, 1, 3, 1, 4, 3]);
    // last quad of the last ring closes back onto ring 0, sample 0
    let tail = &mesh.indices[mesh.indices.len() - 6..];
    assert_eq!(tail, &[11, 9, 2, 9, 0, 2]);
}

#[test]
fn seeded_params_are_reproducible() {
    let a = KnotParams::random(&mut StdRng::seed_from_u64(7));
    let b = KnotParams::random(&mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

#[test]
fn mvp_matches_manual_composition() {
    let rotation = Mat4::rotate(0.3, &Vec3::new(1.0, 2.0, 3.0)).unwrap();
    let camera = Camera::default();
    let u = FrameUniforms::build(&rotation, 1.25, &camera, 16.0 / 9.0, LightToggles::default())
        .unwrap();
    let model = model_matrix(&rotation, 1.25, Vec3::ZERO);
    let want = camera
        .projection(16.0 / 9.0)
        .matmul(&camera.view())
        .matmul(&model);
    assert_eq!(u.mvp, UniformMat4::from(&want));
}

proptest! {
    #[test]
    fn random_params_are_distinct_primes(seed in any::<u64>()) {
        let params = KnotParams::random(&mut StdRng::seed_from_u64(seed));
        prop_assert_ne!(params.p, params.q);
        prop_assert!(KNOT_PRIMES.contains(&params.p));
        prop_assert!(KNOT_PRIMES.contains(&params.q));
    }

    #[test]
    fn inverse_model_undoes_model(angle in -3.0f64..3.0, scale in 0.2f64..50.0) {
        let rotation = Mat4::rotate(angle, &Vec3::new(0.3, -1.0, 0.7)).unwrap();
        let model = model_matrix(&rotation, scale, Vec3::ZERO);
        let back = model.matmul(&model.try_inv().unwrap());
        for r in 0..4 {
            for c in 0..4 {
                let want = if r == c { 1.0 } else { 0.0 };
                prop_assert!((back.at(r, c) - want).abs() < 1e-9);
            }
        }
    }
}
