// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Energy preservation across vartype changes.
//!
//! Mirrors how solvers use the model: energies computed in one domain must
//! match energies of the corresponding assignments after the change.

mod common;

use approx::assert_relative_eq;
use sparse_bqm::Vartype;
use strum::IntoEnumIterator;

#[test]
fn test_energies_match_after_change() {
    for start in Vartype::iter() {
        for target in Vartype::iter() {
            let mut bqm = common::five_variable_model(start);
            let before = bqm
                .energies(&common::all_samples(5, start))
                .unwrap();

            bqm.change_vartype(target);
            assert_eq!(bqm.vartype(), target);

            let after = bqm.energies(&common::all_samples(5, target)).unwrap();
            for (e0, e1) in before.iter().zip(&after) {
                assert_relative_eq!(*e0, *e1, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }
}

#[test]
fn test_change_is_self_inverse() {
    for start in Vartype::iter() {
        let original = common::five_variable_model(start);
        let mut bqm = original.clone();

        bqm.change_vartype(start.flipped());
        bqm.change_vartype(start);

        assert_eq!(bqm.num_interactions(), original.num_interactions());
        assert_relative_eq!(bqm.offset(), original.offset(), epsilon = 1e-9);
        for v in 0..5 {
            assert_relative_eq!(
                bqm.linear(v).unwrap(),
                original.linear(v).unwrap(),
                epsilon = 1e-9
            );
        }
        for (u, v, bias) in original.interactions() {
            assert_relative_eq!(bqm.quadratic_at(u, v).unwrap(), bias, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_mapped_sample_energy() {
    let binary = common::five_variable_model(Vartype::Binary);
    let spin = binary.to_vartype(Vartype::Spin);

    for sample in common::all_samples(5, Vartype::Binary) {
        let mapped: Vec<i8> = sample
            .iter()
            .map(|&x| Vartype::Binary.map_value(x, Vartype::Spin))
            .collect();
        assert_relative_eq!(
            binary.energy(&sample).unwrap(),
            spin.energy(&mapped).unwrap(),
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_parsed_target() {
    let mut bqm = common::five_variable_model(Vartype::Spin);
    let target = Vartype::from_name("BINARY").unwrap();
    bqm.change_vartype(target);
    assert_eq!(bqm.vartype(), Vartype::Binary);

    assert!(Vartype::from_name("DISCRETE").is_err());
}
