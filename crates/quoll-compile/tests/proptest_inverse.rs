//! Property-based tests for the inversion transform.
//!
//! Double inversion restores any region built entirely of invertible gates,
//! and single inversion always preserves region length.

use proptest::prelude::*;
use quoll_compile::{Inverse, RegionTransform};
use quoll_ir::{Instruction, QubitId, StandardGate};

/// Generate one invertible single-qubit instruction.
fn arb_invertible_instruction() -> impl Strategy<Value = Instruction> {
    let qubit = 0_u32..5;
    let angle = -6.3_f64..6.3;
    (qubit, angle, 0_usize..11).prop_map(|(q, theta, pick)| {
        let gate = match pick {
            0 => StandardGate::X,
            1 => StandardGate::Y,
            2 => StandardGate::Z,
            3 => StandardGate::H,
            4 => StandardGate::S,
            5 => StandardGate::Sdg,
            6 => StandardGate::T,
            7 => StandardGate::Tdg,
            8 => StandardGate::Rx(theta),
            9 => StandardGate::Ry(theta),
            _ => StandardGate::Rz(theta),
        };
        Instruction::single_qubit_gate(gate, QubitId(q))
    })
}

proptest! {
    #[test]
    fn double_inversion_restores_region(
        region in prop::collection::vec(arb_invertible_instruction(), 0..20)
    ) {
        let twice = Inverse.apply(&Inverse.apply(&region));
        prop_assert_eq!(twice, region);
    }

    #[test]
    fn inversion_preserves_length(
        region in prop::collection::vec(arb_invertible_instruction(), 0..20)
    ) {
        prop_assert_eq!(Inverse.apply(&region).len(), region.len());
    }
}
