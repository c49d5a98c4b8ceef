//! Temporal inversion of a log region.

use quoll_ir::{Instruction, InstructionKind};

use crate::transform::{RegionTransform, sentinel_text};

/// Inversion transform.
///
/// Reverses the region's order, then replaces each instruction with its
/// catalog inverse: self-inverse gates unchanged, dagger pairs swapped,
/// rotation angles negated. Instructions with no inverse rule become one
/// sentinel annotation each, carrying the original text; a single
/// uninvertible instruction never aborts the transform.
///
/// Double application restores a region built entirely of invertible gates;
/// regions containing sentinels are not round-trip safe.
pub struct Inverse;

impl Inverse {
    /// Create a new inversion transform.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Inverse {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionTransform for Inverse {
    fn name(&self) -> &'static str {
        "Inverse"
    }

    fn apply(&self, region: &[Instruction]) -> Vec<Instruction> {
        region.iter().rev().map(invert_instruction).collect()
    }
}

fn invert_instruction(instruction: &Instruction) -> Instruction {
    match &instruction.kind {
        InstructionKind::Gate(gate) => match gate.inverse() {
            Some(inverse) => Instruction::gate(inverse, instruction.qubits.iter().copied()),
            None => Instruction::annotation(format!(
                "inverse-{} not supported: {}",
                gate.name(),
                sentinel_text(instruction)
            )),
        },
        _ => Instruction::annotation(format!("cannot invert: {}", sentinel_text(instruction))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoll_ir::{ClbitId, QubitId, StandardGate};

    fn gate1(gate: StandardGate, qubit: u32) -> Instruction {
        Instruction::single_qubit_gate(gate, QubitId(qubit))
    }

    #[test]
    fn test_self_inverse_unchanged() {
        for gate in [
            StandardGate::X,
            StandardGate::Y,
            StandardGate::Z,
            StandardGate::H,
        ] {
            let region = [gate1(gate, 2)];
            let inverted = Inverse.apply(&region);
            assert_eq!(inverted, region.to_vec());
        }
    }

    #[test]
    fn test_dagger_pair_swapped() {
        let region = [gate1(StandardGate::S, 0), gate1(StandardGate::Tdg, 1)];
        let inverted = Inverse.apply(&region);
        assert_eq!(
            inverted,
            vec![gate1(StandardGate::T, 1), gate1(StandardGate::Sdg, 0)]
        );
    }

    #[test]
    fn test_rotation_negated() {
        let region = [gate1(StandardGate::Ry(0.5), 0)];
        let inverted = Inverse.apply(&region);
        assert_eq!(inverted, vec![gate1(StandardGate::Ry(-0.5), 0)]);
    }

    #[test]
    fn test_order_reversed() {
        let region = [gate1(StandardGate::H, 0), gate1(StandardGate::X, 0)];
        let inverted = Inverse.apply(&region);
        assert_eq!(
            inverted,
            vec![gate1(StandardGate::X, 0), gate1(StandardGate::H, 0)]
        );
    }

    #[test]
    fn test_uninvertible_gate_becomes_sentinel() {
        let region = [
            gate1(StandardGate::H, 0),
            Instruction::two_qubit_gate(StandardGate::CX, QubitId(0), QubitId(1)),
            gate1(StandardGate::X, 1),
        ];
        let inverted = Inverse.apply(&region);

        assert_eq!(inverted.len(), 3);
        assert_eq!(inverted[0], gate1(StandardGate::X, 1));
        assert_eq!(
            inverted[1].kind,
            InstructionKind::Annotation("inverse-cx not supported: cx q[0],q[1];".into())
        );
        assert_eq!(inverted[2], gate1(StandardGate::H, 0));
    }

    #[test]
    fn test_measure_becomes_sentinel() {
        let region = [Instruction::measure(QubitId(0), ClbitId(0))];
        let inverted = Inverse.apply(&region);
        assert_eq!(
            inverted[0].kind,
            InstructionKind::Annotation("cannot invert: measure q[0] -> c[0];".into())
        );
    }

    #[test]
    fn test_directive_becomes_sentinel() {
        let region = [Instruction::qreg(2)];
        let inverted = Inverse.apply(&region);
        assert_eq!(
            inverted[0].kind,
            InstructionKind::Annotation("cannot invert: qreg q[2];".into())
        );
    }

    #[test]
    fn test_double_inversion_restores_region() {
        let region = vec![
            gate1(StandardGate::H, 0),
            gate1(StandardGate::S, 1),
            gate1(StandardGate::Rz(1.5), 0),
            gate1(StandardGate::Tdg, 2),
        ];
        let twice = Inverse.apply(&Inverse.apply(&region));
        assert_eq!(twice, region);
    }
}
