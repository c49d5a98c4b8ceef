//! Control lifting of a log region.

use quoll_ir::{ControlRule, Instruction, InstructionKind, QubitId, StandardGate, catalog};
use tracing::debug;

use crate::error::{CompileError, CompileResult};
use crate::transform::{RegionTransform, sentinel_text};

/// Control-lift transform.
///
/// Replaces each instruction in a region with its singly-controlled
/// equivalent: native rules produce exactly one controlled instruction with
/// the control prepended, the Hadamard rule produces its fixed 8-instruction
/// expansion, and unsupported kinds produce one sentinel annotation. Order
/// among the original instructions is preserved; output length varies per
/// input instruction.
///
/// Only a single control operand is supported. Requests carrying more use
/// the first control and ignore the rest — a documented limitation, not an
/// error.
pub struct ControlLift {
    controls: Vec<QubitId>,
}

impl ControlLift {
    /// Create a control-lift transform from the requested control operands.
    ///
    /// Fails only when no control is supplied at all.
    pub fn new(controls: impl IntoIterator<Item = QubitId>) -> CompileResult<Self> {
        let controls: Vec<QubitId> = controls.into_iter().collect();
        if controls.is_empty() {
            return Err(CompileError::EmptyControls);
        }
        if controls.len() > 1 {
            debug!(
                requested = controls.len(),
                "multi-control lift uses the first control only"
            );
        }
        Ok(Self { controls })
    }

    /// The control operand in effect.
    pub fn control(&self) -> QubitId {
        self.controls[0]
    }
}

impl RegionTransform for ControlLift {
    fn name(&self) -> &'static str {
        "ControlLift"
    }

    fn apply(&self, region: &[Instruction]) -> Vec<Instruction> {
        let control = self.control();
        let mut out = Vec::with_capacity(region.len());
        for instruction in region {
            lift_instruction(control, instruction, &mut out);
        }
        out
    }
}

fn lift_instruction(control: QubitId, instruction: &Instruction, out: &mut Vec<Instruction>) {
    let InstructionKind::Gate(gate) = &instruction.kind else {
        out.push(Instruction::annotation(format!(
            "cannot control: {}",
            sentinel_text(instruction)
        )));
        return;
    };

    match catalog::control_rule(gate) {
        // The catalog guarantees a native form and arity 1 for these kinds;
        // anything malformed still yields a sentinel slot, never a dropped
        // instruction.
        ControlRule::Native => match (gate.controlled(), instruction.qubits.first()) {
            (Some(lifted), Some(target)) => {
                out.push(Instruction::two_qubit_gate(lifted, control, *target));
            }
            _ => out.push(Instruction::annotation(format!(
                "cannot control: {}",
                sentinel_text(instruction)
            ))),
        },
        ControlRule::Decompose => match instruction.qubits.first() {
            Some(target) => out.extend(hadamard_decomposition(control, *target)),
            None => out.push(Instruction::annotation(format!(
                "cannot control: {}",
                sentinel_text(instruction)
            ))),
        },
        ControlRule::Unsupported => {
            out.push(Instruction::annotation(format!(
                "controlled-{} not supported",
                gate.name()
            )));
        }
    }
}

/// The fixed 8-instruction expansion of a controlled Hadamard.
///
/// The order is load-bearing: remote evaluators expecting this decomposition
/// match it instruction for instruction.
fn hadamard_decomposition(control: QubitId, target: QubitId) -> [Instruction; 8] {
    [
        Instruction::single_qubit_gate(StandardGate::Sdg, target),
        Instruction::two_qubit_gate(StandardGate::CX, control, target),
        Instruction::single_qubit_gate(StandardGate::H, target),
        Instruction::single_qubit_gate(StandardGate::T, target),
        Instruction::two_qubit_gate(StandardGate::CX, control, target),
        Instruction::single_qubit_gate(StandardGate::T, target),
        Instruction::single_qubit_gate(StandardGate::H, target),
        Instruction::single_qubit_gate(StandardGate::S, target),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoll_ir::ClbitId;

    fn lift(controls: &[u32]) -> ControlLift {
        ControlLift::new(controls.iter().map(|&c| QubitId(c))).unwrap()
    }

    #[test]
    fn test_empty_controls_rejected() {
        assert!(matches!(
            ControlLift::new([]),
            Err(CompileError::EmptyControls)
        ));
    }

    #[test]
    fn test_extra_controls_ignored() {
        assert_eq!(lift(&[3, 1, 2]).control(), QubitId(3));
    }

    #[test]
    fn test_native_pauli_lift() {
        let region = [Instruction::single_qubit_gate(StandardGate::X, QubitId(1))];
        let lifted = lift(&[0]).apply(&region);
        assert_eq!(
            lifted,
            vec![Instruction::two_qubit_gate(
                StandardGate::CX,
                QubitId(0),
                QubitId(1)
            )]
        );

        let region = [Instruction::single_qubit_gate(StandardGate::Z, QubitId(2))];
        let lifted = lift(&[0]).apply(&region);
        assert_eq!(lifted[0].as_gate(), Some(&StandardGate::CZ));
        assert_eq!(lifted[0].qubits, vec![QubitId(0), QubitId(2)]);
    }

    #[test]
    fn test_hadamard_decomposition_order() {
        let region = [Instruction::single_qubit_gate(StandardGate::H, QubitId(1))];
        let lifted = lift(&[0]).apply(&region);

        let c = QubitId(0);
        let t = QubitId(1);
        assert_eq!(
            lifted,
            vec![
                Instruction::single_qubit_gate(StandardGate::Sdg, t),
                Instruction::two_qubit_gate(StandardGate::CX, c, t),
                Instruction::single_qubit_gate(StandardGate::H, t),
                Instruction::single_qubit_gate(StandardGate::T, t),
                Instruction::two_qubit_gate(StandardGate::CX, c, t),
                Instruction::single_qubit_gate(StandardGate::T, t),
                Instruction::single_qubit_gate(StandardGate::H, t),
                Instruction::single_qubit_gate(StandardGate::S, t),
            ]
        );
    }

    #[test]
    fn test_unsupported_gate_becomes_sentinel() {
        let region = [Instruction::single_qubit_gate(StandardGate::T, QubitId(0))];
        let lifted = lift(&[1]).apply(&region);
        assert_eq!(
            lifted[0].kind,
            InstructionKind::Annotation("controlled-t not supported".into())
        );
    }

    #[test]
    fn test_measure_becomes_sentinel() {
        let region = [Instruction::measure(QubitId(0), ClbitId(0))];
        let lifted = lift(&[1]).apply(&region);
        assert_eq!(
            lifted[0].kind,
            InstructionKind::Annotation("cannot control: measure q[0] -> c[0];".into())
        );
    }

    #[test]
    fn test_order_preserved_and_lengths_tracked() {
        let region = [
            Instruction::single_qubit_gate(StandardGate::X, QubitId(1)),
            Instruction::single_qubit_gate(StandardGate::H, QubitId(2)),
            Instruction::single_qubit_gate(StandardGate::T, QubitId(1)),
        ];
        let lifted = lift(&[0]).apply(&region);

        // 1 native + 8 decomposed + 1 sentinel.
        assert_eq!(lifted.len(), 10);
        assert_eq!(lifted[0].as_gate(), Some(&StandardGate::CX));
        assert_eq!(lifted[1].as_gate(), Some(&StandardGate::Sdg));
        assert!(lifted[9].is_annotation());
    }
}
