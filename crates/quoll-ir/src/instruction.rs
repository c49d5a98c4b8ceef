//! Circuit instructions combining gate kinds with operands.

use serde::{Deserialize, Serialize};

use crate::gate::StandardGate;
use crate::qubit::{ClbitId, QubitId};

/// The kind of entry in a circuit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// A quantum gate operation.
    Gate(StandardGate),
    /// Measurement of one qubit into one classical bit.
    Measure,
    /// The OpenQASM 2.0 preamble (version line plus standard include).
    Header,
    /// Declaration of the `q` quantum register.
    QregDecl {
        /// Number of qubits.
        size: u32,
    },
    /// Declaration of the `c` classical register.
    CregDecl {
        /// Number of classical bits.
        size: u32,
    },
    /// Sentinel no-op left by a transform for an instruction it could not
    /// handle; renders as a comment line carrying this text.
    Annotation(String),
}

/// A complete instruction with operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The kind of instruction.
    pub kind: InstructionKind,
    /// Qubits this instruction operates on.
    pub qubits: Vec<QubitId>,
    /// Classical bits this instruction operates on (for measure).
    pub clbits: Vec<ClbitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: StandardGate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Gate(gate),
            qubits: qubits.into_iter().collect(),
            clbits: vec![],
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: StandardGate, q1: QubitId, q2: QubitId) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Create a measurement instruction.
    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Self {
            kind: InstructionKind::Measure,
            qubits: vec![qubit],
            clbits: vec![clbit],
        }
    }

    /// Create the program header directive.
    pub fn header() -> Self {
        Self {
            kind: InstructionKind::Header,
            qubits: vec![],
            clbits: vec![],
        }
    }

    /// Create a quantum register declaration.
    pub fn qreg(size: u32) -> Self {
        Self {
            kind: InstructionKind::QregDecl { size },
            qubits: vec![],
            clbits: vec![],
        }
    }

    /// Create a classical register declaration.
    pub fn creg(size: u32) -> Self {
        Self {
            kind: InstructionKind::CregDecl { size },
            qubits: vec![],
            clbits: vec![],
        }
    }

    /// Create a sentinel annotation.
    pub fn annotation(text: impl Into<String>) -> Self {
        Self {
            kind: InstructionKind::Annotation(text.into()),
            qubits: vec![],
            clbits: vec![],
        }
    }

    /// Check if this is a gate instruction.
    pub fn is_gate(&self) -> bool {
        matches!(self.kind, InstructionKind::Gate(_))
    }

    /// Check if this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self.kind, InstructionKind::Measure)
    }

    /// Check if this is a header or register declaration.
    pub fn is_directive(&self) -> bool {
        matches!(
            self.kind,
            InstructionKind::Header
                | InstructionKind::QregDecl { .. }
                | InstructionKind::CregDecl { .. }
        )
    }

    /// Check if this is a sentinel annotation.
    pub fn is_annotation(&self) -> bool {
        matches!(self.kind, InstructionKind::Annotation(_))
    }

    /// Get the gate if this is a gate instruction.
    pub fn as_gate(&self) -> Option<&StandardGate> {
        match &self.kind {
            InstructionKind::Gate(g) => Some(g),
            _ => None,
        }
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &str {
        match &self.kind {
            InstructionKind::Gate(g) => g.name(),
            InstructionKind::Measure => "measure",
            InstructionKind::Header => "header",
            InstructionKind::QregDecl { .. } => "qreg",
            InstructionKind::CregDecl { .. } => "creg",
            InstructionKind::Annotation(_) => "annotation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_instruction() {
        let inst = Instruction::single_qubit_gate(StandardGate::H, QubitId(0));
        assert!(inst.is_gate());
        assert_eq!(inst.qubits.len(), 1);
        assert_eq!(inst.name(), "h");
    }

    #[test]
    fn test_measure_instruction() {
        let inst = Instruction::measure(QubitId(0), ClbitId(0));
        assert!(inst.is_measure());
        assert_eq!(inst.qubits.len(), 1);
        assert_eq!(inst.clbits.len(), 1);
    }

    #[test]
    fn test_directives() {
        assert!(Instruction::header().is_directive());
        assert!(Instruction::qreg(2).is_directive());
        assert!(Instruction::creg(2).is_directive());
        assert_eq!(Instruction::qreg(2).name(), "qreg");
    }

    #[test]
    fn test_annotation() {
        let inst = Instruction::annotation("cannot invert: cx q[0],q[1];");
        assert!(inst.is_annotation());
        assert!(!inst.is_gate());
        assert!(inst.qubits.is_empty());
    }

    #[test]
    fn test_as_gate() {
        let inst = Instruction::two_qubit_gate(StandardGate::CX, QubitId(0), QubitId(1));
        assert_eq!(inst.as_gate(), Some(&StandardGate::CX));
        assert_eq!(Instruction::header().as_gate(), None);
    }
}
