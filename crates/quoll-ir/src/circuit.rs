//! The ordered circuit instruction log and its builder surface.

use crate::catalog;
use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// An append-only ordered log of circuit instructions.
///
/// The log is owned by exactly one builder/session; order is execution
/// order. It is mutated only by [`append`](CircuitLog::append), the splice
/// operations used by transforms, or a full [`clear`](CircuitLog::clear).
///
/// # Example
///
/// ```rust
/// use quoll_ir::{CircuitLog, ClbitId, QubitId};
///
/// let mut log = CircuitLog::new();
/// log.header()?
///     .qreg(2)?
///     .creg(2)?
///     .h(QubitId(0))?
///     .cx(QubitId(0), QubitId(1))?
///     .measure(QubitId(0), ClbitId(0))?
///     .measure(QubitId(1), ClbitId(1))?;
///
/// assert_eq!(log.len(), 7);
/// # Ok::<(), quoll_ir::IrError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircuitLog {
    entries: Vec<Instruction>,
}

impl CircuitLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self { entries: vec![] }
    }

    /// Validate and append an instruction to the end of the log.
    ///
    /// On failure the log is unchanged.
    pub fn append(&mut self, instruction: Instruction) -> IrResult<()> {
        Self::validate(&instruction)?;
        self.entries.push(instruction);
        Ok(())
    }

    /// Check an instruction's operand shape against the gate catalog.
    fn validate(instruction: &Instruction) -> IrResult<()> {
        match &instruction.kind {
            InstructionKind::Gate(gate) => {
                let expected = catalog::lookup(gate).arity;
                let got = u32::try_from(instruction.qubits.len()).unwrap_or(u32::MAX);
                if got != expected {
                    return Err(IrError::ArityMismatch {
                        gate: gate.name(),
                        expected,
                        got,
                    });
                }
                for (i, qubit) in instruction.qubits.iter().enumerate() {
                    if instruction.qubits[..i].contains(qubit) {
                        return Err(IrError::DuplicateQubit {
                            gate: gate.name(),
                            qubit: *qubit,
                        });
                    }
                }
                Ok(())
            }
            InstructionKind::Measure => {
                if instruction.qubits.len() != 1 || instruction.clbits.len() != 1 {
                    return Err(IrError::MeasureShape {
                        qubits: instruction.qubits.len(),
                        clbits: instruction.clbits.len(),
                    });
                }
                Ok(())
            }
            InstructionKind::Header
            | InstructionKind::QregDecl { .. }
            | InstructionKind::CregDecl { .. }
            | InstructionKind::Annotation(_) => Ok(()),
        }
    }

    /// Current length of the log; establishes the start of a region for a
    /// later transform.
    pub fn mark(&self) -> usize {
        self.entries.len()
    }

    /// Remove and return everything from `mark` to the end.
    ///
    /// Marks beyond the end yield an empty region.
    pub fn splice_from(&mut self, mark: usize) -> Vec<Instruction> {
        let mark = mark.min(self.entries.len());
        self.entries.split_off(mark)
    }

    /// Insert a sequence at position `at`, shifting later entries back.
    ///
    /// Transform outputs re-enter the log through this; they are built from
    /// catalog rules and need no re-validation.
    pub fn splice_in(&mut self, at: usize, sequence: Vec<Instruction>) {
        let at = at.min(self.entries.len());
        self.entries.splice(at..at, sequence);
    }

    /// Discard all instructions.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of instructions in the log.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The instructions in execution order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.entries
    }

    /// Iterate over the instructions in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.entries.iter()
    }

    // =========================================================================
    // Directives
    // =========================================================================

    /// Append the OpenQASM header directive.
    pub fn header(&mut self) -> IrResult<&mut Self> {
        self.append(Instruction::header())?;
        Ok(self)
    }

    /// Declare the quantum register.
    pub fn qreg(&mut self, size: u32) -> IrResult<&mut Self> {
        self.append(Instruction::qreg(size))?;
        Ok(self)
    }

    /// Declare the classical register.
    pub fn creg(&mut self, size: u32) -> IrResult<&mut Self> {
        self.append(Instruction::creg(size))?;
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::H, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::X, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Y, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Z, qubit))?;
        Ok(self)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::S, qubit))?;
        Ok(self)
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Sdg, qubit))?;
        Ok(self)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::T, qubit))?;
        Ok(self)
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Tdg, qubit))?;
        Ok(self)
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Rx(theta), qubit))?;
        Ok(self)
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Ry(theta), qubit))?;
        Ok(self)
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Rz(theta), qubit))?;
        Ok(self)
    }

    // =========================================================================
    // Multi-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::two_qubit_gate(StandardGate::CX, control, target))?;
        Ok(self)
    }

    /// Apply CY gate.
    pub fn cy(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::two_qubit_gate(StandardGate::CY, control, target))?;
        Ok(self)
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::two_qubit_gate(StandardGate::CZ, control, target))?;
        Ok(self)
    }

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::gate(StandardGate::CCX, [c1, c2, target]))?;
        Ok(self)
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.append(Instruction::measure(qubit, clbit))?;
        Ok(self)
    }
}

impl<'a> IntoIterator for &'a CircuitLog {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_order() {
        let mut log = CircuitLog::new();
        log.h(QubitId(0)).unwrap().x(QubitId(1)).unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.instructions()[0].name(), "h");
        assert_eq!(log.instructions()[1].name(), "x");
    }

    #[test]
    fn test_arity_rejected_log_unchanged() {
        let mut log = CircuitLog::new();
        log.h(QubitId(0)).unwrap();

        let bad = Instruction::gate(StandardGate::CX, [QubitId(0)]);
        let err = log.append(bad).unwrap_err();
        assert!(matches!(
            err,
            IrError::ArityMismatch {
                gate: "cx",
                expected: 2,
                got: 1,
            }
        ));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_duplicate_qubit_rejected() {
        let mut log = CircuitLog::new();
        let err = log.cx(QubitId(0), QubitId(0)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { gate: "cx", .. }));
        assert!(log.is_empty());
    }

    #[test]
    fn test_measure_shape_rejected() {
        let mut log = CircuitLog::new();
        let bad = Instruction {
            kind: InstructionKind::Measure,
            qubits: vec![QubitId(0), QubitId(1)],
            clbits: vec![ClbitId(0)],
        };
        assert!(matches!(
            log.append(bad),
            Err(IrError::MeasureShape {
                qubits: 2,
                clbits: 1,
            })
        ));
    }

    #[test]
    fn test_mark_and_splice() {
        let mut log = CircuitLog::new();
        log.h(QubitId(0)).unwrap();
        let mark = log.mark();
        log.x(QubitId(0)).unwrap().z(QubitId(0)).unwrap();

        let region = log.splice_from(mark);
        assert_eq!(region.len(), 2);
        assert_eq!(log.len(), 1);

        log.splice_in(mark, region);
        assert_eq!(log.len(), 3);
        assert_eq!(log.instructions()[1].name(), "x");
    }

    #[test]
    fn test_splice_from_past_end() {
        let mut log = CircuitLog::new();
        log.h(QubitId(0)).unwrap();
        assert!(log.splice_from(10).is_empty());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut log = CircuitLog::new();
        log.header().unwrap().qreg(1).unwrap().h(QubitId(0)).unwrap();
        log.clear();
        assert!(log.is_empty());
    }
}
