//! OpenQASM 2.0 emitter for circuit logs.

use quoll_ir::{CircuitLog, Instruction, InstructionKind, QubitId, StandardGate};

/// Emit a circuit log as OpenQASM 2.0 source text.
///
/// One canonical line per instruction, in log order; the header directive
/// contributes the version line plus the standard include. This text is the
/// sole payload handed to the execution collaborator.
pub fn emit(log: &CircuitLog) -> String {
    let mut emitter = Emitter::new();
    emitter.emit_log(log)
}

/// Emit the canonical text of a single instruction.
///
/// Used by the program emitter and by the transforms, whose sentinel
/// annotations carry the original instruction's rendered text.
pub fn emit_instruction(instruction: &Instruction) -> String {
    match &instruction.kind {
        InstructionKind::Gate(gate) => emit_gate(gate, &instruction.qubits),

        InstructionKind::Measure => {
            let q = instruction.qubits.first().map_or(0, |q| q.0);
            let c = instruction.clbits.first().map_or(0, |c| c.0);
            format!("measure q[{q}] -> c[{c}];")
        }

        InstructionKind::Header => "OPENQASM 2.0;\ninclude \"qelib1.inc\";".to_string(),

        InstructionKind::QregDecl { size } => format!("qreg q[{size}];"),

        InstructionKind::CregDecl { size } => format!("creg c[{size}];"),

        InstructionKind::Annotation(text) => format!("// {text}"),
    }
}

fn emit_gate(gate: &StandardGate, qubits: &[QubitId]) -> String {
    let name = gate.name();
    let operands = emit_qubits(qubits);
    match gate.parameter() {
        Some(theta) => format!("{name}({theta}) {operands};"),
        None => format!("{name} {operands};"),
    }
}

fn emit_qubits(qubits: &[QubitId]) -> String {
    qubits
        .iter()
        .map(|q| format!("q[{}]", q.0))
        .collect::<Vec<_>>()
        .join(",")
}

/// OpenQASM 2.0 emitter.
struct Emitter {
    output: String,
}

impl Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_log(&mut self, log: &CircuitLog) -> String {
        for instruction in log {
            self.writeln(&emit_instruction(instruction));
        }
        // The program text joins lines without a trailing newline, matching
        // the request payload shape the collaborator expects.
        if self.output.ends_with('\n') {
            self.output.pop();
        }
        self.output.clone()
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoll_ir::ClbitId;

    #[test]
    fn test_emit_single_qubit_gates() {
        let h = Instruction::single_qubit_gate(StandardGate::H, QubitId(0));
        assert_eq!(emit_instruction(&h), "h q[0];");

        let sdg = Instruction::single_qubit_gate(StandardGate::Sdg, QubitId(3));
        assert_eq!(emit_instruction(&sdg), "sdg q[3];");
    }

    #[test]
    fn test_emit_parameterized() {
        let ry = Instruction::single_qubit_gate(StandardGate::Ry(0.5), QubitId(0));
        assert_eq!(emit_instruction(&ry), "ry(0.5) q[0];");

        let neg = Instruction::single_qubit_gate(StandardGate::Rz(-1.25), QubitId(1));
        assert_eq!(emit_instruction(&neg), "rz(-1.25) q[1];");

        let zero = Instruction::single_qubit_gate(StandardGate::Rx(0.0), QubitId(0));
        assert_eq!(emit_instruction(&zero), "rx(0) q[0];");
    }

    #[test]
    fn test_emit_multi_qubit_gates() {
        let cx = Instruction::two_qubit_gate(StandardGate::CX, QubitId(0), QubitId(1));
        assert_eq!(emit_instruction(&cx), "cx q[0],q[1];");

        let ccx = Instruction::gate(StandardGate::CCX, [QubitId(0), QubitId(1), QubitId(2)]);
        assert_eq!(emit_instruction(&ccx), "ccx q[0],q[1],q[2];");
    }

    #[test]
    fn test_emit_measure() {
        let m = Instruction::measure(QubitId(1), ClbitId(0));
        assert_eq!(emit_instruction(&m), "measure q[1] -> c[0];");
    }

    #[test]
    fn test_emit_annotation() {
        let a = Instruction::annotation("controlled-ccx not supported");
        assert_eq!(emit_instruction(&a), "// controlled-ccx not supported");
    }

    #[test]
    fn test_emit_program() {
        let mut log = CircuitLog::new();
        log.header()
            .unwrap()
            .qreg(1)
            .unwrap()
            .creg(1)
            .unwrap()
            .h(QubitId(0))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap();

        let expected = "OPENQASM 2.0;\n\
                        include \"qelib1.inc\";\n\
                        qreg q[1];\n\
                        creg c[1];\n\
                        h q[0];\n\
                        measure q[0] -> c[0];";
        assert_eq!(emit(&log), expected);
    }

    #[test]
    fn test_emit_empty_log() {
        assert_eq!(emit(&CircuitLog::new()), "");
    }
}
