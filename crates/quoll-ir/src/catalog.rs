//! Static gate catalog: arity, inverse rules, and control rules.
//!
//! The catalog is a total function over [`StandardGate`] — every kind in the
//! closed set has an entry, so adding a gate without deciding its rules is a
//! compile error at the `match`.

use crate::gate::StandardGate;

/// How a gate behaves under temporal inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InverseRule {
    /// The gate is its own inverse.
    SelfInverse,
    /// The gate swaps with its adjoint partner.
    DaggerPair,
    /// The gate keeps its kind and negates its angle.
    NegateParameter,
    /// No inverse is defined by this instruction set.
    Unsupported,
}

/// How a gate lifts to its singly-controlled form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRule {
    /// A native controlled instruction exists (control prepended).
    Native,
    /// The gate lowers into a fixed multi-instruction expansion.
    Decompose,
    /// No controlled form is defined by this instruction set.
    Unsupported,
}

/// Catalog entry for one gate kind.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Number of qubit operands.
    pub arity: u32,
    /// Whether the gate carries an angle parameter.
    pub parameterized: bool,
    /// Rule applied by the inversion transform.
    pub inverse: InverseRule,
    /// Rule applied by the control-lift transform.
    pub control: ControlRule,
}

/// Look up the catalog entry for a gate.
pub fn lookup(gate: &StandardGate) -> CatalogEntry {
    CatalogEntry {
        arity: gate.num_qubits(),
        parameterized: gate.is_parameterized(),
        inverse: inverse_rule(gate),
        control: control_rule(gate),
    }
}

/// Inverse rule for a gate kind.
///
/// Every multi-qubit gate is uninvertible by this system; the transform
/// records a sentinel for it instead of failing.
pub fn inverse_rule(gate: &StandardGate) -> InverseRule {
    match gate {
        StandardGate::X | StandardGate::Y | StandardGate::Z | StandardGate::H => {
            InverseRule::SelfInverse
        }
        StandardGate::S | StandardGate::Sdg | StandardGate::T | StandardGate::Tdg => {
            InverseRule::DaggerPair
        }
        StandardGate::Rx(_) | StandardGate::Ry(_) | StandardGate::Rz(_) => {
            InverseRule::NegateParameter
        }
        StandardGate::CX | StandardGate::CY | StandardGate::CZ | StandardGate::CCX => {
            InverseRule::Unsupported
        }
    }
}

/// Control rule for a gate kind.
pub fn control_rule(gate: &StandardGate) -> ControlRule {
    match gate {
        StandardGate::X | StandardGate::Y | StandardGate::Z => ControlRule::Native,
        StandardGate::H => ControlRule::Decompose,
        StandardGate::S
        | StandardGate::Sdg
        | StandardGate::T
        | StandardGate::Tdg
        | StandardGate::Rx(_)
        | StandardGate::Ry(_)
        | StandardGate::Rz(_)
        | StandardGate::CX
        | StandardGate::CY
        | StandardGate::CZ
        | StandardGate::CCX => ControlRule::Unsupported,
    }
}

/// Negate an angle, normalizing `-0.0` to `0.0` so inverted zero rotations
/// render identically to the original.
fn negate(theta: f64) -> f64 {
    let neg = -theta;
    if neg == 0.0 { 0.0 } else { neg }
}

impl StandardGate {
    /// The algebraic inverse of this gate, or `None` when no rule applies.
    pub fn inverse(&self) -> Option<StandardGate> {
        match self {
            StandardGate::X | StandardGate::Y | StandardGate::Z | StandardGate::H => Some(*self),
            StandardGate::S => Some(StandardGate::Sdg),
            StandardGate::Sdg => Some(StandardGate::S),
            StandardGate::T => Some(StandardGate::Tdg),
            StandardGate::Tdg => Some(StandardGate::T),
            StandardGate::Rx(theta) => Some(StandardGate::Rx(negate(*theta))),
            StandardGate::Ry(theta) => Some(StandardGate::Ry(negate(*theta))),
            StandardGate::Rz(theta) => Some(StandardGate::Rz(negate(*theta))),
            StandardGate::CX | StandardGate::CY | StandardGate::CZ | StandardGate::CCX => None,
        }
    }

    /// The native singly-controlled form of this gate, or `None` when the
    /// instruction set has no single controlled instruction for it.
    pub fn controlled(&self) -> Option<StandardGate> {
        match self {
            StandardGate::X => Some(StandardGate::CX),
            StandardGate::Y => Some(StandardGate::CY),
            StandardGate::Z => Some(StandardGate::CZ),
            _ => None,
        }
    }
}
