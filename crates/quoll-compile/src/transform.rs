//! Region transform trait and the splice-based rewrite driver.

use quoll_ir::{CircuitLog, Instruction};
use tracing::debug;

use crate::error::{CompileError, CompileResult};

/// A structural transform over a contiguous region of a circuit log.
///
/// Transforms consume the region and produce its replacement; they never
/// abort on an instruction they cannot handle — such positions become
/// inline sentinel annotations and the rest of the region still transforms.
pub trait RegionTransform {
    /// Get the name of this transform.
    fn name(&self) -> &str;

    /// Produce the replacement sequence for a region.
    fn apply(&self, region: &[Instruction]) -> Vec<Instruction>;
}

/// Rewrite everything from `mark` to the end of the log in place.
///
/// The region is spliced out, transformed, and spliced back at the original
/// starting position. `mark` is the value returned by
/// [`CircuitLog::mark`] before the region was built.
pub fn rewrite_from(
    log: &mut CircuitLog,
    mark: usize,
    transform: &dyn RegionTransform,
) -> CompileResult<()> {
    if mark > log.len() {
        return Err(CompileError::MarkOutOfBounds {
            mark,
            len: log.len(),
        });
    }

    let region = log.splice_from(mark);
    let replacement = transform.apply(&region);
    debug!(
        transform = transform.name(),
        mark,
        before = region.len(),
        after = replacement.len(),
        "rewrote log region"
    );
    log.splice_in(mark, replacement);
    Ok(())
}

/// Render an instruction to a single line for use in sentinel text.
///
/// The header directive renders over two lines; collapse to one so the
/// sentinel stays a single comment line.
pub(crate) fn sentinel_text(instruction: &Instruction) -> String {
    quoll_qasm::emit_instruction(instruction).replace('\n', " ")
}
