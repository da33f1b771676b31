use std::io::Write;

use crate::core::error::PlotError;
use crate::plots::roots_of_unity::{root_angles, root_label, roots_of_unity};

/**
 * Writes one row per root: label, angle in radians and degrees, real and imaginary part.
 */
pub fn write_root_table<W: Write>(root_count: u32, writer: &mut W) -> Result<(), PlotError> {
    if root_count == 0 {
        return Err(PlotError::InvalidRootCount(root_count));
    }
    writeln!(
        writer,
        "{:>8}  {:>10}  {:>8}  {:>10}  {:>10}",
        "root", "radians", "degrees", "re", "im"
    )?;
    let angles = root_angles(root_count);
    for (index, (angle, root)) in angles.iter().zip(roots_of_unity(root_count)).enumerate() {
        writeln!(
            writer,
            "{:>8}  {:>10.6}  {:>8.3}  {:>10.6}  {:>10.6}",
            root_label(index),
            angle,
            angle.to_degrees(),
            root.re,
            root.im
        )?;
    }
    Ok(())
}
