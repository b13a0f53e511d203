use super::*;

/// Rotates `(x, y)` counter-clockwise by `radians` about `center`.
pub fn rotate(x: Value, y: Value, radians: Value, center: (Value, Value)) -> (Value, Value) {
    let (sin, cos) = radians.sin_cos();
    let (cx, cy) = center;
    let (dx, dy) = (x - cx, y - cy);
    (cx + dx * cos - dy * sin, cy + dx * sin + dy * cos)
}

/// Rotates `(x, y)` counter-clockwise by `radians` about the origin.
pub fn rotate_origin(x: Value, y: Value, radians: Value) -> (Value, Value) {
    rotate(x, y, radians, (0., 0.))
}
