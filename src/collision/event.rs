use crate::geometry::Axis;

/// Notification that the moving box struck a static box during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionEvent {
    /// Index of the struck box in evaluation order.
    pub index: usize,
    /// Name of the struck box.
    pub name: String,
    /// Axis on which the velocity was reversed.
    pub axis: Axis,
    /// Human-readable message for display.
    pub message: String,
}

impl CollisionEvent {
    pub(crate) fn new(index: usize, name: &str, axis: Axis) -> Self {
        Self {
            index,
            name: name.to_owned(),
            axis,
            message: format!("Collision with {name}"),
        }
    }
}
