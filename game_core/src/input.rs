//! Pointer and click input mapping

/// Map a pointer's vertical offset inside the host element to field
/// coordinates. When the element is scaled, the offset is scaled by
/// `field_height / element_height`; without a usable element height the
/// offset is taken as-is.
pub fn pointer_to_field_y(offset_y: f32, element_height: f32, field_height: f32) -> f32 {
    if element_height.is_finite() && element_height > 0.0 {
        field_height * (offset_y / element_height)
    } else {
        offset_y
    }
}
