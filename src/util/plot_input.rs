//! Pointer helper utilities for the plot surface.

/// Pointer position relative to the center of `element`, in CSS pixels.
///
/// The plot surface renders at its logical size, so the delta is already in
/// plot units.
pub fn pointer_delta_from_center(
    ev: &leptos::ev::PointerEvent,
    element: &web_sys::HtmlDivElement,
) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    let cx = rect.x() + (rect.width() * 0.5);
    let cy = rect.y() + (rect.height() * 0.5);
    (f64::from(ev.client_x()) - cx, f64::from(ev.client_y()) - cy)
}
