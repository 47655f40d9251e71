//! Drag gesture state for hover-triggered reordering.
//!
//! Reordering happens while the pointer moves, not on drop. While a card is
//! dragged over another one, the move fires once the pointer crosses the
//! hovered card's vertical midpoint in the direction of travel: below it when
//! dragging down, above it when dragging up. The gesture then tracks the field
//! at its new index. This state lives in the editor and is thrown away when
//! the gesture ends, whether or not it ended with a drop.

/// Where the pointer sits relative to the card it is hovering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverPosition {
    /// Pointer `clientY`.
    pub pointer_y: f64,
    /// Hovered card's bounding box top, in the same coordinate space.
    pub top: f64,
    pub height: f64,
}

impl HoverPosition {
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Which field is being dragged, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    dragging: Option<usize>,
}

impl DragState {
    pub fn start(&mut self, index: usize) {
        self.dragging = Some(index);
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.dragging
    }

    pub fn is_dragging(&self, index: usize) -> bool {
        self.dragging == Some(index)
    }

    /// The pointer is over the card at `hover_index`.
    ///
    /// Returns the `(from, to)` move the shell must apply, or `None` when no
    /// gesture is active, the pointer is over the dragged card itself, or it
    /// has not yet crossed the hovered card's midpoint.
    pub fn hover(&mut self, hover_index: usize, at: HoverPosition) -> Option<(usize, usize)> {
        let from = self.dragging?;
        if from == hover_index {
            return None;
        }

        let middle = at.midpoint();
        if from < hover_index && at.pointer_y < middle {
            return None;
        }
        if from > hover_index && at.pointer_y > middle {
            return None;
        }

        self.dragging = Some(hover_index);
        Some((from, hover_index))
    }

    /// Ends the gesture and discards its state.
    pub fn end(&mut self) -> Option<usize> {
        self.dragging.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::FieldKind;
    use crate::model::form::Form;

    fn at(pointer_y: f64, top: f64, height: f64) -> HoverPosition {
        HoverPosition {
            pointer_y,
            top,
            height,
        }
    }

    fn names(form: &Form) -> Vec<&str> {
        form.fields().iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn hover_without_drag_does_nothing() {
        let mut drag = DragState::default();
        assert_eq!(drag.hover(2, at(50.0, 0.0, 100.0)), None);
    }

    #[test]
    fn hover_over_self_does_nothing() {
        let mut drag = DragState::default();
        drag.start(1);
        assert_eq!(drag.hover(1, at(0.0, 0.0, 100.0)), None);
        assert_eq!(drag.dragged_index(), Some(1));
    }

    #[test]
    fn dragging_down_waits_for_midpoint() {
        let mut drag = DragState::default();
        drag.start(0);

        // Card 1 spans 100..200; entering at its top edge is not enough.
        assert_eq!(drag.hover(1, at(110.0, 100.0, 100.0)), None);
        assert!(drag.is_dragging(0));

        assert_eq!(drag.hover(1, at(160.0, 100.0, 100.0)), Some((0, 1)));
        assert!(drag.is_dragging(1));
    }

    #[test]
    fn dragging_up_waits_for_midpoint() {
        let mut drag = DragState::default();
        drag.start(2);

        assert_eq!(drag.hover(1, at(190.0, 100.0, 100.0)), None);
        assert_eq!(drag.hover(1, at(140.0, 100.0, 100.0)), Some((2, 1)));
    }

    #[test]
    fn swap_past_tall_card_does_not_bounce_back() {
        let mut form = Form::new();
        form.add_field(FieldKind::Textarea);
        form.add_field(FieldKind::Text);
        let mut drag = DragState::default();

        // Short card (field2, 300..360) dragged up over the tall one (0..300).
        drag.start(1);
        let (from, to) = drag.hover(0, at(120.0, 0.0, 300.0)).unwrap();
        form.move_field(from, to).unwrap();
        assert_eq!(names(&form), ["field2", "field1"]);

        // The tall card now spans 60..360 and the pointer is still near its top.
        assert_eq!(drag.hover(1, at(120.0, 60.0, 300.0)), None);
        assert_eq!(names(&form), ["field2", "field1"]);
    }

    #[test]
    fn dragging_across_cards_swaps_on_each_crossing() {
        let mut form = Form::new();
        for _ in 0..3 {
            form.add_field(FieldKind::Text);
        }
        let mut drag = DragState::default();
        drag.start(0);

        for hovered in [1, 2] {
            let top = hovered as f64 * 100.0;
            let (from, to) = drag.hover(hovered, at(top + 75.0, top, 100.0)).unwrap();
            form.move_field(from, to).unwrap();
        }

        assert_eq!(names(&form), ["field2", "field3", "field1"]);
        assert!(drag.is_dragging(2));
    }

    #[test]
    fn end_discards_state() {
        let mut drag = DragState::default();
        drag.start(3);
        assert_eq!(drag.end(), Some(3));
        assert_eq!(drag.dragged_index(), None);
        assert_eq!(drag.hover(0, at(0.0, 0.0, 100.0)), None);
    }
}
