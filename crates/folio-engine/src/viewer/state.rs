use crate::models::CodeAnnotation;

use super::{
    annotations::AnnotationIndex,
    tooltip::{LineRect, TooltipAnchor},
};

/// Hover/selection state of one mounted viewer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Pointer is over an annotated line; a tooltip is shown.
    Hovering {
        line: usize,
        annotation: CodeAnnotation,
        anchor: TooltipAnchor,
    },
    /// An annotation was clicked; its detail view stays open until closed.
    Selected { line: usize, annotation: CodeAnnotation },
}

/// Per-instance interaction state machine for the annotated code viewer.
///
/// Keyed on the snippet it belongs to; [`ViewerState::reset`] drops any
/// hover or selection when the snippet changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewerState {
    snippet_key: String,
    interaction: Interaction,
}

impl ViewerState {
    pub fn new(snippet_key: impl Into<String>) -> Self {
        Self {
            snippet_key: snippet_key.into(),
            interaction: Interaction::Idle,
        }
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn snippet_key(&self) -> &str {
        &self.snippet_key
    }

    /// Switches to another snippet. Returns `true` if the key changed.
    pub fn reset(&mut self, snippet_key: &str) -> bool {
        if self.snippet_key == snippet_key {
            return false;
        }
        self.snippet_key = snippet_key.to_string();
        self.interaction = Interaction::Idle;
        true
    }

    /// Pointer entered rendered line `line`.
    ///
    /// Ignored while an annotation is selected.
    pub fn pointer_enter(&mut self, index: &AnnotationIndex<'_>, line: usize, rect: LineRect) {
        if matches!(self.interaction, Interaction::Selected { .. }) {
            return;
        }
        self.interaction = match index.first_for_line(line) {
            Some(annotation) => Interaction::Hovering {
                line,
                annotation: annotation.clone(),
                anchor: TooltipAnchor::above(rect),
            },
            None => Interaction::Idle,
        };
    }

    /// Pointer left a line. Does not close a selection.
    pub fn pointer_leave(&mut self) {
        if matches!(self.interaction, Interaction::Hovering { .. }) {
            self.interaction = Interaction::Idle;
        }
    }

    /// Clicked rendered line `line`.
    ///
    /// Selecting replaces any hover or earlier selection directly. Clicks on
    /// unannotated lines change nothing.
    pub fn click(&mut self, index: &AnnotationIndex<'_>, line: usize) {
        if let Some(annotation) = index.first_for_line(line) {
            self.interaction = Interaction::Selected {
                line,
                annotation: annotation.clone(),
            };
        }
    }

    /// Explicit close of the detail view.
    pub fn close(&mut self) {
        if matches!(self.interaction, Interaction::Selected { .. }) {
            self.interaction = Interaction::Idle;
        }
    }

    /// The tooltip to show, if any. Always `None` while a selection is open.
    pub fn tooltip(&self) -> Option<(&CodeAnnotation, TooltipAnchor)> {
        match &self.interaction {
            Interaction::Hovering {
                annotation, anchor, ..
            } => Some((annotation, *anchor)),
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<&CodeAnnotation> {
        match &self.interaction {
            Interaction::Selected { annotation, .. } => Some(annotation),
            _ => None,
        }
    }

    /// Line currently hovered or selected, for highlighting.
    pub fn active_line(&self) -> Option<usize> {
        match &self.interaction {
            Interaction::Idle => None,
            Interaction::Hovering { line, .. } | Interaction::Selected { line, .. } => Some(*line),
        }
    }
}
