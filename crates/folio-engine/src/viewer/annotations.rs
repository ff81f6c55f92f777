use std::collections::BTreeMap;

use crate::models::CodeAnnotation;

/// Annotations grouped by rendered line.
///
/// Lookups take the 0-based index of a rendered line; annotations store
/// 1-based line numbers.
#[derive(Debug, Default)]
pub struct AnnotationIndex<'a> {
    by_line: BTreeMap<u32, Vec<&'a CodeAnnotation>>,
}

impl<'a> AnnotationIndex<'a> {
    pub fn new(annotations: &'a [CodeAnnotation]) -> Self {
        let mut by_line: BTreeMap<u32, Vec<&'a CodeAnnotation>> = BTreeMap::new();
        for annotation in annotations {
            by_line
                .entry(annotation.line_number)
                .or_default()
                .push(annotation);
        }
        Self { by_line }
    }

    /// All annotations on the line, in list order.
    pub fn for_line(&self, index: usize) -> &[&'a CodeAnnotation] {
        line_number(index)
            .and_then(|n| self.by_line.get(&n))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The annotation surfaced for hover and click: the first in list order.
    pub fn first_for_line(&self, index: usize) -> Option<&'a CodeAnnotation> {
        self.for_line(index).first().copied()
    }

    pub fn is_annotated(&self, index: usize) -> bool {
        !self.for_line(index).is_empty()
    }
}

fn line_number(index: usize) -> Option<u32> {
    u32::try_from(index).ok()?.checked_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::annotation;

    #[test]
    fn index_is_zero_based_line_numbers_one_based() {
        let annotations = vec![annotation("s", 1, "top")];
        let index = AnnotationIndex::new(&annotations);

        assert!(index.is_annotated(0));
        assert!(!index.is_annotated(1));
    }

    #[test]
    fn first_annotation_on_a_line_wins() {
        let annotations = vec![
            annotation("s", 3, "first"),
            annotation("s", 5, "elsewhere"),
            annotation("s", 3, "second"),
        ];
        let index = AnnotationIndex::new(&annotations);

        assert_eq!(index.for_line(2).len(), 2);
        assert_eq!(index.first_for_line(2).unwrap().tooltip_title, "first");
    }

    #[test]
    fn unannotated_and_out_of_range_lines() {
        let annotations = vec![annotation("s", 2, "x")];
        let index = AnnotationIndex::new(&annotations);

        assert!(index.for_line(0).is_empty());
        assert!(index.first_for_line(usize::MAX).is_none());
    }

    #[test]
    fn line_zero_annotations_never_match() {
        let annotations = vec![annotation("s", 0, "bad data")];
        let index = AnnotationIndex::new(&annotations);

        assert!((0..5).all(|i| !index.is_annotated(i)));
    }
}
