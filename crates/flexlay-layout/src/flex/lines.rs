//! Partitioning flex items into lines.

use flexlay_core::FlexWrap;
use log::debug;

use super::items::FlexItemState;

/// A run of items laid out along the main axis.
#[derive(Debug, Clone, Default)]
pub(crate) struct FlexLine<'a> {
    pub(crate) items: Vec<FlexItemState<'a>>,
    /// Items plus margins plus gaps along the main axis
    pub(crate) used_main: f64,
    pub(crate) cross_size: f64,
    /// Offset of the line along the cross axis, relative to the content box
    pub(crate) cross_position: f64,
}

impl<'a> FlexLine<'a> {
    fn new(items: Vec<FlexItemState<'a>>, gap: f64) -> Self {
        let mut line = Self {
            items,
            ..Self::default()
        };
        line.used_main = line.hypothetical_main(gap);
        line
    }

    /// Gap total between the items of this line.
    pub(crate) fn gap_total(&self, gap: f64) -> f64 {
        self.items.len().saturating_sub(1) as f64 * gap
    }

    fn hypothetical_main(&self, gap: f64) -> f64 {
        self.items
            .iter()
            .map(FlexItemState::outer_hypothetical_main)
            .sum::<f64>()
            + self.gap_total(gap)
    }

    /// Recompute `used_main` from resolved main sizes.
    pub(crate) fn update_used_main(&mut self, gap: f64) {
        self.used_main =
            self.items.iter().map(FlexItemState::outer_main).sum::<f64>() + self.gap_total(gap);
    }

    /// Largest hypothetical outer cross size among the items.
    pub(crate) fn hypothetical_cross(&self) -> f64 {
        self.items
            .iter()
            .map(FlexItemState::outer_hypothetical_cross)
            .fold(0.0, f64::max)
    }
}

/// Group items into lines according to the wrap mode.
pub(crate) fn partition_lines<'a>(
    items: Vec<FlexItemState<'a>>,
    wrap: FlexWrap,
    available_main: f64,
    gap: f64,
) -> Vec<FlexLine<'a>> {
    if items.is_empty() {
        return Vec::new();
    }
    if wrap == FlexWrap::NoWrap {
        return vec![FlexLine::new(items, gap)];
    }

    let mut lines = Vec::new();
    let mut current: Vec<FlexItemState<'a>> = Vec::new();
    let mut total = 0.0;
    for item in items {
        let outer = item.outer_hypothetical_main();
        let gap_before = if current.is_empty() { 0.0 } else { gap };
        let prospective = total + gap_before + outer;
        if prospective > available_main && !current.is_empty() {
            lines.push(FlexLine::new(std::mem::take(&mut current), gap));
            total = outer;
        } else {
            total = prospective;
        }
        current.push(item);
    }
    lines.push(FlexLine::new(current, gap));

    if wrap == FlexWrap::WrapReverse {
        lines.reverse();
    }
    debug!(
        "[FLEX-LINES] wrap={wrap:?} available_main={available_main:.3} lines={}",
        lines.len()
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisContext;
    use crate::flex::items::collect_items;
    use flexlay_core::{EdgeInsets, FlexDirection, Node, Size};

    fn leaves(widths: &[f64]) -> Vec<Node> {
        widths
            .iter()
            .enumerate()
            .map(|(i, &w)| Node::leaf(i as u64 + 1, Size::new(w, 10.0)))
            .collect()
    }

    fn line_ids(lines: &[FlexLine<'_>]) -> Vec<Vec<u64>> {
        lines
            .iter()
            .map(|line| line.items.iter().map(|i| i.node.id.0).collect())
            .collect()
    }

    fn partition(children: &[Node], wrap: FlexWrap, available: f64, gap: f64) -> Vec<FlexLine<'_>> {
        let axis = AxisContext::new(FlexDirection::Row);
        let items = collect_items(&axis, children, available, 100.0);
        partition_lines(items, wrap, available, gap)
    }

    #[test]
    fn test_empty_yields_no_lines() {
        assert!(partition(&[], FlexWrap::NoWrap, 100.0, 0.0).is_empty());
        assert!(partition(&[], FlexWrap::Wrap, 100.0, 0.0).is_empty());
    }

    #[test]
    fn test_nowrap_single_line_overflows() {
        let children = leaves(&[60.0, 60.0, 60.0]);
        let lines = partition(&children, FlexWrap::NoWrap, 100.0, 5.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].used_main, 190.0);
    }

    #[test]
    fn test_nowrap_counts_margins() {
        let children = vec![Node::leaf(1, Size::new(20.0, 10.0)).with_margin(EdgeInsets::symmetric(0.0, 5.0))];
        let lines = partition(&children, FlexWrap::NoWrap, 100.0, 0.0);
        assert_eq!(lines[0].used_main, 30.0);
    }

    #[test]
    fn test_wrap_breaks_when_full() {
        let children = leaves(&[40.0, 40.0, 40.0, 40.0]);
        let lines = partition(&children, FlexWrap::Wrap, 100.0, 10.0);
        assert_eq!(line_ids(&lines), vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(lines[0].used_main, 90.0);
    }

    #[test]
    fn test_wrap_exact_fit_stays_on_line() {
        let children = leaves(&[50.0, 50.0]);
        let lines = partition(&children, FlexWrap::Wrap, 100.0, 0.0);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_wrap_oversized_item_gets_own_line() {
        let children = leaves(&[150.0, 20.0]);
        let lines = partition(&children, FlexWrap::Wrap, 100.0, 0.0);
        assert_eq!(line_ids(&lines), vec![vec![1], vec![2]]);
    }

    #[test]
    fn test_wrap_reverse_flips_line_order_only() {
        let children = leaves(&[40.0, 40.0, 40.0]);
        let lines = partition(&children, FlexWrap::WrapReverse, 100.0, 0.0);
        assert_eq!(line_ids(&lines), vec![vec![3], vec![1, 2]]);
    }

    #[test]
    fn test_hypothetical_cross_is_max_outer() {
        let children = vec![
            Node::leaf(1, Size::new(10.0, 20.0)),
            Node::leaf(2, Size::new(10.0, 25.0)).with_margin(EdgeInsets::symmetric(5.0, 0.0)),
        ];
        let lines = partition(&children, FlexWrap::NoWrap, 100.0, 0.0);
        assert_eq!(lines[0].hypothetical_cross(), 35.0);
    }
}
