//! Main-axis justification, cross-axis sizing/alignment and line packing.

use flexlay_core::{AlignContent, AlignItems, JustifyContent};
use log::debug;

use super::lines::FlexLine;

/// Packing mode shared by `justify-content` and `align-content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Distribution {
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl From<JustifyContent> for Distribution {
    fn from(justify: JustifyContent) -> Self {
        match justify {
            JustifyContent::FlexStart => Self::Start,
            JustifyContent::FlexEnd => Self::End,
            JustifyContent::Center => Self::Center,
            JustifyContent::SpaceBetween => Self::SpaceBetween,
            JustifyContent::SpaceAround => Self::SpaceAround,
            JustifyContent::SpaceEvenly => Self::SpaceEvenly,
        }
    }
}

/// Start offset and effective gap for `count` boxes sharing `free` space.
pub(crate) fn distribution_params(
    mode: Distribution,
    free: f64,
    count: usize,
    gap: f64,
) -> (f64, f64) {
    let n = count as f64;
    match (mode, count) {
        (_, 0) | (Distribution::Start, _) => (0.0, gap),
        (Distribution::End, _) => (free, gap),
        (Distribution::Center, _) => (free / 2.0, gap),
        (Distribution::SpaceBetween | Distribution::SpaceAround | Distribution::SpaceEvenly, 1) => {
            (0.0, 0.0)
        }
        (Distribution::SpaceBetween, _) => (0.0, gap + free / (n - 1.0)),
        (Distribution::SpaceAround, _) => {
            let share = free / n;
            (share / 2.0, gap + share)
        }
        (Distribution::SpaceEvenly, _) => {
            let share = free / (n + 1.0);
            (share, gap + share)
        }
    }
}

/// Place items along the main axis (`justify-content`).
pub(crate) fn justify_line(
    line: &mut FlexLine<'_>,
    justify: JustifyContent,
    available_main: f64,
    gap: f64,
    reversed: bool,
) {
    let count = line.items.len();
    if count == 0 {
        return;
    }
    let used: f64 = line.items.iter().map(|i| i.outer_main()).sum::<f64>() + line.gap_total(gap);
    let free = available_main - used;
    let (start, step) = distribution_params(justify.into(), free, count, gap);

    let mut cursor = start;
    for item in &mut line.items {
        cursor += item.main_margin.0;
        item.main_offset = if reversed {
            available_main - cursor - item.main_size
        } else {
            cursor
        };
        cursor += item.main_size + item.main_margin.1 + step;
    }
}

/// Resolve each item's cross size: stretched items fill the line.
pub(crate) fn size_cross(line: &mut FlexLine<'_>, align_items: AlignItems) {
    let line_cross = line.cross_size;
    for item in &mut line.items {
        item.cross_size = if item.effective_align(align_items) == AlignItems::Stretch {
            item.clamp_cross((line_cross - item.cross_margin_sum()).max(0.0))
        } else {
            item.hypothetical_cross
        };
    }
}

/// Position each item within its line along the cross axis.
pub(crate) fn align_cross(line: &mut FlexLine<'_>, align_items: AlignItems) {
    let line_cross = line.cross_size;
    for item in &mut line.items {
        let (start_margin, end_margin) = item.cross_margin;
        item.cross_offset = match item.effective_align(align_items) {
            AlignItems::FlexStart | AlignItems::Baseline | AlignItems::Stretch => start_margin,
            AlignItems::FlexEnd => line_cross - end_margin - item.cross_size,
            AlignItems::Center => {
                (line_cross - (item.cross_size + start_margin + end_margin)) / 2.0 + start_margin
            }
        };
    }
}

/// Size and position lines along the cross axis.
///
/// A single-line container (`nowrap`, or one line under `align-content:
/// stretch`) gives its only line the whole cross space. Otherwise lines keep
/// their content cross size and are distributed like `justify-content`, with
/// `stretch` first sharing positive free space equally between lines.
pub(crate) fn align_content(
    lines: &mut [FlexLine<'_>],
    align: AlignContent,
    single_line: bool,
    available_cross: f64,
    row_gap: f64,
) {
    for line in lines.iter_mut() {
        line.cross_size = line.hypothetical_cross();
    }
    let count = lines.len();
    if count == 0 {
        return;
    }
    if single_line || (count == 1 && align == AlignContent::Stretch) {
        lines[0].cross_size = available_cross;
        lines[0].cross_position = 0.0;
        return;
    }

    let gaps = (count - 1) as f64 * row_gap;
    let mut free = available_cross - lines.iter().map(|l| l.cross_size).sum::<f64>() - gaps;
    debug!(
        "[ALIGN-CONTENT] mode={align:?} available_cross={available_cross:.3} free={free:.3} lines={count}"
    );

    let mode = match align {
        AlignContent::FlexStart => Distribution::Start,
        AlignContent::FlexEnd => Distribution::End,
        AlignContent::Center => Distribution::Center,
        AlignContent::SpaceBetween => Distribution::SpaceBetween,
        AlignContent::SpaceAround => Distribution::SpaceAround,
        AlignContent::SpaceEvenly => Distribution::SpaceEvenly,
        AlignContent::Stretch => {
            if free > 0.0 {
                let add_each = free / count as f64;
                for line in lines.iter_mut() {
                    line.cross_size += add_each;
                }
                free = 0.0;
            }
            Distribution::Start
        }
    };

    let (start, step) = distribution_params(mode, free, count, row_gap);
    let mut cursor = start;
    for line in lines.iter_mut() {
        line.cross_position = cursor;
        cursor += line.cross_size + step;
    }
}
