//! Resolving flexible lengths within a line.

use log::{debug, trace};

use super::items::FlexItemState;
use super::lines::FlexLine;
use crate::options::FlexResolution;

/// Distribute positive or negative free space across the items of `line`.
pub(crate) fn resolve_flexible_lengths(
    line: &mut FlexLine<'_>,
    available_main: f64,
    gap: f64,
    strategy: FlexResolution,
) {
    match strategy {
        FlexResolution::SinglePass => single_pass(line, available_main),
        FlexResolution::Iterative => iterative(line, available_main, gap),
    }
    line.update_used_main(gap);
}

fn single_pass(line: &mut FlexLine<'_>, available_main: f64) {
    let free_space = available_main - line.used_main;
    debug!(
        "[FLEX-RESOLVE] single-pass items={} free={free_space:.3}",
        line.items.len()
    );

    if free_space >= 0.0 {
        let total_grow: f64 = line.items.iter().map(|i| i.grow).sum();
        for item in &mut line.items {
            item.main_size = if total_grow > 0.0 && item.grow > 0.0 {
                let growth = free_space / total_grow * item.grow;
                item.clamp_main(item.hypothetical_main + growth)
            } else {
                item.hypothetical_main
            };
        }
    } else {
        let overflow = -free_space;
        let total_scaled: f64 = line.items.iter().map(|i| i.shrink * i.flex_basis).sum();
        for item in &mut line.items {
            item.main_size = if total_scaled > 0.0 && item.shrink > 0.0 && item.flex_basis > 0.0 {
                let shrinkage = overflow * (item.shrink * item.flex_basis / total_scaled);
                (item.hypothetical_main - shrinkage).max(item.min_main)
            } else {
                item.hypothetical_main
            };
        }
    }
}

/// CSS Flexbox §9.7: freeze, distribute, clamp, repeat.
fn iterative(line: &mut FlexLine<'_>, available_main: f64, gap: f64) {
    let gaps = line.gap_total(gap);
    let growing = line.used_main < available_main;

    for item in &mut line.items {
        let factor = if growing { item.grow } else { item.shrink };
        let inflexible = factor == 0.0
            || (growing && item.flex_basis > item.hypothetical_main)
            || (!growing && item.flex_basis < item.hypothetical_main);
        item.frozen = inflexible;
        item.main_size = item.hypothetical_main;
    }

    let initial_free = free_space(&line.items, available_main, gaps);
    let mut pass = 0usize;
    while line.items.iter().any(|i| !i.frozen) {
        pass += 1;
        let mut free = free_space(&line.items, available_main, gaps);
        let factor_sum: f64 = line
            .items
            .iter()
            .filter(|i| !i.frozen)
            .map(|i| if growing { i.grow } else { i.shrink })
            .sum();
        if factor_sum < 1.0 {
            let scaled = initial_free * factor_sum;
            if scaled.abs() < free.abs() {
                free = scaled;
            }
        }
        trace!("[FLEX-RESOLVE] iterative pass={pass} free={free:.3} factors={factor_sum:.3}");

        distribute(&mut line.items, free, growing);

        // Positive adjustment: min violation. Negative: max violation.
        let adjustments: Vec<f64> = line
            .items
            .iter_mut()
            .map(|item| {
                if item.frozen {
                    return 0.0;
                }
                let clamped = item.clamp_main(item.main_size).max(0.0);
                let adjustment = clamped - item.main_size;
                item.main_size = clamped;
                adjustment
            })
            .collect();
        let total_violation: f64 = adjustments.iter().sum();

        for (item, &adjustment) in line.items.iter_mut().zip(&adjustments) {
            if item.frozen {
                continue;
            }
            item.frozen = if total_violation == 0.0 {
                true
            } else if total_violation > 0.0 {
                adjustment > 0.0
            } else {
                adjustment < 0.0
            };
        }
        if total_violation == 0.0 {
            break;
        }
    }
    debug!(
        "[FLEX-RESOLVE] iterative items={} passes={pass}",
        line.items.len()
    );
}

/// Free space with frozen items at their target and the rest at their basis.
fn free_space(items: &[FlexItemState<'_>], available_main: f64, gaps: f64) -> f64 {
    let used: f64 = items
        .iter()
        .map(|i| {
            let inner = if i.frozen { i.main_size } else { i.flex_basis };
            inner + i.main_margin_sum()
        })
        .sum();
    available_main - used - gaps
}

fn distribute(items: &mut [FlexItemState<'_>], free: f64, growing: bool) {
    if growing {
        let total: f64 = items.iter().filter(|i| !i.frozen).map(|i| i.grow).sum();
        for item in items.iter_mut().filter(|i| !i.frozen) {
            item.main_size = if total > 0.0 {
                item.flex_basis + free * item.grow / total
            } else {
                item.flex_basis
            };
        }
    } else {
        let total: f64 = items
            .iter()
            .filter(|i| !i.frozen)
            .map(|i| i.shrink * i.flex_basis)
            .sum();
        for item in items.iter_mut().filter(|i| !i.frozen) {
            item.main_size = if total > 0.0 {
                item.flex_basis - free.abs() * (item.shrink * item.flex_basis / total)
            } else {
                item.flex_basis
            };
        }
    }
}
