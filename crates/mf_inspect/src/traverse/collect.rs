use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use super::each_field;
use crate::{Inspect, InspectConfig};

// -----------------------------------------------------------------------------
// CollectError

/// Errors raised by [`try_terminal_fields`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectError {
    /// The traversal visited `limit` nodes without draining its queue.
    #[error("node limit of {limit} reached after collecting {} paths", collected.len())]
    NodeLimitExceeded {
        limit: usize,
        /// The sorted paths found before the traversal stopped.
        collected: Vec<String>,
    },
}

// -----------------------------------------------------------------------------
// Collection

struct Collected {
    paths: Vec<String>,
    truncated: bool,
}

/// Lists the path of every leaf reachable from `value`.
///
/// Paths are joined with the configured separator, sorted lexicographically
/// and free of duplicates. A value that does not resolve to a struct yields
/// an empty list.
///
/// The traversal is breadth-first, so stack depth does not grow with the
/// nesting depth of `value`. If [`InspectConfig::max_nodes`] is reached the
/// paths found so far are returned and a warning is logged; use
/// [`try_terminal_fields`] to observe truncation instead.
///
/// # Examples
///
/// ```
/// use mf_inspect::{Inspect, InspectConfig, terminal_fields};
///
/// #[derive(Inspect)]
/// struct Point {
///     pub x: f64,
///     pub y: f64,
/// }
///
/// #[derive(Inspect)]
/// struct Segment {
///     pub to: Point,
///     pub from: Point,
/// }
///
/// let segment = Segment {
///     from: Point { x: 0.0, y: 0.0 },
///     to: Point { x: 1.0, y: 1.0 },
/// };
///
/// assert_eq!(
///     terminal_fields(&segment, &InspectConfig::default()),
///     ["from.x", "from.y", "to.x", "to.y"],
/// );
/// ```
pub fn terminal_fields(value: &dyn Inspect, config: &InspectConfig) -> Vec<String> {
    let Collected { paths, truncated } = collect(value, config);
    if truncated {
        log::warn!(
            "terminal field collection stopped at the node limit ({:?}); {} paths returned",
            config.max_nodes(),
            paths.len(),
        );
    }
    paths
}

/// Like [`terminal_fields`], but reports hitting the node limit as an error.
///
/// # Errors
///
/// Returns [`CollectError::NodeLimitExceeded`], carrying the partial result,
/// when [`InspectConfig::max_nodes`] nodes were visited before the traversal
/// finished.
///
/// # Examples
///
/// ```
/// use mf_inspect::{Inspect, InspectConfig};
/// use mf_inspect::traverse::{CollectError, try_terminal_fields};
///
/// #[derive(Inspect)]
/// struct Inner {
///     pub leaf: bool,
/// }
///
/// #[derive(Inspect)]
/// struct Outer {
///     pub top: bool,
///     pub inner: Inner,
/// }
///
/// let outer = Outer { top: true, inner: Inner { leaf: false } };
/// let config = InspectConfig::default().with_max_nodes(Some(1));
///
/// let Err(CollectError::NodeLimitExceeded { limit, collected }) =
///     try_terminal_fields(&outer, &config)
/// else {
///     panic!("expected truncation");
/// };
/// assert_eq!(limit, 1);
/// assert_eq!(collected, ["top"]);
/// ```
pub fn try_terminal_fields(
    value: &dyn Inspect,
    config: &InspectConfig,
) -> Result<Vec<String>, CollectError> {
    let Collected { paths, truncated } = collect(value, config);
    match config.max_nodes() {
        Some(limit) if truncated => Err(CollectError::NodeLimitExceeded {
            limit,
            collected: paths,
        }),
        _ => Ok(paths),
    }
}

fn collect(value: &dyn Inspect, config: &InspectConfig) -> Collected {
    let separator = config.separator();

    let mut paths = Vec::new();
    let mut queue: VecDeque<(&dyn Inspect, String)> = VecDeque::new();
    queue.push_back((value, String::new()));

    let mut visited = 0_usize;
    let mut truncated = false;

    while let Some((node, prefix)) = queue.pop_front() {
        if config.max_nodes().is_some_and(|limit| visited >= limit) {
            truncated = true;
            break;
        }
        visited += 1;
        log::trace!(
            "collecting fields of `{}` at {prefix:?}",
            node.inspect_type_shape().type_name()
        );

        each_field(node, config, |child, name, kind| {
            let path = if prefix.is_empty() {
                String::from(name)
            } else {
                format!("{prefix}{separator}{name}")
            };

            if kind.is_leaf() {
                paths.push(path);
            } else if let Some(child) = child {
                queue.push_back((child, path));
            }
        });
    }

    paths.sort_unstable();
    paths.dedup();

    log::debug!(
        "collected {} terminal paths from {visited} nodes{}",
        paths.len(),
        if truncated { " (truncated)" } else { "" },
    );

    Collected { paths, truncated }
}
