//! Static (media-query merge) resolution.

use crate::breakpoint::Breakpoint;
use crate::logging::targets;
use crate::types::{StyleObject, StyleRequest};

/// Resolve a request into a style object with media-query sub-objects.
///
/// Tiers are visited in ascending threshold order. A property lands in a
/// tier only if it has an explicit value for exactly that tier (scalars count
/// for `base` only); values never cascade to wider tiers. `base` entries are
/// merged into the top level, every other non-empty tier is nested under its
/// `@media (min-width: <px>px)` key, and empty tiers are skipped.
///
/// # Example
///
/// ```
/// use stylekit::prelude::*;
///
/// let style = resolve_static(
///     &StyleRequest::new().set("color", BreakpointMap::<StyleValue>::new().base("red").md("blue")),
/// );
///
/// assert_eq!(style.str_value("color"), Some("red"));
/// let md = style.nested("@media (min-width: 768px)").unwrap();
/// assert_eq!(md.str_value("color"), Some("blue"));
/// ```
pub fn resolve_static(request: &StyleRequest) -> StyleObject {
    let mut result = StyleObject::new();

    for breakpoint in Breakpoint::ALL {
        let bucket: StyleObject = request
            .iter()
            .filter_map(|(property, value)| {
                value.at(breakpoint).map(|v| (property, v.clone()))
            })
            .collect();

        if bucket.is_empty() {
            continue;
        }

        tracing::trace!(
            target: targets::RESOLVE,
            breakpoint = %breakpoint,
            properties = bucket.len(),
            "resolved tier"
        );

        match breakpoint.media_query() {
            None => result.extend(bucket),
            Some(query) => result.insert(query, bucket),
        }
    }

    result
}
