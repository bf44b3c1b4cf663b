//! Merging media sources into the stream order.

use belvedere_core::{ContentUri, MediaResult};
use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;

/// Combine the selection, attached items, and device media into one list.
///
/// Attached sources (`selected`, then `additional`) are keyed by identity:
/// an identity keeps the position of its first occurrence and the value of
/// its last, so an attached item shadows a selected one with the same URI.
/// Device media never displaces an attached entry; duplicates from `system`
/// are dropped.
///
/// # Examples
///
/// ```
/// use belvedere_core::{ContentUri, MediaResult};
/// use belvedere_stream::merge_media;
///
/// let item = |id: i64, name: &str| {
///     MediaResult::builder()
///         .uri(ContentUri::external_file(id))
///         .name(name)
///         .build()
///         .unwrap()
/// };
///
/// let merged = merge_media(
///     &[item(1, "selected")],
///     &[item(1, "attached")],
///     vec![item(1, "device"), item(2, "device")],
/// );
///
/// let names: Vec<_> = merged.iter().map(|m| m.name().as_str()).collect();
/// assert_eq!(names, ["attached", "device"]);
/// ```
pub fn merge_media(
    selected: &[MediaResult],
    additional: &[MediaResult],
    system: Vec<MediaResult>,
) -> Vec<MediaResult> {
    let mut merged: IndexMap<ContentUri, MediaResult> =
        IndexMap::with_capacity(selected.len() + additional.len() + system.len());

    for item in selected.iter().chain(additional) {
        merged.insert(item.identity().clone(), item.clone());
    }

    let mut dropped = 0_usize;
    for item in system {
        match merged.entry(item.identity().clone()) {
            Entry::Occupied(_) => dropped += 1,
            Entry::Vacant(slot) => {
                slot.insert(item);
            }
        }
    }

    if dropped > 0 {
        debug!(dropped, "Dropped device media already attached to the stream");
    }

    merged.into_values().collect()
}
