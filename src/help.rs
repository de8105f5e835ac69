//! Help listing order.
//!
//! Options are listed either in declaration order or sorted by their
//! switches, short switches first: `-a, --apple` sorts as `a|apple`, ahead of
//! `-B, --banana` (`b|banana`) regardless of case.

/// Sort key for one option's switches.
pub fn sort_key<S: AsRef<str>>(switches: &[S]) -> String {
    let mut ordered: Vec<&str> = switches.iter().map(|s| s.as_ref()).collect();
    ordered.sort_by_key(|s| s.len() - s.trim_start_matches('-').len());
    ordered
        .iter()
        .map(|s| s.trim_start_matches('-').to_lowercase())
        .collect::<Vec<_>>()
        .join("|")
}

/// Display position of each entry, given each entry's switches.
///
/// With `sorted` off, positions follow the input order.
pub fn display_order<S: AsRef<str>>(entries: &[Vec<S>], sorted: bool) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..entries.len()).collect();
    if sorted {
        indices.sort_by_cached_key(|&i| sort_key(&entries[i]));
    }

    let mut positions = vec![0; entries.len()];
    for (position, index) in indices.into_iter().enumerate() {
        positions[index] = position;
    }
    positions
}
