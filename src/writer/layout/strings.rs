//! Suffix-merged string packing.
//!
//! ELF string tables may store a name that is a trailing substring of another name
//! inside the longer name's bytes: `"foo"` referenced at `offset(".barfoo") + 4`
//! instead of occupying its own `foo\0` entry. This module picks which names actually
//! get emitted and resolves every input name to its byte offset.

use std::collections::HashMap;

/// Outcome of packing one batch of names.
///
/// `retained` lists the names that must be serialized (each followed by a NUL byte),
/// in emission order; `next_offset` is the offset accumulator advanced past them,
/// suitable for seeding a follow-up batch that appends to the same blob.
pub(crate) struct PackedNames {
    pub(crate) retained: Vec<String>,
    pub(crate) next_offset: usize,
}

/// Packs `names` into the tail of a string table starting at byte `start`.
///
/// Every distinct input name receives exactly one entry in `offsets`; insertion is
/// unconditional, so a name already present in a shared map is overwritten with its
/// new location (last write wins). A name that is a proper suffix of another input
/// name is not emitted at all — it resolves into the tail of its container:
/// `offset(container) + len(container) - len(suffix)`. When several containers exist,
/// the suffix is assigned to the nearest one in reversed-byte order, which keeps whole
/// suffix chains packed into a single emission and is stable no matter how the input
/// was ordered. The empty string always resolves to offset 0 and is never emitted.
pub(crate) fn pack_names<I, S>(
    names: I,
    start: usize,
    offsets: &mut HashMap<String, usize>,
) -> PackedNames
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut distinct: Vec<String> = names
        .into_iter()
        .map(|name| name.as_ref().to_owned())
        .collect();
    distinct.sort_unstable();
    distinct.dedup();

    // The leading NUL of the table already encodes the empty string.
    if let Some(first) = distinct.first() {
        if first.is_empty() {
            distinct.remove(0);
            offsets.insert(String::new(), 0);
        }
    }

    // Ordering by reversed bytes makes every name adjacent to the names it is a
    // suffix of, so one forward pass can fold whole suffix chains into their
    // longest member.
    distinct.sort_unstable_by(|a, b| a.bytes().rev().cmp(b.bytes().rev()));

    let mut retained = Vec::new();
    let mut absorbed: Vec<String> = Vec::new();
    let mut cursor = start;

    let mut names = distinct.into_iter().peekable();
    while let Some(name) = names.next() {
        if let Some(next) = names.peek() {
            if next.ends_with(name.as_str()) {
                absorbed.push(name);
                continue;
            }
        }

        offsets.insert(name.clone(), cursor);
        for suffix in absorbed.drain(..) {
            let tail = cursor + name.len() - suffix.len();
            offsets.insert(suffix, tail);
        }
        cursor += name.len() + 1;
        retained.push(name);
    }

    PackedNames {
        retained,
        next_offset: cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(names: &[&str], start: usize) -> (PackedNames, HashMap<String, usize>) {
        let mut offsets = HashMap::new();
        let packed = pack_names(names.iter().copied(), start, &mut offsets);
        (packed, offsets)
    }

    #[test]
    fn suffix_resolves_into_container() {
        let (packed, offsets) = pack(&["foo", "barfoo"], 1);

        assert_eq!(packed.retained, vec!["barfoo".to_owned()]);
        assert_eq!(packed.next_offset, 1 + "barfoo".len() + 1);
        assert_eq!(offsets["barfoo"], 1);
        assert_eq!(offsets["foo"], offsets["barfoo"] + 3);
    }

    #[test]
    fn unrelated_names_all_emitted() {
        let (packed, offsets) = pack(&[".text", ".data"], 1);

        assert_eq!(packed.retained.len(), 2);
        assert_eq!(packed.next_offset, 1 + 6 + 6);
        let text = offsets[".text"];
        let data = offsets[".data"];
        assert_ne!(text, data);
        assert!(text >= 1 && data >= 1);
    }

    #[test]
    fn duplicates_collapse() {
        let (packed, offsets) = pack(&["main", "main", "main"], 1);
        assert_eq!(packed.retained, vec!["main".to_owned()]);
        assert_eq!(offsets.len(), 1);
        assert_eq!(offsets["main"], 1);
    }

    #[test]
    fn empty_string_is_the_sentinel() {
        let (packed, offsets) = pack(&["", "x", ""], 1);
        assert_eq!(offsets[""], 0);
        assert_eq!(offsets["x"], 1);
        assert_eq!(packed.retained, vec!["x".to_owned()]);
    }

    #[test]
    fn suffix_chain_folds_into_longest() {
        let (packed, offsets) = pack(&["o", "fo", "foo"], 1);

        // "o" < "fo" in reversed order, but "fo" is not a suffix of "foo", so the
        // chain breaks there: "o" folds into "fo", and "foo" is emitted on its own.
        assert_eq!(packed.retained.len(), 2);
        assert!(packed.retained.contains(&"fo".to_owned()));
        assert!(packed.retained.contains(&"foo".to_owned()));
        assert_eq!(offsets["o"], offsets["fo"] + 1);
    }

    #[test]
    fn deterministic_under_permutation() {
        let inputs = ["ab", "b", "cb", "xyzb", "b", "ab"];
        let (_, baseline) = pack(&inputs, 1);

        let mut permuted = inputs;
        permuted.reverse();
        let (_, reversed) = pack(&permuted, 1);

        assert_eq!(baseline, reversed);
    }

    #[test]
    fn shared_map_last_write_wins() {
        let mut offsets = HashMap::new();
        let first = pack_names(["main", ".text"], 1, &mut offsets);
        let first_main = offsets["main"];

        // A later batch appending to the same blob re-places "main"; the map must
        // track the newest location.
        let second = pack_names(["main"], first.next_offset, &mut offsets);
        assert_eq!(offsets["main"], first.next_offset);
        assert_ne!(offsets["main"], first_main);
        assert_eq!(second.next_offset, first.next_offset + "main".len() + 1);
        // the untouched key keeps its original offset
        assert_eq!(offsets.len(), 2);
    }

    #[test]
    fn offsets_address_serialized_bytes() {
        let names = ["ab", "xab", "yz", "q"];
        let (packed, offsets) = pack(&names, 1);

        let mut blob = vec![0u8];
        for name in &packed.retained {
            blob.extend_from_slice(name.as_bytes());
            blob.push(0);
        }
        assert_eq!(blob.len(), packed.next_offset);

        for name in names {
            let at = offsets[name];
            let end = at + name.len();
            assert_eq!(&blob[at..end], name.as_bytes());
            assert_eq!(blob[end], 0);
        }
    }
}
