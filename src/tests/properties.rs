use crate::{
    shortname, skipcommonname, skipcommonpath, Direction, Operation, SepSpec, ShortenOptions,
    SkipOptions,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn distinct_count(names: &[String]) -> usize {
    names.iter().collect::<HashSet<_>>().len()
}

/// Small-alphabet names: shared runs are frequent, so the interesting
/// shortening and collapsing branches are actually exercised.
fn name_batch() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abc_]{0,12}", 0..8)
}

/// Slash-separated paths over a small component alphabet.
fn path_batch() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec("[ab]{1,3}", 1..5).prop_map(|parts| parts.join("/")),
        0..8,
    )
}

proptest! {
    /// Property 1: Uniqueness preservation
    /// Shortening never merges names that were distinct on the way in.
    #[test]
    fn prop_shortname_preserves_distinct_count(names in name_batch()) {
        let out = shortname(&names, &ShortenOptions::default());
        prop_assert_eq!(out.len(), names.len());
        prop_assert_eq!(distinct_count(&out), distinct_count(&names));
    }

    /// Property 2: Head mode preserves uniqueness too.
    #[test]
    fn prop_shortname_head_preserves_distinct_count(names in name_batch()) {
        let opts = ShortenOptions {
            direction: Direction::Head,
            ..ShortenOptions::default()
        };
        let out = shortname(&names, &opts);
        prop_assert_eq!(distinct_count(&out), distinct_count(&names));
    }

    /// Property 3: Minlen compliance
    /// Every accepted window rendering is at least `minlen` wide; outputs
    /// may fall short only by taking the full-rendering fallback, which
    /// returns every name at its no-op width.
    #[test]
    fn prop_shortname_minlen_or_fallback(names in name_batch(), minlen in 1usize..5) {
        let opts = ShortenOptions { minlen, ..ShortenOptions::default() };
        let noop = skipcommonname(&names, &SkipOptions::default());
        let out = shortname(&names, &opts);
        prop_assert!(
            out.iter().all(|s| s.chars().count() >= minlen) || out == noop,
            "outputs below minlen without taking the fallback: {:?}",
            out
        );
    }

    /// Property 4: Marker shrink-only guarantee
    /// Collapsing common runs never makes a name longer.
    #[test]
    fn prop_skipcommon_never_widens(names in name_batch()) {
        let out = skipcommonname(&names, &SkipOptions::default());
        for (name, skipped) in names.iter().zip(&out) {
            prop_assert!(
                skipped.chars().count() <= name.chars().count(),
                "{:?} widened to {:?}",
                name,
                skipped
            );
        }
    }

    /// Property 5: Marker mode preserves uniqueness.
    #[test]
    fn prop_skipcommon_preserves_distinct_count(names in name_batch()) {
        let out = skipcommonname(&names, &SkipOptions::default());
        prop_assert_eq!(distinct_count(&out), distinct_count(&names));
    }

    /// Property 6: Component-separated marker mode preserves uniqueness.
    #[test]
    fn prop_skipcommon_paths_preserves_distinct_count(paths in path_batch()) {
        let opts = SkipOptions {
            sep: SepSpec::single("/"),
            marker: "...".to_owned(),
        };
        let out = skipcommonname(&paths, &opts);
        prop_assert_eq!(distinct_count(&out), distinct_count(&paths));
    }

    /// Property 7: Re-applying marker mode keeps outputs distinguishable.
    #[test]
    fn prop_skipcommon_output_stable(names in name_batch()) {
        let opts = SkipOptions::default();
        let once = skipcommonname(&names, &opts);
        let twice = skipcommonname(&once, &opts);
        prop_assert_eq!(distinct_count(&twice), distinct_count(&once));
    }

    /// Property 8: Split/join round-trip fidelity.
    #[test]
    fn prop_split_join_roundtrip(name in "[a/_.x]{0,16}", sep in prop::sample::select(vec!["", "/", "_", "::"])) {
        let tokens = crate::sep::split_on(&name, sep);
        prop_assert_eq!(tokens.join(sep), name);
    }
}

/// Bolero fuzz test: no operation panics on arbitrary input batches.
#[test]
fn fuzz_no_panic() {
    bolero::check!()
        .with_type::<Vec<String>>()
        .for_each(|names| {
            let opts = ShortenOptions::default();
            for op in Operation::ALL {
                let out = op.apply(names, &opts);
                assert_eq!(out.len(), names.len());
            }
            let _ = skipcommonpath(names, "*");
        });
}
