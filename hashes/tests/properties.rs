//! Properties of the streaming engine that must hold for any input.

use proptest::prelude::*;
use proptest::sample::Index;
use shastream_hashes::sha256::{self, Hash, HashEngine};

/// Hashes `data` cut at the given split points, one `input` call per piece.
fn hash_split(data: &[u8], splits: &[Index]) -> Hash {
    let mut cuts: Vec<usize> = splits.iter().map(|i| i.index(data.len() + 1)).collect();
    cuts.sort_unstable();

    let mut engine = HashEngine::new();
    let mut start = 0;
    for cut in cuts {
        engine.input(&data[start..cut]).unwrap();
        start = cut;
    }
    engine.input(&data[start..]).unwrap();
    engine.finalize().unwrap()
}

proptest! {
    #[test]
    fn split_invariance(
        data in proptest::collection::vec(any::<u8>(), 0..600),
        splits in proptest::collection::vec(any::<Index>(), 0..12),
    ) {
        prop_assert_eq!(hash_split(&data, &splits), sha256::hash(&data));
    }

    #[test]
    fn deterministic(data in proptest::collection::vec(any::<u8>(), 0..300)) {
        prop_assert_eq!(sha256::hash(&data), sha256::hash(&data));
        prop_assert_eq!(Hash::const_hash(&data), sha256::hash(&data));
    }

    #[test]
    fn single_bit_flip_changes_digest(
        data in proptest::collection::vec(any::<u8>(), 1..300),
        position in any::<Index>(),
        bit in 0u8..8,
    ) {
        let mut flipped = data.clone();
        flipped[position.index(data.len())] ^= 1 << bit;
        prop_assert_ne!(sha256::hash(&data), sha256::hash(&flipped));
    }

    #[test]
    fn length_extension_changes_digest(data in proptest::collection::vec(any::<u8>(), 0..200)) {
        let mut longer = data.clone();
        longer.push(0);
        prop_assert_ne!(sha256::hash(&data), sha256::hash(&longer));
    }

    #[test]
    fn hex_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..100)) {
        let hash = sha256::hash(&data);
        let hex = hash.to_string();
        prop_assert_eq!(hex.len(), 64);
        prop_assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        prop_assert_eq!(hex.parse::<Hash>().unwrap(), hash);
    }
}

#[test]
fn every_split_of_boundary_lengths() {
    for len in [55usize, 56, 63, 64, 65, 119, 120] {
        let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let expected = sha256::hash(&data);
        for cut in 0..=len {
            let mut engine = HashEngine::new();
            engine.input(&data[..cut]).unwrap();
            engine.input(&data[cut..]).unwrap();
            assert_eq!(engine.finalize().unwrap(), expected, "len {} cut {}", len, cut);
        }
    }
}

#[test]
fn boundary_reference_digests() {
    let vectors: [(usize, &str); 4] = [
        (55, "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318"),
        (56, "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a"),
        (64, "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb"),
        (119, "31eba51c313a5c08226adf18d4a359cfdfd8d2e816b13f4af952f7ea6584dcfb"),
    ];
    for (len, expected) in vectors {
        assert_eq!(sha256::hash(&vec![b'a'; len]).to_string(), expected, "len {}", len);
    }
}

#[test]
fn independent_engines_across_threads() {
    let handles: Vec<_> = (0u8..4)
        .map(|seed| {
            std::thread::spawn(move || {
                let data = vec![seed; 4096];
                let mut engine = HashEngine::new();
                for chunk in data.chunks(100) {
                    engine.input(chunk).unwrap();
                }
                (engine.finalize().unwrap(), sha256::hash(&data))
            })
        })
        .collect();

    for handle in handles {
        let (streamed, one_shot) = handle.join().unwrap();
        assert_eq!(streamed, one_shot);
    }
}
