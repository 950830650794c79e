use chacharand::rng::{ChaChaRand, GeneratorError};

fn zero_seed() -> String {
    "00".repeat(40)
}

fn rng() -> ChaChaRand {
    ChaChaRand::from_seed(&zero_seed()).unwrap()
}

#[test]
fn shuffle_produces_a_permutation() {
    let mut rng = rng();

    let original: Vec<u32> = (0..50).collect();
    let mut shuffled = original.clone();
    rng.shuffle(&mut shuffled).unwrap();

    let mut sorted = shuffled.clone();
    sorted.sort_unstable();

    assert_eq!(sorted, original);
}

#[test]
fn shuffle_is_deterministic() {
    let seed = "1337".repeat(20);

    let mut a = ChaChaRand::from_seed(&seed).unwrap();
    let mut b = ChaChaRand::from_seed(&seed).unwrap();

    let mut left: Vec<u32> = (0..32).collect();
    let mut right: Vec<u32> = (0..32).collect();

    a.shuffle(&mut left).unwrap();
    b.shuffle(&mut right).unwrap();

    assert_eq!(left, right);
}

#[test]
fn shuffle_rejects_sequences_shorter_than_two() {
    let mut rng = rng();

    let mut empty: [u32; 0] = [];
    assert!(matches!(
        rng.shuffle(&mut empty),
        Err(GeneratorError::InvalidStepCount)
    ));

    let mut single = [7u32];
    assert!(matches!(
        rng.shuffle(&mut single),
        Err(GeneratorError::InvalidStepCount)
    ));
}

#[test]
fn shuffle_of_two_elements_works() {
    let mut rng = rng();

    let mut pair = [1u32, 2];
    rng.shuffle(&mut pair).unwrap();

    assert!(pair == [1, 2] || pair == [2, 1]);
}

#[test]
fn partial_shuffle_returns_the_requested_count() {
    let mut rng = rng();

    let original: Vec<u32> = (0..20).collect();
    let mut seq = original.clone();
    let chosen = rng.partial_shuffle(&mut seq, 5).unwrap();

    assert_eq!(chosen.len(), 5);
    for value in &chosen {
        assert!(original.contains(value));
    }

    // The sequence is only rearranged, never altered.
    let mut sorted = seq.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, original);
}

#[test]
fn partial_shuffle_reads_first_chosen_first() {
    let mut rng = rng();

    let mut seq: Vec<u32> = (0..20).collect();
    let chosen = rng.partial_shuffle(&mut seq, 4).unwrap();

    // Selections accumulate at the tail, most recent last, so the result
    // is the tail reversed.
    let tail: Vec<u32> = seq[16..].iter().rev().copied().collect();
    assert_eq!(chosen, tail);
}

#[test]
fn partial_shuffle_validates_step_count() {
    let mut rng = rng();

    let mut seq: Vec<u32> = (0..10).collect();
    assert!(matches!(
        rng.partial_shuffle(&mut seq, 0),
        Err(GeneratorError::InvalidStepCount)
    ));
    assert!(matches!(
        rng.partial_shuffle(&mut seq, 10),
        Err(GeneratorError::InvalidStepCount)
    ));

    assert!(rng.partial_shuffle(&mut seq, 9).is_ok());
}

#[test]
fn sample_draws_without_replacement() {
    let mut rng = rng();

    let population: Vec<u32> = (0..10).collect();
    let sample = rng.sample(&population, 3, true).unwrap();

    assert_eq!(sample.len(), 3);
    for value in &sample {
        assert!(population.contains(value));
    }

    let mut deduped = sample.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), 3);
}

#[test]
fn sample_does_not_reorder_the_input() {
    let mut rng = rng();

    let population: Vec<u32> = (0..10).collect();
    rng.sample(&population, 4, true).unwrap();

    assert_eq!(population, (0..10).collect::<Vec<u32>>());
}

#[test]
fn sample_size_bounds_are_enforced() {
    let mut rng = rng();

    let population: Vec<u32> = (0..10).collect();

    assert!(matches!(
        rng.sample(&population, 0, true),
        Err(GeneratorError::InvalidSampleSize)
    ));
    // A full-length sample is rejected by design; shuffle instead.
    assert!(matches!(
        rng.sample(&population, 10, true),
        Err(GeneratorError::InvalidSampleSize)
    ));

    assert_eq!(rng.sample(&population, 9, true).unwrap().len(), 9);
}

#[test]
fn order_agnostic_majority_sample_keeps_original_order() {
    let mut rng = rng();

    let population: Vec<u32> = (0..10).collect();
    let sample = rng.sample(&population, 7, false).unwrap();

    assert_eq!(sample.len(), 7);
    // The anti-sample path returns the survivors in their original order.
    assert!(sample.windows(2).all(|pair| pair[0] < pair[1]));

    let mut deduped = sample.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), 7);
}

#[test]
fn order_agnostic_majority_sample_is_still_unbiased_in_membership() {
    let mut rng = rng();

    // Every element must be reachable, including indices the anti-draw
    // never touches.
    let population: Vec<u32> = (0..6).collect();
    let mut seen = [false; 6];

    for _ in 0..200 {
        for value in rng.sample(&population, 4, false).unwrap() {
            seen[value as usize] = true;
        }
    }

    assert!(seen.iter().all(|&hit| hit));
}

#[test]
fn sample_is_deterministic() {
    let seed = "feedface".repeat(10);

    let mut a = ChaChaRand::from_seed(&seed).unwrap();
    let mut b = ChaChaRand::from_seed(&seed).unwrap();

    let population: Vec<u32> = (0..25).collect();

    for (size, order_matters) in [(3, true), (20, false), (12, true)] {
        assert_eq!(
            a.sample(&population, size, order_matters).unwrap(),
            b.sample(&population, size, order_matters).unwrap()
        );
    }

    assert_eq!(a.used_bits_count(), b.used_bits_count());
}

#[test]
fn choice_picks_an_existing_element() {
    let mut rng = rng();

    let population = [10u32, 20, 30, 40];
    for _ in 0..50 {
        let chosen = rng.choice(&population).unwrap();
        assert!(population.contains(chosen));
    }
}

#[test]
fn choice_rejects_short_sequences() {
    let mut rng = rng();

    let empty: [u32; 0] = [];
    assert!(matches!(
        rng.choice(&empty),
        Err(GeneratorError::InvalidSampleSize)
    ));
    assert!(matches!(
        rng.choice(&[1u32]),
        Err(GeneratorError::InvalidSampleSize)
    ));
}

#[test]
fn choices_return_the_requested_count() {
    let mut rng = rng();

    let population: Vec<u32> = (0..8).collect();
    let drawn = rng.choices(&population, 7).unwrap();

    assert_eq!(drawn.len(), 7);
    for value in &drawn {
        assert!(population.contains(value));
    }
}

#[test]
fn choices_validate_count() {
    let mut rng = rng();

    let population: Vec<u32> = (0..5).collect();

    assert!(matches!(
        rng.choices(&population, 0),
        Err(GeneratorError::InvalidSampleSize)
    ));
    assert!(matches!(
        rng.choices(&population, 5),
        Err(GeneratorError::InvalidSampleSize)
    ));
}

#[test]
fn sampler_streams_are_reproducible_end_to_end() {
    let seed = "0badc0de".repeat(10);

    let mut a = ChaChaRand::from_seed(&seed).unwrap();
    let mut b = ChaChaRand::from_seed(&seed).unwrap();

    let mut left: Vec<u32> = (0..16).collect();
    let mut right: Vec<u32> = (0..16).collect();

    a.shuffle(&mut left).unwrap();
    b.shuffle(&mut right).unwrap();
    assert_eq!(left, right);

    assert_eq!(
        a.sample(&left, 5, false).unwrap(),
        b.sample(&right, 5, false).unwrap()
    );
    assert_eq!(a.choice(&left).unwrap(), b.choice(&right).unwrap());
    assert_eq!(a.used_bits_count(), b.used_bits_count());
}
