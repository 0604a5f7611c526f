//! Integration tests for region operations and boundary repacking.
//!
//! These tests drive [`MultiStack`] only through its public API and compare the result
//! against a model where every region is an independent `Vec`.

use multistack::{Error, ErrorKind, MultiStack};

fn regions_of<T: Clone>(stacks: &MultiStack<T>) -> Vec<Vec<T>> {
    (0..stacks.region_count())
        .map(|region| stacks.iter_region(region).unwrap().cloned().collect())
        .collect()
}

/// Deterministic pseudo-random sequence (xorshift), enough to mix pushes and pops.
struct Sequence(u64);

impl Sequence {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }
}

#[test]
fn scenario_a_letters() -> Result<(), Box<dyn std::error::Error>> {
    let mut stacks: MultiStack<char> = MultiStack::new(3, 3);
    for letter in ['a', 'b', 'c'] {
        stacks.push(0, letter)?;
    }
    for letter in ['f', 'g', 'h'] {
        stacks.push(1, letter)?;
    }
    stacks.push(2, 'j')?;
    assert_eq!(stacks.to_string(), "{[a,b,c],[f,g,h],[j]}\n");

    stacks.push(1, 'k')?;
    assert_eq!(stacks.to_string(), "{[a,b,c],[f,g,h,k],[j]}\n");
    assert_eq!(stacks.top(1)?, 'k');
    assert_eq!(stacks.size(2)?, 1);
    Ok(())
}

#[test]
fn scenario_b_integers() -> Result<(), Box<dyn std::error::Error>> {
    let mut stacks: MultiStack<i32> = MultiStack::new(2, 2);
    stacks.push(1, 2)?;
    stacks.push(0, 4)?;
    stacks.push(0, 7)?;
    stacks.push(0, 3)?;

    assert_eq!(stacks.to_string(), "{[4,7,3],[2]}\n");
    assert_eq!(stacks.find_min()?, 2);
    Ok(())
}

#[test]
fn matches_independent_stacks_model() {
    const REGIONS: usize = 4;
    const SIZE: usize = 5;

    let mut stacks: MultiStack<u64> = MultiStack::new(REGIONS, SIZE);
    let mut model: Vec<Vec<u64>> = vec![Vec::new(); REGIONS];
    let mut sequence = Sequence(0x9E37_79B9_7F4A_7C15);

    for _ in 0..2_000 {
        let roll = sequence.next();
        let region = (roll % REGIONS as u64) as usize;
        let total: usize = model.iter().map(Vec::len).sum();

        if roll % 3 == 0 {
            match (stacks.pop(region), model[region].pop()) {
                (Ok(value), Some(expected)) => assert_eq!(value, expected),
                (Err(error), None) => assert_eq!(error.kind(), ErrorKind::EmptyRegion),
                (got, expected) => panic!("pop mismatch: {got:?} vs {expected:?}"),
            }
        } else {
            let value = roll >> 8;
            match stacks.push(region, value) {
                Ok(()) => model[region].push(value),
                Err(error) => {
                    assert_eq!(error.kind(), ErrorKind::StructureSaturated);
                    assert_eq!(total, REGIONS * SIZE);
                }
            }
        }

        stacks.check_invariants().unwrap();
        assert_eq!(regions_of(&stacks), model);
    }
}

#[test]
fn saturated_structure_is_unchanged() {
    let mut stacks: MultiStack<u8> = MultiStack::new(3, 2);
    for value in 0..6 {
        stacks.push(value as usize % 3, value).unwrap();
    }
    let before = stacks.clone();

    for region in 0..3 {
        let error = stacks.push(region, 99).unwrap_err();
        assert!(matches!(error, Error::StructureSaturated { .. }));
        assert_eq!(error.operation(), Some("push"));
    }
    assert_eq!(stacks, before);
}

#[test]
fn repack_moves_minimum_slots() {
    // Donor directly next to the target only moves the target's neighbour
    let mut stacks: MultiStack<i32> = MultiStack::new(3, 2);
    stacks.push(0, 1).unwrap();
    stacks.push(0, 2).unwrap();
    stacks.push(1, 3).unwrap();
    stacks.push(0, 4).unwrap();

    assert_eq!(stacks.region_starts(), &[0, 3, 4]);
    assert_eq!(stacks.region_tops(), &[3, 4, 4]);
    assert_eq!(regions_of(&stacks), vec![vec![1, 2, 4], vec![3], vec![]]);
}

#[test]
fn error_reports_are_descriptive() {
    let stacks: MultiStack<i32> = MultiStack::new(2, 2);

    let report = stacks.get(0, 0).unwrap_err().describe();
    assert!(report.starts_with("Error: invalid_offset"));
    assert!(report.contains("Operation: get"));
    assert!(report.contains("File: "));
    assert!(report.contains("Line: "));

    let error = stacks.find_min().unwrap_err();
    assert_eq!(error.kind().to_string(), "structure_empty");
}

#[test]
fn structures_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MultiStack<String>>();
}

#[test]
fn string_elements() {
    let mut stacks: MultiStack<String> = MultiStack::new(2, 1);
    stacks.push(1, "tail".to_string()).unwrap();
    stacks.push(0, "head".to_string()).unwrap();
    assert!(stacks.push(0, "overflow".to_string()).is_err());

    assert_eq!(stacks.pop(1).unwrap(), "tail");
    stacks.push(0, "borrowed".to_string()).unwrap();
    assert_eq!(stacks.to_string(), "{[head,borrowed],[]}\n");
}
