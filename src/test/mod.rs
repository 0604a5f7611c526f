//! Shared fixtures for unit tests.

use crate::MultiStack;

// Helper function to build a structure of `regions` x `size` and push `contents[i]` into
// region i, region by region
pub fn filled(regions: usize, size: usize, contents: &[&[i32]]) -> MultiStack<i32> {
    let mut stacks = MultiStack::new(regions, size);
    for (region, values) in contents.iter().enumerate() {
        for value in *values {
            stacks.push(region, *value).unwrap();
        }
    }
    stacks
}

// Helper function to collect every region bottom to top
pub fn collect_regions<T: Clone>(stacks: &MultiStack<T>) -> Vec<Vec<T>> {
    (0..stacks.region_count())
        .map(|region| stacks.iter_region(region).unwrap().cloned().collect())
        .collect()
}

// 3 x 3 chars, region 1 grows into region 2
pub fn scenario_a() -> MultiStack<char> {
    let mut stacks = MultiStack::new(3, 3);
    for letter in ['a', 'b', 'c'] {
        stacks.push(0, letter).unwrap();
    }
    for letter in ['f', 'g', 'h'] {
        stacks.push(1, letter).unwrap();
    }
    stacks.push(2, 'j').unwrap();
    stacks.push(1, 'k').unwrap();
    stacks
}

// 2 x 2 ints, region 0 grows into region 1
pub fn scenario_b() -> MultiStack<i32> {
    let mut stacks = MultiStack::new(2, 2);
    stacks.push(1, 2).unwrap();
    stacks.push(0, 4).unwrap();
    stacks.push(0, 7).unwrap();
    stacks.push(0, 3).unwrap();
    stacks
}
