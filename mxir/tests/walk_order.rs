use std::{collections::HashMap, convert::Infallible};

use mxir::{Block, Location, Operation, Region};

fn leaf(name: &str) -> Operation {
    Operation::new(name, Location::Unknown)
}

/// module { a { a1, a2 }, b }
fn sample_tree() -> Operation {
    let mut a = leaf("mx.a").with_region(Region::default());
    a.push_op(leaf("mx.a1"));
    a.push_op(leaf("mx.a2"));

    let mut module = Operation::module(Location::Unknown);
    module.push_op(a);
    module.push_op(leaf("mx.b"));
    module
}

#[test]
fn walk_is_preorder_left_to_right() {
    let module = sample_tree();
    let mut seen = Vec::new();
    module.walk(|op| seen.push(op.name.as_str().to_string()));
    assert_eq!(seen, ["core.module", "mx.a", "mx.a1", "mx.a2", "mx.b"]);
}

#[test]
fn walk_visits_each_operation_exactly_once() {
    let module = sample_tree();
    let mut visits = HashMap::new();
    module.walk(|op| *visits.entry(op.name.as_str().to_string()).or_insert(0u32) += 1);
    assert!(visits.values().all(|&count| count == 1), "{visits:?}");
    assert_eq!(visits.len(), 5);
}

#[test]
fn siblings_across_blocks_and_regions_keep_their_order() {
    let mut op = Operation::new("mx.cond", Location::Unknown)
        .with_region(Region {
            blocks: vec![
                Block {
                    operations: vec![leaf("mx.then1"), leaf("mx.then2")],
                },
                Block {
                    operations: vec![leaf("mx.then3")],
                },
            ],
        })
        .with_region(Region {
            blocks: vec![Block {
                operations: vec![leaf("mx.else1")],
            }],
        });

    let mut seen = Vec::new();
    op.try_walk_mut(|op| {
        seen.push(op.name.as_str().to_string());
        Ok::<(), Infallible>(())
    })
    .expect("infallible walk");
    assert_eq!(
        seen,
        ["mx.cond", "mx.then1", "mx.then2", "mx.then3", "mx.else1"]
    );
}

#[test]
fn try_walk_mut_aborts_on_first_error() {
    let mut module = sample_tree();
    let mut seen = Vec::new();
    let result = module.try_walk_mut(|op| {
        seen.push(op.name.as_str().to_string());
        if op.name.as_str() == "mx.a1" {
            Err("stop")
        } else {
            Ok(())
        }
    });
    assert_eq!(result, Err("stop"));
    assert_eq!(seen, ["core.module", "mx.a", "mx.a1"]);
}

#[test]
fn deep_nesting_does_not_exhaust_the_call_stack() {
    let mut module = Operation::module(Location::Unknown);
    // A 10_000-deep chain of single-child operations.
    let mut chain = leaf("mx.innermost");
    for _ in 0..10_000 {
        let mut parent = leaf("mx.wrap").with_region(Region::default());
        parent.regions[0].blocks.push(Block {
            operations: vec![chain],
        });
        chain = parent;
    }
    module.push_op(chain);

    let mut count = 0usize;
    module.walk(|_| count += 1);
    assert_eq!(count, 10_002);

    module
        .try_walk_mut(|_| Ok::<(), Infallible>(()))
        .expect("infallible walk");
}
