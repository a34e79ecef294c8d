use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::hint::black_box;

const NUM_OF_OPERATIONS: usize = 1000;

fn bench_btreemap_insert(c: &mut Criterion) {
    c.bench_function("bench btreemap insert", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            let mut map = BTreeMap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.gen::<u32>();
                let val = rng.gen::<u32>();

                map.insert(key, val);
            }
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut map = BTreeMap::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen::<u32>();
        let val = rng.gen::<u32>();

        map.insert(key, val);
        values.push(key);
    }

    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(map.get(key));
            }
        })
    });
}

macro_rules! bst_map_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use bst_collections::$module_name::$type_name;
                use criterion::Criterion;
                use rand::rngs::StdRng;
                use rand::{Rng, SeedableRng};
                use std::hint::black_box;
                use super::NUM_OF_OPERATIONS;

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng = StdRng::seed_from_u64(1);
                        let mut map = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            let key = rng.gen::<u32>();
                            let val = rng.gen::<u32>();

                            map.insert(key, val);
                        }
                    }));
                }

                pub fn bench_insert_ascending(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert ascending", stringify!($module_name)), |b| b.iter(|| {
                        let mut map = $type_name::new();
                        for key in 0..NUM_OF_OPERATIONS as u32 {
                            map.insert(key, key);
                        }
                    }));
                }

                pub fn bench_get(c: &mut Criterion) {
                    let mut rng = StdRng::seed_from_u64(1);
                    let mut map = $type_name::new();
                    let mut values = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen::<u32>();
                        let val = rng.gen::<u32>();

                        map.insert(key, val);
                        values.push(key);
                    }

                    c.bench_function(&format!("bench {} get", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &values {
                            black_box(map.get(key));
                        }
                    }));
                }

                pub fn bench_kth_smallest(c: &mut Criterion) {
                    let mut map = $type_name::new();
                    for key in 0..NUM_OF_OPERATIONS as u32 {
                        map.insert(key, key);
                    }

                    c.bench_function(&format!("bench {} kth smallest", stringify!($module_name)), move |b| b.iter(|| {
                        black_box(map.kth_smallest(NUM_OF_OPERATIONS / 2).ok());
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreemap_get,
            bench_btreemap_insert,
            $(
                $module_name::bench_get,
                $module_name::bench_insert,
                $module_name::bench_insert_ascending,
                $module_name::bench_kth_smallest,
            )*
        );
    }
}

bst_map_benches!(
    avl_tree: AvlMap,
    binary_search_tree: BstMap,
);

criterion_main!(benches);
