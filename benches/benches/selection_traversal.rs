// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use trellis_selection::{
    Collection, Item, ItemFlags, ListKeyboardDelegate, Orientation, SelectionManager,
    SelectionMode, SelectionOptions, TextDirection,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn gen_collection(n: usize, disabled_one_in: u64) -> Collection<usize> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..n)
        .map(|i| {
            let mut item = Item::new(i).with_text_value(format!("Option {}", i));
            if disabled_one_in != 0 && rng.next_u64() % disabled_one_in == 0 {
                item = item.with_flags(ItemFlags::DISABLED);
            }
            item
        })
        .collect()
}

fn bench_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyboard_cycle");
    let delegate = ListKeyboardDelegate::new(Orientation::Vertical, TextDirection::Ltr);
    for &n in &[64usize, 512, 4096] {
        let collection = gen_collection(n, 4);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("next_key_full_cycle_n{}", n), |b| {
            b.iter(|| {
                let mut key = delegate.first_key(&collection).expect("enabled item");
                for _ in 0..collection.len() {
                    key = delegate.next_key(&collection, &key).expect("enabled item");
                }
                black_box(key);
            })
        });
    }
    group.finish();
}

fn bench_typeahead(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyboard_typeahead");
    let delegate = ListKeyboardDelegate::new(Orientation::Vertical, TextDirection::Ltr);
    let collection = gen_collection(4096, 0);
    group.bench_function("search_deep_prefix", |b| {
        b.iter(|| {
            // Matches only near the end of the collection.
            let key = delegate.key_for_search(&collection, "Option 40", None);
            black_box(key);
        })
    });
    group.bench_function("search_wrapping", |b| {
        b.iter(|| {
            let key = delegate.key_for_search(&collection, "Option 1", Some(&4000));
            black_box(key);
        })
    });
    group.finish();
}

fn bench_manager(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection_manager");
    let collection = gen_collection(1024, 8);
    group.bench_function("toggle_sweep_multiple", |b| {
        b.iter_batched(
            || {
                SelectionManager::new(SelectionOptions {
                    mode: SelectionMode::Multiple,
                    ..Default::default()
                })
            },
            |mut manager| {
                for i in 0..collection.len() {
                    manager.toggle_selection(&collection, &i);
                }
                black_box(manager.epoch());
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("replace_churn_single", |b| {
        b.iter_batched(
            || {
                SelectionManager::new(SelectionOptions {
                    mode: SelectionMode::Single,
                    ..Default::default()
                })
            },
            |mut manager| {
                for i in 0..collection.len() {
                    manager.replace_selection(&collection, &i);
                }
                black_box(manager.first_selected_key(&collection));
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_cycle, bench_typeahead, bench_manager);
criterion_main!(benches);
