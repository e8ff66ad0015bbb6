use criterion::{criterion_group, criterion_main, Criterion};
use sequence_lists::{ArrayList, LinkedList, SequenceList};

fn fill_and_drain<L: SequenceList<String>>(list: &mut L) {
    for i in 0..100 {
        list.add_item_at(0, i.to_string()).unwrap();
    }
    for _i in 0..100 {
        list.delete_element(0).unwrap();
    }
}

fn array_list_bench(c: &mut Criterion) {
    c.bench_function("ArrayList Bench", |b| {
        b.iter(|| fill_and_drain(&mut ArrayList::<String>::new()))
    });
}

fn linked_list_bench(c: &mut Criterion) {
    c.bench_function("LinkedList Bench", |b| {
        b.iter(|| fill_and_drain(&mut LinkedList::<String>::new()))
    });
}

fn sort_bench(c: &mut Criterion) {
    let input: Vec<u32> = (0..200).rev().collect();
    c.bench_function("ArrayList bubble sort", |b| {
        b.iter(|| {
            let mut list: ArrayList<_> = input.iter().copied().collect();
            list.sort().unwrap();
        })
    });
    c.bench_function("LinkedList insertion sort", |b| {
        b.iter(|| {
            let mut list: LinkedList<_> = input.iter().copied().collect();
            list.sort().unwrap();
        })
    });
}

criterion_group!(benches, array_list_bench, linked_list_bench, sort_bench);
criterion_main!(benches);
