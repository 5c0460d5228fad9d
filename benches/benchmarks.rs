use std::{collections::HashMap, hint::black_box, time::{Duration, Instant}};

use ascii_table::AsciiTable;
use ordered_map::OrderedMap;

#[path = "../tests/test_utils.rs"]
mod test_utils;

const NUM_ENTRIES: usize = 100_000;
const NUM_REMOVES: usize = 2_000; // Removal is O(n) for OrderedMap, so keep this smaller

/// The operations that each subject is timed on. Each one gets a column in the results table.
trait Subject {
    fn name(&self) -> &str;
    fn insert(&mut self, keys: &[String]);
    fn lookup(&self, keys: &[String]) -> usize;
    fn iterate(&self) -> usize;
    fn remove(&mut self, keys: &[String]);
}

struct OrderedMapSubject(OrderedMap<String, usize>);
impl Subject for OrderedMapSubject {
    fn name(&self) -> &str { "OrderedMap" }
    fn insert(&mut self, keys: &[String]) {
        for (i, k) in keys.iter().enumerate() {
            self.0.insert(k.clone(), i);
        }
    }
    fn lookup(&self, keys: &[String]) -> usize {
        keys.iter().filter_map(|k| self.0.get(k)).sum()
    }
    fn iterate(&self) -> usize {
        self.0.iter().map(|(_, v)| *v).sum()
    }
    fn remove(&mut self, keys: &[String]) {
        for k in keys {
            self.0.remove(k);
        }
    }
}

struct HashMapSubject(HashMap<String, usize>);
impl Subject for HashMapSubject {
    fn name(&self) -> &str { "HashMap (unordered)" }
    fn insert(&mut self, keys: &[String]) {
        for (i, k) in keys.iter().enumerate() {
            self.0.insert(k.clone(), i);
        }
    }
    fn lookup(&self, keys: &[String]) -> usize {
        keys.iter().filter_map(|k| self.0.get(k)).sum()
    }
    fn iterate(&self) -> usize {
        self.0.values().sum()
    }
    fn remove(&mut self, keys: &[String]) {
        for k in keys {
            self.0.remove(k);
        }
    }
}

fn main() {
    test_utils::init_logging();

    let keys: Vec<String> = (0..NUM_ENTRIES).map(|i| format!("key-{}", i.wrapping_mul(2654435761) % 1_000_000_007)).collect();
    // Remove from the middle, which is the worst case for shuffling the order list
    let to_remove = &keys[NUM_ENTRIES / 2 - NUM_REMOVES / 2..NUM_ENTRIES / 2 + NUM_REMOVES / 2];

    let mut subjects: Vec<Box<dyn Subject>> = vec![
        Box::new(OrderedMapSubject(OrderedMap::new())),
        Box::new(HashMapSubject(HashMap::new())),
    ];

    let mut results = vec![];
    for s in subjects.iter_mut() {
        results.push(run_benchmarks(s.as_mut(), &keys, to_remove));
    }

    let mut ascii_table = AsciiTable::default();
    ascii_table.column(0).set_header("Subject");
    ascii_table.column(1).set_header(&format!("Insert {NUM_ENTRIES}"));
    ascii_table.column(2).set_header(&format!("Lookup {NUM_ENTRIES}"));
    ascii_table.column(3).set_header("Iterate all");
    ascii_table.column(4).set_header(&format!("Remove {NUM_REMOVES}"));

    println!();
    ascii_table.print(results);
}

fn run_benchmarks(subject: &mut dyn Subject, keys: &[String], to_remove: &[String]) -> Vec<String> {
    let id = subject.name().to_string();
    println!("  Subject: {id}");

    let time = |f: &mut dyn FnMut()| -> Duration {
        let start = Instant::now();
        f();
        start.elapsed()
    };

    let mut results = vec![id.clone()];

    let elapsed = time(&mut || subject.insert(keys));
    println!("    {id} insert: {:?}", elapsed);
    results.push(format!("{:?}", elapsed));

    let elapsed = time(&mut || { black_box(subject.lookup(keys)); });
    println!("    {id} lookup: {:?}", elapsed);
    results.push(format!("{:?}", elapsed));

    let elapsed = time(&mut || { black_box(subject.iterate()); });
    println!("    {id} iterate: {:?}", elapsed);
    results.push(format!("{:?}", elapsed));

    let elapsed = time(&mut || subject.remove(to_remove));
    println!("    {id} remove: {:?}", elapsed);
    results.push(format!("{:?}", elapsed));

    results
}
