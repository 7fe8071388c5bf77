use capcache::builder::CacheBuilder;
use capcache::policy::Policy;

fn main() {
    let mut cache = CacheBuilder::new(3)
        .policy(Policy::Fifo)
        .try_build::<u32, String>()
        .unwrap();

    // hosts typically log or meter evictions; printing stands in here
    cache.on_discard(|key| println!("DISCARD: {key}"));

    for i in 1..=6 {
        cache.put(i, format!("value-{i}"));
    }

    println!("resident: {} of capacity {}", cache.len(), cache.capacity());
}

// Expected output:
// DISCARD: 1
// DISCARD: 2
// DISCARD: 3
// resident: 3 of capacity 3
