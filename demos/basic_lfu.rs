use capcache::engine::CacheEngine;
use capcache::policy::Policy;

fn main() {
    let mut cache: CacheEngine<&str, u32> = CacheEngine::new(2, Policy::Lfu).unwrap();

    cache.put("hot", 1);
    cache.put("cold", 2);

    // "hot" earns two more uses; "cold" stays at its initial count
    cache.get(&"hot");
    cache.get(&"hot");

    cache.put("new", 3);

    println!("contains hot?  {}", cache.contains(&"hot"));
    println!("contains cold? {}", cache.contains(&"cold"));
    println!("contains new?  {}", cache.contains(&"new"));
}

// Expected output:
// contains hot?  true
// contains cold? false
// contains new?  true
//
// Explanation: "cold" has the lowest use count when "new" overflows the
// cache, so it is the one discarded.
