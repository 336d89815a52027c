// Pattern 1: Static Members and Shared State
// Demonstrates type-level counters and constants, validated construction,
// a counter reset, a factory for a known-good default, and a stateless
// utility type whose members all live on the type itself.

use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

// ============================================================================
// Example: Type-Level Counters with Validated Construction
// ============================================================================

const MIN_AGE: u32 = 18;
const MAX_AGE: u32 = 120;
const STARTING_ID: u64 = 1;

// Statics must be Sync, so the counters are atomics even though the demo
// is single-threaded.
static TOTAL_USERS: AtomicU64 = AtomicU64::new(0);
static NEXT_ID: AtomicU64 = AtomicU64::new(STARTING_ID);

#[derive(Error, Debug, PartialEq)]
pub enum UserError {
    #[error("age {age} is out of range (must be between {min} and {max} inclusive)")]
    AgeOutOfRange { age: u32, min: u32, max: u32 },
}

#[derive(Debug)]
pub struct User {
    id: u64,
    name: String,
    age: u32,
}

impl User {
    /// Validates before touching any shared state; a rejected construction
    /// leaves both counters exactly as they were.
    pub fn new(name: &str, age: u32) -> Result<Self, UserError> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(UserError::AgeOutOfRange {
                age,
                min: MIN_AGE,
                max: MAX_AGE,
            });
        }

        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        TOTAL_USERS.fetch_add(1, Ordering::Relaxed);

        Ok(User {
            id,
            name: name.to_string(),
            age,
        })
    }

    /// Factory for a valid default instance; callers never see the
    /// validation that backs it.
    pub fn guest() -> Self {
        Self::new("Guest", MIN_AGE).expect("guest defaults are within the valid age range")
    }

    // Class-level reads and the reset, no instance required.
    pub fn total_users() -> u64 {
        TOTAL_USERS.load(Ordering::Relaxed)
    }

    pub fn next_id_preview() -> u64 {
        NEXT_ID.load(Ordering::Relaxed)
    }

    pub fn reset_counters() {
        TOTAL_USERS.store(0, Ordering::Relaxed);
        NEXT_ID.store(STARTING_ID, Ordering::Relaxed);
    }

    /// Side-effect-free comparison over two instances' fields.
    pub fn cmp_by_age(a: &User, b: &User) -> std::cmp::Ordering {
        a.age.cmp(&b.age)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

// ============================================================================
// Example: Stateless Utility Type
// ============================================================================

// No instances, no state: every member hangs off the type itself.
pub struct MathUtils;

impl MathUtils {
    pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

    pub fn square(x: f64) -> f64 {
        x * x
    }

    pub fn is_even(n: i64) -> bool {
        n % 2 == 0
    }

    pub fn average(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }
}

// ============================================================================
// Demos
// ============================================================================

fn construction_example() {
    User::reset_counters();

    let alice = User::new("Alice", 30).expect("30 is in range");
    let bob = User::new("Bob", 25).expect("25 is in range");

    println!("Created {} (id {})", alice.name(), alice.id());
    println!("Created {} (id {})", bob.name(), bob.id());
    println!("Total users: {}", User::total_users());
    println!("Next id would be: {}", User::next_id_preview());

    // The risky call: recover by printing and moving on.
    match User::new("Eve", 15) {
        Ok(user) => println!("Created {} (id {})", user.name(), user.id()),
        Err(e) => println!("Rejected: {}", e),
    }

    // A failed construction has no side effects.
    println!("Total users after rejection: {}", User::total_users());
}

fn reset_example() {
    println!("Before reset: total = {}, next id = {}",
             User::total_users(), User::next_id_preview());

    User::reset_counters();
    println!("After reset:  total = {}, next id = {}",
             User::total_users(), User::next_id_preview());

    let first = User::new("First", 40).expect("40 is in range");
    println!("First user after reset gets id {}", first.id());
}

fn factory_example() {
    let guest = User::guest();
    println!("Factory guest: {} (age {}, id {})",
             guest.name(), guest.age(), guest.id());
}

fn comparison_example() {
    let older = User::new("Olga", 64).expect("64 is in range");
    let younger = User::new("Yuri", 22).expect("22 is in range");

    match User::cmp_by_age(&older, &younger) {
        std::cmp::Ordering::Less => println!("{} is younger than {}", older.name(), younger.name()),
        std::cmp::Ordering::Equal => println!("{} and {} are the same age", older.name(), younger.name()),
        std::cmp::Ordering::Greater => println!("{} is older than {}", older.name(), younger.name()),
    }
}

fn math_utils_example() {
    println!("MathUtils::square(7.0) = {}", MathUtils::square(7.0));
    println!("MathUtils::is_even(42) = {}", MathUtils::is_even(42));
    println!("MathUtils::average(&[1.0, 2.0, 3.0]) = {:?}",
             MathUtils::average(&[1.0, 2.0, 3.0]));
    println!("MathUtils::average(&[]) = {:?}", MathUtils::average(&[]));
    println!("MathUtils::GOLDEN_RATIO = {}", MathUtils::GOLDEN_RATIO);
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 1: Static Members and Shared State");
    println!("===========================================\n");

    println!("=== Counted Construction ===");
    construction_example();
    println!();

    println!("=== Counter Reset ===");
    reset_example();
    println!();

    println!("=== Factory Default ===");
    factory_example();
    println!();

    println!("=== Field Comparison ===");
    comparison_example();
    println!();

    println!("=== Stateless Utility ===");
    math_utils_example();
}
