// Pattern 7: Polymorphism
// One trait, four implementing types, one collection of trait objects.
// The caller iterates the collection and never asks which concrete type
// it is holding. A closed-world enum version of the same dispatch sits
// at the end for contrast.

// ============================================================================
// Example: The Shared Interface
// ============================================================================

pub trait Animal {
    fn name(&self) -> &str;

    /// Each type answers with its own voice.
    fn speak(&self) -> String;

    // Default shared by every animal that does not override it.
    fn sleep(&self) -> String {
        format!("{} is sleeping... Zzz", self.name())
    }
}

// ============================================================================
// Example: Four Implementations
// ============================================================================

pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: &str) -> Self {
        Dog {
            name: name.to_string(),
        }
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        format!("{} says Woof!", self.name)
    }
}

pub struct Cat {
    name: String,
}

impl Cat {
    pub fn new(name: &str) -> Self {
        Cat {
            name: name.to_string(),
        }
    }
}

impl Animal for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        format!("{} says Meow!", self.name)
    }
}

pub struct Cow {
    name: String,
}

impl Cow {
    pub fn new(name: &str) -> Self {
        Cow {
            name: name.to_string(),
        }
    }
}

impl Animal for Cow {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        format!("{} says Moo!", self.name)
    }
}

pub struct Duck {
    name: String,
}

impl Duck {
    pub fn new(name: &str) -> Self {
        Duck {
            name: name.to_string(),
        }
    }
}

impl Animal for Duck {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        format!("{} says Quack!", self.name)
    }
}

// ============================================================================
// Example: One Call Site for Every Type
// ============================================================================

/// Collects each animal's voice in collection order. The body compiles
/// once and dispatches through the vtable at runtime.
pub fn speak_all(animals: &[Box<dyn Animal>]) -> Vec<String> {
    animals.iter().map(|animal| animal.speak()).collect()
}

// ============================================================================
// Example: Closed-World Enum Dispatch
// ============================================================================

// When the set of types is fixed, an enum does the same job with a match
// instead of a vtable, and without a heap allocation per animal.
pub enum Barnyard {
    Dog(Dog),
    Cat(Cat),
    Cow(Cow),
    Duck(Duck),
}

impl Barnyard {
    pub fn name(&self) -> &str {
        match self {
            Barnyard::Dog(dog) => dog.name(),
            Barnyard::Cat(cat) => cat.name(),
            Barnyard::Cow(cow) => cow.name(),
            Barnyard::Duck(duck) => duck.name(),
        }
    }

    pub fn speak(&self) -> String {
        match self {
            Barnyard::Dog(dog) => dog.speak(),
            Barnyard::Cat(cat) => cat.speak(),
            Barnyard::Cow(cow) => cow.speak(),
            Barnyard::Duck(duck) => duck.speak(),
        }
    }
}

// ============================================================================
// Demos
// ============================================================================

fn herd() -> Vec<Box<dyn Animal>> {
    vec![
        Box::new(Dog::new("Rex")),
        Box::new(Cat::new("Whiskers")),
        Box::new(Cow::new("Bella")),
        Box::new(Duck::new("Donald")),
    ]
}

fn trait_object_example() {
    let animals = herd();

    for line in speak_all(&animals) {
        println!("{}", line);
    }
}

fn shared_default_example() {
    let animals = herd();

    for animal in &animals {
        println!("{}", animal.sleep());
    }
}

fn enum_dispatch_example() {
    let barnyard = [
        Barnyard::Dog(Dog::new("Rex")),
        Barnyard::Cat(Cat::new("Whiskers")),
        Barnyard::Cow(Cow::new("Bella")),
        Barnyard::Duck(Duck::new("Donald")),
    ];

    for animal in &barnyard {
        println!("[{}] {}", animal.name(), animal.speak());
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 7: Polymorphism");
    println!("========================\n");

    println!("=== One Loop, Four Voices ===");
    trait_object_example();
    println!();

    println!("=== Shared Default Behavior ===");
    shared_default_example();
    println!();

    println!("=== Enum Dispatch Over a Closed Set ===");
    enum_dispatch_example();
}
