// Pattern 2: Encapsulation with Getters and Setters
// Demonstrates accessors that normalize on every write, validated setters
// that keep the prior value on rejection, and computed read-only
// properties that are recomputed on each read.

use thiserror::Error;

const ADULT_AGE: u32 = 18;

#[derive(Error, Debug, PartialEq)]
pub enum PersonError {
    #[error("name must not be empty or all whitespace")]
    EmptyName,
    #[error("age must be a non-negative integer, got {age}")]
    NegativeAge { age: i32 },
}

#[derive(Debug)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    /// Construction routes through the same setters as later assignment,
    /// so trimming and validation happen in exactly one place.
    pub fn new(name: &str, age: i32) -> Result<Self, PersonError> {
        let mut person = Person {
            name: String::new(),
            age: 0,
        };
        person.set_name(name)?;
        person.set_age(age)?;
        Ok(person)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trims surrounding whitespace on assignment; an all-whitespace name
    /// is rejected and the old name stays.
    pub fn set_name(&mut self, name: &str) -> Result<(), PersonError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PersonError::EmptyName);
        }
        self.name = trimmed.to_string();
        Ok(())
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Rejects negative values; a rejected write leaves the prior valid
    /// age readable. Non-integers never get this far: the parameter type
    /// rules them out at compile time.
    pub fn set_age(&mut self, age: i32) -> Result<(), PersonError> {
        if age < 0 {
            return Err(PersonError::NegativeAge { age });
        }
        self.age = age as u32;
        Ok(())
    }

    // Computed on each read, never cached.
    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    pub fn description(&self) -> String {
        let status = if self.is_adult() { "adult" } else { "minor" };
        format!("{} ({}, {})", self.name, self.age, status)
    }
}

// ============================================================================
// Demos
// ============================================================================

fn normalization_example() {
    let mut person = Person::new("   Ada Lovelace  ", 36).expect("valid inputs");
    println!("Trimmed on construction: '{}'", person.name());

    person.set_name("  Grace Hopper ").expect("valid name");
    println!("Trimmed on assignment:   '{}'", person.name());
}

fn validation_example() {
    let mut person = Person::new("Linus", 21).expect("valid inputs");
    println!("Initial: {}", person.description());

    // The risky write: print the error and continue.
    match person.set_age(-5) {
        Ok(()) => println!("Age updated to {}", person.age()),
        Err(e) => println!("Rejected: {}", e),
    }
    println!("Age after rejected write: {}", person.age());

    // person.set_age(30.5); // Error: expected `i32`, found floating-point number

    match person.set_name("    ") {
        Ok(()) => println!("Name updated to '{}'", person.name()),
        Err(e) => println!("Rejected: {}", e),
    }
    println!("Name after rejected write: '{}'", person.name());
}

fn computed_properties_example() {
    let mut person = Person::new("Kim", 17).expect("valid inputs");
    println!("{} -> is_adult: {}", person.description(), person.is_adult());

    person.set_age(18).expect("valid age");
    println!("{} -> is_adult: {}", person.description(), person.is_adult());

    // The description always reflects the latest writes.
    person.set_name("Kim Stanley").expect("valid name");
    println!("After rename: {}", person.description());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_on_construction() {
        let person = Person::new("  Ada  ", 30).unwrap();
        assert_eq!(person.name(), "Ada");
    }

    #[test]
    fn trims_on_assignment() {
        let mut person = Person::new("Ada", 30).unwrap();
        person.set_name("\tGrace \n").unwrap();
        assert_eq!(person.name(), "Grace");
    }

    #[test]
    fn empty_name_rejected_and_prior_name_kept() {
        let mut person = Person::new("Ada", 30).unwrap();
        assert_eq!(person.set_name("   "), Err(PersonError::EmptyName));
        assert_eq!(person.name(), "Ada");
    }

    #[test]
    fn all_whitespace_name_rejected_at_construction() {
        assert_eq!(Person::new(" \t ", 30).unwrap_err(), PersonError::EmptyName);
    }

    #[test]
    fn negative_age_rejected_and_prior_age_kept() {
        let mut person = Person::new("Ada", 30).unwrap();
        let err = person.set_age(-1).unwrap_err();
        assert_eq!(err, PersonError::NegativeAge { age: -1 });
        assert_eq!(person.age(), 30);
    }

    #[test]
    fn negative_age_rejected_at_construction() {
        assert_eq!(
            Person::new("Ada", -3).unwrap_err(),
            PersonError::NegativeAge { age: -3 }
        );
    }

    #[test]
    fn computed_properties_track_latest_write() {
        let mut person = Person::new("Kim", 17).unwrap();
        assert!(!person.is_adult());
        assert_eq!(person.description(), "Kim (17, minor)");

        person.set_age(18).unwrap();
        assert!(person.is_adult());
        assert_eq!(person.description(), "Kim (18, adult)");

        person.set_age(17).unwrap();
        assert!(!person.is_adult());
    }

    #[test]
    fn rejected_write_leaves_description_consistent() {
        let mut person = Person::new("Kim", 20).unwrap();
        let before = person.description();
        assert!(person.set_age(-10).is_err());
        assert_eq!(person.description(), before);
    }
}

fn main() {
    println!("Pattern 2: Encapsulation with Getters and Setters");
    println!("==================================================\n");

    println!("=== Normalizing Accessors ===");
    normalization_example();
    println!();

    println!("=== Validated Writes ===");
    validation_example();
    println!();

    println!("=== Computed Properties ===");
    computed_properties_example();
}
