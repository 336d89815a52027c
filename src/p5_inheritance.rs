// Pattern 5: Inheritance by Composition
// A base type with shared fields and two behaviors, embedded in two
// derived types. Each derived type builds the base from its own
// constructor arguments and adds exactly one behavior; base behaviors are
// reached through Deref and nothing is overridden.

use std::ops::{Deref, DerefMut};

// ============================================================================
// Example: Base Type
// ============================================================================

#[derive(Debug)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    pub fn new(name: &str, age: u32) -> Self {
        Person {
            name: name.to_string(),
            age,
        }
    }

    // The two shared behaviors every wrapper inherits unchanged.
    pub fn introduce(&self) -> String {
        format!("Hi, I'm {} and I'm {} years old", self.name, self.age)
    }

    pub fn have_birthday(&mut self) {
        self.age += 1;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

// ============================================================================
// Example: Derived Types
// ============================================================================

#[derive(Debug)]
pub struct Student {
    person: Person,
    school: String,
}

impl Student {
    /// Passes the base's subset of fields through to the base constructor.
    pub fn new(name: &str, age: u32, school: &str) -> Self {
        Student {
            person: Person::new(name, age),
            school: school.to_string(),
        }
    }

    // The single behavior Student adds.
    pub fn study(&self, subject: &str) -> String {
        format!("{} studies {} at {}", self.person.name(), subject, self.school)
    }
}

impl Deref for Student {
    type Target = Person;

    fn deref(&self) -> &Person {
        &self.person
    }
}

impl DerefMut for Student {
    fn deref_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}

#[derive(Debug)]
pub struct Instructor {
    person: Person,
    subject: String,
}

impl Instructor {
    pub fn new(name: &str, age: u32, subject: &str) -> Self {
        Instructor {
            person: Person::new(name, age),
            subject: subject.to_string(),
        }
    }

    // The single behavior Instructor adds.
    pub fn teach(&self) -> String {
        format!("{} teaches {}", self.person.name(), self.subject)
    }
}

impl Deref for Instructor {
    type Target = Person;

    fn deref(&self) -> &Person {
        &self.person
    }
}

impl DerefMut for Instructor {
    fn deref_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}

// ============================================================================
// Demos
// ============================================================================

fn base_example() {
    let mut plain = Person::new("Sam", 40);
    println!("{}", plain.introduce());

    plain.have_birthday();
    println!("After a birthday: {}", plain.introduce());
}

fn student_example() {
    let mut student = Student::new("Nina", 20, "MIT");

    // Base behavior through Deref - no override, no duplication.
    println!("{}", student.introduce());
    println!("{}", student.study("compilers"));

    student.have_birthday();
    println!("After a birthday: {} (age {})", student.introduce(), student.age());
}

fn instructor_example() {
    let instructor = Instructor::new("Prof. Ada", 52, "algorithms");

    println!("{}", instructor.introduce());
    println!("{}", instructor.teach());
    println!("Name via base accessor: {}", instructor.name());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_behaviors_work_standalone() {
        let mut person = Person::new("Sam", 40);
        assert_eq!(person.introduce(), "Hi, I'm Sam and I'm 40 years old");
        person.have_birthday();
        assert_eq!(person.age(), 41);
    }

    #[test]
    fn student_inherits_base_behavior_unchanged() {
        let student = Student::new("Nina", 20, "MIT");
        assert_eq!(student.introduce(), "Hi, I'm Nina and I'm 20 years old");
        assert_eq!(student.name(), "Nina");
    }

    #[test]
    fn student_adds_exactly_one_behavior() {
        let student = Student::new("Nina", 20, "MIT");
        assert_eq!(student.study("compilers"), "Nina studies compilers at MIT");
    }

    #[test]
    fn mutation_reaches_the_embedded_base() {
        let mut student = Student::new("Nina", 20, "MIT");
        student.have_birthday();
        assert_eq!(student.age(), 21);
        assert_eq!(student.introduce(), "Hi, I'm Nina and I'm 21 years old");
    }

    #[test]
    fn instructor_adds_exactly_one_behavior() {
        let instructor = Instructor::new("Ada", 52, "algorithms");
        assert_eq!(instructor.teach(), "Ada teaches algorithms");
        assert_eq!(instructor.introduce(), "Hi, I'm Ada and I'm 52 years old");
    }
}

fn main() {
    println!("Pattern 5: Inheritance by Composition");
    println!("======================================\n");

    println!("=== Base Type on Its Own ===");
    base_example();
    println!();

    println!("=== Student Extends Person ===");
    student_example();
    println!();

    println!("=== Instructor Extends Person ===");
    instructor_example();
}
