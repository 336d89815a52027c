// Object-Oriented Programming Patterns
// This crate demonstrates the classic OOP concepts unit as idiomatic Rust.

pub mod examples {
    //! # Object-Oriented Programming Patterns
    //!
    //! This crate provides runnable examples for:
    //!
    //! ## Pattern 1: Static Members and Shared State
    //! - Type-level counters (total instances, next id)
    //! - Validated construction that leaves counters untouched on failure
    //! - Counter reset and a factory for a known-good default
    //! - A stateless utility type with only associated items
    //!
    //! ## Pattern 2: Encapsulation with Getters and Setters
    //! - Accessors that normalize (trim) on every write
    //! - Validated setters that keep the prior value on rejection
    //! - Computed read-only properties, never cached
    //!
    //! ## Pattern 3: Aggregation
    //! - A has-a relationship without ownership (`Rc` sharing)
    //! - The same relationship expressed as a plain borrow
    //!
    //! ## Pattern 4: Singletons
    //! - Key-value config store (`OnceLock`)
    //! - Leveled logger with export and clear (`lazy_static`)
    //! - Hit counter with reset (function-local `OnceLock`)
    //! - Dependency injection as the explicit alternative
    //!
    //! ## Pattern 5: Inheritance by Composition
    //! - A base type embedded in derived types
    //! - Base behavior reached through `Deref`, extension without overriding
    //!
    //! ## Pattern 6: Cohesion
    //! - Single-responsibility types (calculator, email validator, account)
    //! - A deliberately incohesive grab-bag and its refactored split
    //!
    //! ## Pattern 7: Polymorphism
    //! - An abstract operation with a shared default behavior
    //! - Heterogeneous collections dispatched through a trait
    //! - The same hierarchy as an enum for closed sets
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin p1_static_members
    //! cargo run --bin p2_getters_setters
    //! cargo run --bin p3_aggregation
    //! cargo run --bin p4_singletons
    //! cargo run --bin p5_inheritance
    //! cargo run --bin p6_cohesion
    //! cargo run --bin p7_polymorphism
    //! ```
}
