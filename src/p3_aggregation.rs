// Pattern 3: Aggregation
// A has-a relationship where the held object's lifetime is independent of
// the holder's. Shown twice: with shared ownership (Rc) and as a plain
// borrow.

use std::rc::Rc;

// ============================================================================
// Example: Independent and Dependent Types
// ============================================================================

#[derive(Debug)]
pub struct Department {
    name: String,
    building: String,
}

impl Department {
    pub fn new(name: &str, building: &str) -> Self {
        Department {
            name: name.to_string(),
            building: building.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn building(&self) -> &str {
        &self.building
    }
}

/// Requires a fully constructed department up front; holds a shared handle
/// and never manages the department's lifetime.
#[derive(Debug)]
pub struct Employee {
    name: String,
    department: Rc<Department>,
}

impl Employee {
    pub fn new(name: &str, department: Rc<Department>) -> Self {
        Employee {
            name: name.to_string(),
            department,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department_name(&self) -> &str {
        self.department.name()
    }

    pub fn describe(&self) -> String {
        format!(
            "{} works in {} ({} building)",
            self.name,
            self.department.name(),
            self.department.building()
        )
    }
}

// ============================================================================
// Example: Aggregation as a Borrow
// ============================================================================

// Same relationship without reference counting: the contractor borrows a
// department someone else owns.
pub struct Contractor<'a> {
    name: String,
    department: &'a Department,
}

impl<'a> Contractor<'a> {
    pub fn new(name: &str, department: &'a Department) -> Self {
        Contractor {
            name: name.to_string(),
            department,
        }
    }

    pub fn describe(&self) -> String {
        format!("{} is contracted to {}", self.name, self.department.name())
    }
}

// ============================================================================
// Demos
// ============================================================================

fn shared_ownership_example() {
    let engineering = Rc::new(Department::new("Engineering", "North"));
    println!("Department handles: {}", Rc::strong_count(&engineering));

    let maria = Employee::new("Maria", Rc::clone(&engineering));
    let dev = Employee::new("Dev", Rc::clone(&engineering));
    println!("After two hires:    {}", Rc::strong_count(&engineering));

    println!("{}", maria.describe());
    println!("{}", dev.describe());
    println!("{} and {} share a department: {}",
             maria.name(), dev.name(),
             maria.department_name() == dev.department_name());
}

fn independent_lifetime_example() {
    let engineering = Rc::new(Department::new("Engineering", "North"));

    let temp = Employee::new("Temp", Rc::clone(&engineering));
    println!("While employed:   {} handles", Rc::strong_count(&engineering));

    drop(temp);

    // The department outlives the employee that referenced it.
    println!("After departure:  {} handles", Rc::strong_count(&engineering));
    println!("Department still here: {} ({})",
             engineering.name(), engineering.building());
}

fn borrow_example() {
    let design = Department::new("Design", "South");

    {
        let casey = Contractor::new("Casey", &design);
        println!("{}", casey.describe());
    }

    // The contractor is gone; the owned department continues unaffected.
    println!("Owner keeps using: {} ({})", design.name(), design.building());
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 3: Aggregation");
    println!("=======================\n");

    println!("=== Shared, Unowned Department ===");
    shared_ownership_example();
    println!();

    println!("=== Independent Lifetimes ===");
    independent_lifetime_example();
    println!();

    println!("=== Aggregation as a Borrow ===");
    borrow_example();
}
