// Pattern 6: Cohesion
// Three focused types that each own one job, then a deliberate grab-bag
// type that mixes five unrelated jobs, then the same five jobs split into
// focused homes. The grab-bag and the split run side by side so the
// outputs can be compared.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
}

// ============================================================================
// Example: Calculator - One Job, Arithmetic
// ============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
}

pub struct Calculator;

impl Calculator {
    pub fn add(a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(a: f64, b: f64) -> f64 {
        a * b
    }

    pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }
}

// ============================================================================
// Example: EmailValidator - One Job, Email Syntax
// ============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum EmailError {
    #[error("invalid email address: {address:?}")]
    Invalid { address: String },
}

pub struct EmailValidator;

impl EmailValidator {
    pub fn is_valid(address: &str) -> bool {
        EMAIL_RE.is_match(address)
    }

    /// Same check as `is_valid`, but the failure carries the offending
    /// address in its message.
    pub fn validate(address: &str) -> Result<(), EmailError> {
        if !EMAIL_RE.is_match(address) {
            return Err(EmailError::Invalid {
                address: address.to_string(),
            });
        }
        Ok(())
    }

    /// Trims surrounding whitespace and lowercases, so equivalent
    /// addresses compare equal before validation.
    pub fn normalize(address: &str) -> String {
        address.trim().to_lowercase()
    }
}

// ============================================================================
// Example: BankAccount - One Job, Balance Management
// ============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum AccountError {
    #[error("amount must be positive, got {amount}")]
    NonPositiveAmount { amount: i64 },

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: i64, available: i64 },
}

/// Balances are integer cents, so arithmetic stays exact.
#[derive(Debug)]
pub struct BankAccount {
    owner: String,
    balance: i64,
}

impl BankAccount {
    pub fn new(owner: &str) -> Self {
        BankAccount {
            owner: owner.to_string(),
            balance: 0,
        }
    }

    pub fn with_balance(owner: &str, balance: i64) -> Self {
        BankAccount {
            owner: owner.to_string(),
            balance,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn deposit(&mut self, amount: i64) -> Result<(), AccountError> {
        if amount <= 0 {
            return Err(AccountError::NonPositiveAmount { amount });
        }
        self.balance += amount;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: i64) -> Result<(), AccountError> {
        if amount <= 0 {
            return Err(AccountError::NonPositiveAmount { amount });
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    /// All checks run before either balance moves, so a failed transfer
    /// leaves both accounts exactly as they were.
    pub fn transfer(&mut self, to: &mut BankAccount, amount: i64) -> Result<(), AccountError> {
        if amount <= 0 {
            return Err(AccountError::NonPositiveAmount { amount });
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        to.balance += amount;
        Ok(())
    }
}

// ============================================================================
// Example: MiscUtils - Five Jobs, No Cohesion
// ============================================================================

// Geometry, text, dates, email, files: nothing here belongs with anything
// else. Changing date formatting forces a rebuild of geometry callers.
pub struct MiscUtils;

impl MiscUtils {
    pub fn circle_area(radius: f64) -> f64 {
        std::f64::consts::PI * radius * radius
    }

    pub fn to_title_case(text: &str) -> String {
        text.split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn format_date(year: u32, month: u32, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", year, month, day)
    }

    pub fn is_valid_email(address: &str) -> bool {
        EMAIL_RE.is_match(address)
    }

    pub fn describe_file(name: &str, size_bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = 1024 * 1024;
        if size_bytes < KB {
            format!("{} ({} B)", name, size_bytes)
        } else if size_bytes < MB {
            format!("{} ({:.1} KB)", name, size_bytes as f64 / KB as f64)
        } else {
            format!("{} ({:.1} MB)", name, size_bytes as f64 / MB as f64)
        }
    }
}

// ============================================================================
// Example: The Same Five Jobs, Split Into Focused Homes
// ============================================================================

pub struct GeometryUtils;

impl GeometryUtils {
    pub fn circle_area(radius: f64) -> f64 {
        std::f64::consts::PI * radius * radius
    }
}

pub struct TextUtils;

impl TextUtils {
    pub fn to_title_case(text: &str) -> String {
        text.split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct DateUtils;

impl DateUtils {
    pub fn format_date(year: u32, month: u32, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", year, month, day)
    }
}

pub struct FileUtils;

impl FileUtils {
    pub fn describe_file(name: &str, size_bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = 1024 * 1024;
        if size_bytes < KB {
            format!("{} ({} B)", name, size_bytes)
        } else if size_bytes < MB {
            format!("{} ({:.1} KB)", name, size_bytes as f64 / KB as f64)
        } else {
            format!("{} ({:.1} MB)", name, size_bytes as f64 / MB as f64)
        }
    }
}

// ============================================================================
// Demos
// ============================================================================

fn calculator_example() {
    println!("3 + 4 = {}", Calculator::add(3.0, 4.0));
    println!("10 - 6 = {}", Calculator::subtract(10.0, 6.0));
    println!("2.5 * 4 = {}", Calculator::multiply(2.5, 4.0));

    match Calculator::divide(10.0, 4.0) {
        Ok(result) => println!("10 / 4 = {}", result),
        Err(e) => println!("10 / 4 failed: {}", e),
    }
    match Calculator::divide(1.0, 0.0) {
        Ok(result) => println!("1 / 0 = {}", result),
        Err(e) => println!("1 / 0 failed: {}", e),
    }
}

fn email_example() {
    let candidates = ["user@example.com", "not-an-email", "  USER@Example.COM "];
    for candidate in candidates {
        let normalized = EmailValidator::normalize(candidate);
        println!(
            "{:?} -> {:?} valid: {}",
            candidate,
            normalized,
            EmailValidator::is_valid(&normalized)
        );
    }

    // The risky call: print the error and continue.
    match EmailValidator::validate("broken@") {
        Ok(()) => println!("accepted"),
        Err(e) => println!("Rejected: {}", e),
    }
}

fn account_example() {
    let mut alice = BankAccount::with_balance("Alice", 10_000);
    let mut bob = BankAccount::new("Bob");

    bob.deposit(2_500).unwrap();
    println!(
        "{}: {} cents, {}: {} cents",
        alice.owner(),
        alice.balance(),
        bob.owner(),
        bob.balance()
    );

    match alice.withdraw(50_000) {
        Ok(()) => println!("Withdrew 50000"),
        Err(e) => println!("Withdrawal refused: {}", e),
    }

    match alice.transfer(&mut bob, 4_000) {
        Ok(()) => println!(
            "After transfer - {}: {} cents, {}: {} cents",
            alice.owner(),
            alice.balance(),
            bob.owner(),
            bob.balance()
        ),
        Err(e) => println!("Transfer refused: {}", e),
    }
}

fn cohesion_contrast_example() {
    // Grab-bag and focused versions answer identically; only the homes
    // of the functions changed.
    println!(
        "circle_area(2.0): misc {:.3} | focused {:.3}",
        MiscUtils::circle_area(2.0),
        GeometryUtils::circle_area(2.0)
    );
    println!(
        "title case:       misc {:?} | focused {:?}",
        MiscUtils::to_title_case("hello rust world"),
        TextUtils::to_title_case("hello rust world")
    );
    println!(
        "format_date:      misc {} | focused {}",
        MiscUtils::format_date(2024, 3, 7),
        DateUtils::format_date(2024, 3, 7)
    );
    println!(
        "email check:      misc {} | focused {}",
        MiscUtils::is_valid_email("user@example.com"),
        EmailValidator::is_valid("user@example.com")
    );
    println!(
        "describe_file:    misc {} | focused {}",
        MiscUtils::describe_file("report.pdf", 2048),
        FileUtils::describe_file("report.pdf", 2048)
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculator_covers_the_four_operations() {
        assert_eq!(Calculator::add(3.0, 4.0), 7.0);
        assert_eq!(Calculator::subtract(10.0, 6.0), 4.0);
        assert_eq!(Calculator::multiply(2.5, 4.0), 10.0);
        assert_eq!(Calculator::divide(10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn division_by_zero_is_an_error_not_a_panic() {
        assert_eq!(Calculator::divide(1.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn well_formed_addresses_pass() {
        for address in [
            "user@example.com",
            "first.last@sub.domain.org",
            "a+tag@x.co",
        ] {
            assert!(EmailValidator::is_valid(address), "should accept {address}");
        }
    }

    #[test]
    fn malformed_addresses_fail() {
        for address in [
            "",
            "plain",
            "@nouser.com",
            "user@",
            "user@nodot",
            "user @example.com",
        ] {
            assert!(!EmailValidator::is_valid(address), "should reject {address}");
        }
    }

    #[test]
    fn normalize_then_validate() {
        let normalized = EmailValidator::normalize("  USER@Example.COM ");
        assert_eq!(normalized, "user@example.com");
        assert!(EmailValidator::is_valid(&normalized));
        assert_eq!(EmailValidator::validate(&normalized), Ok(()));
    }

    #[test]
    fn validation_error_names_the_address() {
        let err = EmailValidator::validate("broken@").unwrap_err();
        assert_eq!(
            err,
            EmailError::Invalid {
                address: "broken@".to_string(),
            }
        );
        assert!(err.to_string().contains("broken@"));
    }

    #[test]
    fn deposit_and_withdraw_move_exact_amounts() {
        let mut account = BankAccount::new("Alice");
        account.deposit(10_000).unwrap();
        account.withdraw(3_500).unwrap();
        assert_eq!(account.balance(), 6_500);
        assert_eq!(account.owner(), "Alice");
    }

    #[test]
    fn non_positive_amounts_are_rejected_everywhere() {
        let mut account = BankAccount::with_balance("Alice", 1_000);
        assert_eq!(
            account.deposit(0),
            Err(AccountError::NonPositiveAmount { amount: 0 })
        );
        assert_eq!(
            account.withdraw(-5),
            Err(AccountError::NonPositiveAmount { amount: -5 })
        );
        assert_eq!(account.balance(), 1_000);
    }

    #[test]
    fn overdraw_names_both_numbers_and_changes_nothing() {
        let mut account = BankAccount::with_balance("Alice", 1_000);
        assert_eq!(
            account.withdraw(2_000),
            Err(AccountError::InsufficientFunds {
                requested: 2_000,
                available: 1_000,
            })
        );
        assert_eq!(account.balance(), 1_000);
    }

    #[test]
    fn failed_transfer_leaves_both_accounts_untouched() {
        let mut from = BankAccount::with_balance("Alice", 1_000);
        let mut to = BankAccount::with_balance("Bob", 500);
        assert!(from.transfer(&mut to, 2_000).is_err());
        assert_eq!(from.balance(), 1_000);
        assert_eq!(to.balance(), 500);
    }

    #[test]
    fn grab_bag_and_focused_homes_agree() {
        assert_eq!(
            MiscUtils::circle_area(2.0),
            GeometryUtils::circle_area(2.0)
        );
        assert_eq!(
            MiscUtils::to_title_case("rUST pROGRAMMING"),
            TextUtils::to_title_case("rUST pROGRAMMING")
        );
        assert_eq!(
            MiscUtils::format_date(2024, 3, 7),
            DateUtils::format_date(2024, 3, 7)
        );
        assert_eq!(
            MiscUtils::is_valid_email("user@example.com"),
            EmailValidator::is_valid("user@example.com")
        );
        assert_eq!(
            MiscUtils::describe_file("report.pdf", 2048),
            FileUtils::describe_file("report.pdf", 2048)
        );
    }

    #[test]
    fn title_case_lowercases_the_tail() {
        assert_eq!(TextUtils::to_title_case("rUST pROGRAMMING"), "Rust Programming");
        assert_eq!(TextUtils::to_title_case("hello world"), "Hello World");
    }

    #[test]
    fn file_sizes_humanize_across_unit_boundaries() {
        assert_eq!(FileUtils::describe_file("a.txt", 512), "a.txt (512 B)");
        assert_eq!(FileUtils::describe_file("b.bin", 2_048), "b.bin (2.0 KB)");
        assert_eq!(
            FileUtils::describe_file("c.iso", 5 * 1024 * 1024),
            "c.iso (5.0 MB)"
        );
    }

    mod transfer_properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn transfer_conserves_the_total(
                from_balance in 0i64..=1_000_000,
                to_balance in 0i64..=1_000_000,
                amount in 1i64..=2_000_000,
            ) {
                let mut from = BankAccount::with_balance("From", from_balance);
                let mut to = BankAccount::with_balance("To", to_balance);
                let total_before = from.balance() + to.balance();

                match from.transfer(&mut to, amount) {
                    Ok(()) => {
                        prop_assert_eq!(from.balance(), from_balance - amount);
                        prop_assert_eq!(to.balance(), to_balance + amount);
                    }
                    Err(_) => {
                        prop_assert_eq!(from.balance(), from_balance);
                        prop_assert_eq!(to.balance(), to_balance);
                    }
                }
                prop_assert_eq!(from.balance() + to.balance(), total_before);
            }
        }
    }
}

fn main() {
    println!("Pattern 6: Cohesion");
    println!("====================\n");

    println!("=== Calculator ===");
    calculator_example();
    println!();

    println!("=== Email Validation ===");
    email_example();
    println!();

    println!("=== Bank Accounts ===");
    account_example();
    println!();

    println!("=== Grab-Bag vs Focused Homes ===");
    cohesion_contrast_example();
}
